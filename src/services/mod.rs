pub mod inquiry_service;
