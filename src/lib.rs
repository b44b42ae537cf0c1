pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod mail;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;

use std::sync::Arc;

use crate::mail::Mailer;
use crate::services::inquiry_service::InquiryService;
use crate::storage::LeadStore;

/// Shared handler state. The mail transport and the lead store are injected
/// at startup so tests can swap in fakes without a live SMTP server or
/// database.
#[derive(Clone)]
pub struct AppState {
    pub inquiry_service: InquiryService,
    pub leads: Arc<dyn LeadStore>,
}

impl AppState {
    pub fn new(mailer: Arc<dyn Mailer>, leads: Arc<dyn LeadStore>, owner_email: &str) -> Self {
        let inquiry_service = InquiryService::new(mailer, owner_email);
        Self {
            inquiry_service,
            leads,
        }
    }
}
