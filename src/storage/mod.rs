//! Lead persistence.
//!
//! One operation: insert. Leads have no read, update, or delete path, so
//! the trait stays that narrow. [`postgres::PgLeadStore`] is the production
//! implementation over the shared pool.

pub mod postgres;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::lead::{Lead, NewLead};

#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Creates exactly one record and returns it as stored.
    async fn insert(&self, lead: NewLead) -> Result<Lead>;
}
