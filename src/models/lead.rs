use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A captured intake-form record. Leads are write-once: the site creates
/// them and never reads, updates, or deletes them again.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub university: String,
    pub year: String,
    pub semester: String,
    pub phone: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

/// Insert payload for a [`Lead`]. `submitted_at` is stamped with the
/// request-receipt time before the record reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub university: String,
    pub year: String,
    pub semester: String,
    pub phone: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}
