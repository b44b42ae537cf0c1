use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::lead::{Lead, NewLead};
use crate::storage::LeadStore;

#[derive(Clone)]
pub struct PgLeadStore {
    pool: PgPool,
}

impl PgLeadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert(&self, lead: NewLead) -> Result<Lead> {
        let stored: Lead = sqlx::query_as(
            r#"
            INSERT INTO leads (id, name, university, year, semester, phone, email, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, university, year, semester, phone, email, submitted_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&lead.name)
        .bind(&lead.university)
        .bind(&lead.year)
        .bind(&lead.semester)
        .bind(&lead.phone)
        .bind(&lead.email)
        .bind(lead.submitted_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }
}
