use async_trait::async_trait;
use fortune_writers_backend::error::Result;
use fortune_writers_backend::mail::{Mailer, OutboundEmail};
use fortune_writers_backend::models::lead::{Lead, NewLead};
use fortune_writers_backend::storage::LeadStore;
use mockall::mock;

mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, email: &OutboundEmail) -> Result<()>;
    }
}

mock! {
    pub LeadStore {}

    #[async_trait]
    impl LeadStore for LeadStore {
        async fn insert(&self, lead: NewLead) -> Result<Lead>;
    }
}
