use std::sync::Arc;

use crate::dto::contact_dto::InquiryPayload;
use crate::error::Result;
use crate::mail::{templates, Mailer};

/// Turns one contact-form inquiry into the two outbound notifications.
#[derive(Clone)]
pub struct InquiryService {
    mailer: Arc<dyn Mailer>,
    owner_email: String,
}

impl InquiryService {
    pub fn new(mailer: Arc<dyn Mailer>, owner_email: &str) -> Self {
        Self {
            mailer,
            owner_email: owner_email.to_string(),
        }
    }

    /// Sends the owner notification and the submitter acknowledgment as two
    /// independent operations and combines their outcomes under the
    /// submitter-decides policy: the acknowledgment outcome is the request
    /// outcome, the owner copy is best-effort.
    pub async fn dispatch(&self, inquiry: &InquiryPayload) -> Result<()> {
        let owner_message = templates::owner_notification(&self.owner_email, inquiry);
        let ack_message = templates::submitter_acknowledgment(inquiry);

        let (owner_outcome, ack_outcome) = tokio::join!(
            self.mailer.send(&owner_message),
            self.mailer.send(&ack_message)
        );

        if let Err(e) = owner_outcome {
            tracing::warn!(error = %e, "owner notification failed; continuing");
        }
        if let Err(ref e) = ack_outcome {
            tracing::error!(error = %e, to = %inquiry.email, "acknowledgment send failed");
        }
        ack_outcome
    }
}
