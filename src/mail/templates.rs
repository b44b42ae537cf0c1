//! The two messages the contact form produces. Bodies are inline HTML in
//! the site's palette, same as the rest of the landing page.

use crate::dto::contact_dto::InquiryPayload;
use crate::mail::OutboundEmail;

pub fn owner_notification(owner_email: &str, inquiry: &InquiryPayload) -> OutboundEmail {
    let subject = format!("New Inquiry from {} - Fortune Writers", inquiry.name);
    let html_body = format!(
        r#"<h2>New Client Inquiry</h2>
<p><strong>Name:</strong> {}</p>
<p><strong>Phone:</strong> {}</p>
<p><strong>Email:</strong> {}</p>
<p>Please contact them soon.</p>"#,
        inquiry.name, inquiry.phone, inquiry.email
    );

    OutboundEmail {
        to: owner_email.to_string(),
        subject,
        html_body,
    }
}

pub fn submitter_acknowledgment(inquiry: &InquiryPayload) -> OutboundEmail {
    let html_body = format!(
        r#"<div style="font-family: 'Arial', sans-serif; max-width: 600px; margin: 0 auto; background-color: #0b0c10; color: #ffffff; border-radius: 10px; overflow: hidden;">
    <div style="width: 100%; height: 200px; background: linear-gradient(135deg, #66fcf1 0%, #45a29e 100%); display: flex; align-items: center; justify-content: center;">
        <h1 style="color: #0b0c10; font-size: 28px;">Fortune Writers</h1>
    </div>
    <div style="padding: 30px;">
        <h2 style="color: #66fcf1; margin-bottom: 20px;">Thank You for Reaching Out!</h2>
        <p style="color: #c5c6c7; font-size: 16px; line-height: 1.6;">Dear {},</p>
        <p style="color: #c5c6c7; font-size: 16px; line-height: 1.6;">
            We appreciate you contacting Fortune Writers. We have received your details and our team is already reviewing your inquiry.
        </p>
        <p style="color: #c5c6c7; font-size: 16px; line-height: 1.6;">
            We will contact you shortly to discuss how we can help you achieve your goals. We hope to deliver the expected results for you very soon.
        </p>
        <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #1f2833; text-align: center;">
            <p style="color: #45a29e; font-size: 14px;">Fortune Writers | Premium Services</p>
        </div>
    </div>
</div>"#,
        inquiry.name
    );

    OutboundEmail {
        to: inquiry.email.clone(),
        subject: "Thank You for Choosing Fortune Writers".to_string(),
        html_body,
    }
}
