//! HTML mail composition. Works from sanitized [`RelayedMessage`] values
//! only; nothing here escapes, so callers must hand over clean text.

use mailer::OutboundEmail;
use shared::domain::RelayedMessage;

/// Notification to the site operator about one chat submission. Reply-to is
/// the visitor so the operator can answer directly.
pub fn notification_email(
    relayed: &RelayedMessage,
    operator_email: &str,
    site_name: &str,
) -> OutboundEmail {
    let contact = &relayed.contact;
    let html_body = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {{ font-family: Arial, sans-serif; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #e63946, #e10098); color: white; padding: 20px; border-radius: 10px 10px 0 0; }}
    .content {{ background: #f8f9fa; padding: 20px; border-radius: 0 0 10px 10px; }}
    .field {{ margin-bottom: 15px; }}
    .label {{ font-weight: bold; color: #e63946; }}
    .message-box {{ background: white; padding: 15px; border-left: 4px solid #e63946; margin-top: 15px; border-radius: 5px; }}
  </style>
</head>
<body>
  <div class='container'>
    <div class='header'>
      <h2 style='margin: 0;'>New Message from {site_name} Chat</h2>
    </div>
    <div class='content'>
      <div class='field'><span class='label'>Name:</span> {name}</div>
      <div class='field'><span class='label'>Email:</span> <a href='mailto:{email}'>{email}</a></div>
      <div class='field'><span class='label'>Phone:</span> {phone}</div>
      <div class='field'><span class='label'>Time:</span> {timestamp}</div>
      <div class='message-box'>
        <span class='label'>Message:</span>
        <p>{message}</p>
      </div>
      <hr>
      <p style='font-size: 12px; color: #999;'>This message was sent from the {site_name} website chat.</p>
    </div>
  </div>
</body>
</html>
"#,
        name = contact.name,
        email = contact.email,
        phone = contact.phone,
        timestamp = relayed.timestamp,
        message = relayed.message,
    );

    OutboundEmail {
        to: operator_email.to_string(),
        reply_to: Some(contact.email.clone()),
        subject: format!("New Chat Message from {}", contact.name),
        html_body,
    }
}

/// Best-effort thank-you note back to the visitor, echoing their message.
pub fn acknowledgment_email(relayed: &RelayedMessage, site_name: &str) -> OutboundEmail {
    let contact = &relayed.contact;
    let html_body = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {{ font-family: Arial, sans-serif; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #e63946, #e10098); color: white; padding: 20px; border-radius: 10px 10px 0 0; }}
    .content {{ background: #f8f9fa; padding: 20px; border-radius: 0 0 10px 10px; }}
  </style>
</head>
<body>
  <div class='container'>
    <div class='header'>
      <h2 style='margin: 0;'>Thank You for Contacting Us!</h2>
    </div>
    <div class='content'>
      <p>Hi {name},</p>
      <p>We've received your message and appreciate you reaching out to {site_name}.</p>
      <p>We'll review your message and get back to you as soon as possible.</p>
      <hr>
      <p style='font-size: 12px; color: #999;'><strong>Your Message:</strong><br>{message}</p>
      <hr>
      <p>Best regards,<br><strong>{site_name} Team</strong></p>
    </div>
  </div>
</body>
</html>
"#,
        name = contact.name,
        message = relayed.message,
    );

    OutboundEmail {
        to: contact.email.clone(),
        reply_to: None,
        subject: format!("We received your message - {site_name}"),
        html_body,
    }
}
