//! HTML rendering for contact form emails

use crate::types::ContactSubmission;

/// Subject line for the relayed email
pub fn subject_line(submission: &ContactSubmission) -> String {
    format!("New Contact Form Submission: {}", submission.subject)
}

/// Render the HTML body for a submission.
///
/// Every user-supplied value is escaped. The message block keeps the
/// visitor's whitespace and line breaks via `white-space: pre-wrap`.
pub fn render_contact_email(submission: &ContactSubmission) -> String {
    format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #ddd; border-radius: 8px;">
        <h2 style="color: #0056b3;">New Contact Form Submission</h2>
        <p>You have received a new message from your contact form:</p>
        <hr style="border-top: 1px solid #eee;">
        <p><strong>Name:</strong> {}</p>
        <p><strong>Email:</strong> {}</p>
        <p><strong>Subject:</strong> {}</p>
        <p><strong>Message:</strong></p>
        <div style="background-color: #f9f9f9; padding: 15px; border-left: 3px solid #007bff; margin-top: 10px; border-radius: 4px;">
            <p style="white-space: pre-wrap;">{}</p>
        </div>
        <hr style="border-top: 1px solid #eee; margin-top: 20px;">
        <p style="font-size: 0.9em; color: #777;">This email was sent from your website's contact form.</p>
    </div>
</body>
</html>"#,
        html_escape(&submission.name),
        html_escape(&submission.email),
        html_escape(&submission.subject),
        html_escape(&submission.message)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
