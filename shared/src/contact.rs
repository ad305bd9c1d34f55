//! Contact-form submissions: validation and `mailto:` composition.

use anyhow::{bail, Result};

/// A submitted contact-form message with surrounding whitespace removed from
/// every field.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    /// Sender name (required).
    pub name: String,
    /// Address replies should go to (required).
    pub email: String,
    /// Optional callback number; may be empty.
    pub phone: String,
    /// Message body (required).
    pub message: String,
}

impl ContactMessage {
    /// Build a message from raw form field values, trimming each.
    pub fn from_fields(name: &str, email: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Name, email, and message must be non-empty; phone is optional.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            bail!("name, email, and message are required");
        }
        Ok(())
    }

    /// Compose the `mailto:` URI that opens the visitor's mail client with
    /// recipient, subject, and body pre-filled. Subject and body are
    /// percent-encoded as URI query components.
    pub fn mailto_href(&self, to: &str) -> String {
        let subject = format!("Portfolio Contact from {}", self.name);
        let body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
            self.name, self.email, self.phone, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ContactMessage;

    #[test]
    fn from_fields_trims_surrounding_whitespace() {
        let msg = ContactMessage::from_fields("  Jane ", " jane@x.com", "", "Hello there\n");
        assert_eq!(msg.name, "Jane");
        assert_eq!(msg.email, "jane@x.com");
        assert_eq!(msg.message, "Hello there");
    }

    #[test]
    fn missing_name_fails_validation() {
        let msg = ContactMessage::from_fields("", "a@b.com", "", "hi");
        assert!(msg.validate().is_err());
    }

    #[test]
    fn whitespace_only_message_fails_validation() {
        let msg = ContactMessage::from_fields("Jane", "a@b.com", "555", "   ");
        assert!(msg.validate().is_err());
    }

    #[test]
    fn empty_phone_is_accepted() {
        let msg = ContactMessage::from_fields("Jane", "jane@x.com", "", "Hello there");
        msg.validate().expect("should validate");
    }

    #[test]
    fn mailto_href_encodes_subject_and_body() {
        let msg = ContactMessage::from_fields("Jane", "jane@x.com", "", "Hello there");
        let href = msg.mailto_href("dnyaneshtupe@email.com");
        assert_eq!(
            href,
            "mailto:dnyaneshtupe@email.com?subject=Portfolio%20Contact%20from%20Jane&body=Name%3A%20Jane%0AEmail%3A%20jane%40x.com%0APhone%3A%20%0A%0AMessage%3A%0AHello%20there"
        );
    }

    #[test]
    fn mailto_href_keeps_phone_when_present() {
        let msg = ContactMessage::from_fields("Jane", "jane@x.com", "+1 555 0100", "Hi");
        let href = msg.mailto_href("dnyaneshtupe@email.com");
        assert!(href.contains("Phone%3A%20%2B1%20555%200100"));
    }
}
