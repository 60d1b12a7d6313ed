// Copyright © 2025 rustmailer.com
// Licensed under RustMailer License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::error::code::ErrorCode;
use crate::modules::error::TemplateResult;
use crate::raise_error;
use email_address::EmailAddress;
use mail_send::mail_builder::{headers::address::Address, MessageBuilder};
use std::{borrow::Cow, str::FromStr};

/// Both renderings of a template, ready to be put into a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    /// Plain text alternative for clients that do not show HTML.
    pub text: String,
}

impl RenderedEmail {
    /// Serializes a `multipart/alternative` message (text first, then HTML).
    /// Nothing is sent.
    pub fn to_mime(&self, from: &str, to: &str) -> TemplateResult<Vec<u8>> {
        let from = Address::new_address(None::<&str>, Cow::Owned(validate_address("from", from)?));
        let to = Address::new_address(None::<&str>, Cow::Owned(validate_address("to", to)?));

        MessageBuilder::new()
            .from(from)
            .to(to)
            .subject(self.subject.as_str())
            .text_body(self.text.as_str())
            .html_body(self.html.as_str())
            .write_to_vec()
            .map_err(|e| {
                raise_error!(
                    format!("Failed to build message: {}", e),
                    ErrorCode::MessageBuildFailed
                )
            })
    }
}

fn validate_address(field: &str, value: &str) -> TemplateResult<String> {
    let value = value.trim();
    match EmailAddress::from_str(value) {
        Ok(address) if address.email() == value => Ok(address.email()),
        _ => Err(raise_error!(
            format!("field: {} is not a valid email address: '{}'", field, value),
            ErrorCode::InvalidParameter
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::RenderedEmail;
    use crate::modules::error::code::ErrorCode;

    fn rendered() -> RenderedEmail {
        RenderedEmail {
            subject: "Welcome aboard".into(),
            html: "<html><body><p>Hello</p></body></html>".into(),
            text: "Hello\n".into(),
        }
    }

    #[test]
    fn test_to_mime_builds_alternative_message() {
        let bytes = rendered()
            .to_mime("noreply@example.com", "alice@example.com")
            .unwrap();
        let message = String::from_utf8(bytes).unwrap();
        assert!(message.contains("Subject: Welcome aboard"));
        assert!(message.contains("multipart/alternative"));
        assert!(message.contains("text/plain"));
        assert!(message.contains("text/html"));
        assert!(message.contains("alice@example.com"));
        assert!(message.find("text/plain").unwrap() < message.find("text/html").unwrap());
    }

    #[test]
    fn test_to_mime_rejects_invalid_address() {
        let err = rendered()
            .to_mime("not an address", "alice@example.com")
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParameter);
    }
}
