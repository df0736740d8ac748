//! Message model representing a single delivered or sent email

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to a message by the storage layer
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmailId(pub String);

impl EmailId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EmailId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmailId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Attachment metadata carried alongside a message. Never inspected by threading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub size: u64,
}

/// An immutable record of one email as handed over by the ingestion layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    /// Storage identifier, unique per message
    pub id: EmailId,
    /// Protocol Message-ID header (e.g. "<abc@mail.example.com>")
    pub message_id: String,
    /// In-Reply-To header, if any
    #[serde(default)]
    pub in_reply_to: Option<String>,
    /// References header, oldest ancestor first
    #[serde(default)]
    pub references: Vec<String>,
    /// Sender address
    pub from: String,
    /// Recipients (To field)
    #[serde(default)]
    pub to: Vec<String>,
    /// CC recipients
    #[serde(default)]
    pub cc: Vec<String>,
    /// BCC recipients
    #[serde(default)]
    pub bcc: Vec<String>,
    /// Subject line as received
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body_text: Option<String>,
    #[serde(default)]
    pub body_html: Option<String>,
    /// When the message was received (or sent, for outbound mail)
    pub received_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl EmailMessage {
    /// Create a new message builder
    pub fn builder(id: impl Into<EmailId>, message_id: impl Into<String>) -> EmailMessageBuilder {
        EmailMessageBuilder::new(id.into(), message_id.into())
    }
}

/// Builder for creating EmailMessage instances
pub struct EmailMessageBuilder {
    id: EmailId,
    message_id: String,
    in_reply_to: Option<String>,
    references: Vec<String>,
    from: Option<String>,
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    subject: String,
    body_text: Option<String>,
    body_html: Option<String>,
    received_at: Option<DateTime<Utc>>,
    attachments: Vec<Attachment>,
}

impl EmailMessageBuilder {
    fn new(id: EmailId, message_id: String) -> Self {
        Self {
            id,
            message_id,
            in_reply_to: None,
            references: Vec::new(),
            from: None,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: String::new(),
            body_text: None,
            body_html: None,
            received_at: None,
            attachments: Vec::new(),
        }
    }

    pub fn in_reply_to(mut self, in_reply_to: impl Into<String>) -> Self {
        self.in_reply_to = Some(in_reply_to.into());
        self
    }

    pub fn references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn to<I, S>(mut self, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to = to.into_iter().map(Into::into).collect();
        self
    }

    pub fn cc<I, S>(mut self, cc: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc = cc.into_iter().map(Into::into).collect();
        self
    }

    pub fn bcc<I, S>(mut self, bcc: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bcc = bcc.into_iter().map(Into::into).collect();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body_text(mut self, body_text: Option<String>) -> Self {
        self.body_text = body_text;
        self
    }

    pub fn body_html(mut self, body_html: Option<String>) -> Self {
        self.body_html = body_html;
        self
    }

    pub fn received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = Some(received_at);
        self
    }

    pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn build(self) -> EmailMessage {
        EmailMessage {
            id: self.id,
            message_id: self.message_id,
            in_reply_to: self.in_reply_to,
            references: self.references,
            from: self.from.unwrap_or_default(),
            to: self.to,
            cc: self.cc,
            bcc: self.bcc,
            subject: self.subject,
            body_text: self.body_text,
            body_html: self.body_html,
            received_at: self.received_at.unwrap_or_else(Utc::now),
            attachments: self.attachments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_builder_defaults() {
        let msg = EmailMessage::builder("1", "<m1@example.com>").build();
        assert_eq!(msg.id.as_str(), "1");
        assert_eq!(msg.message_id, "<m1@example.com>");
        assert!(msg.in_reply_to.is_none());
        assert!(msg.references.is_empty());
        assert!(msg.from.is_empty());
        assert!(msg.subject.is_empty());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "42",
            "messageId": "<m42@example.com>",
            "inReplyTo": "<m41@example.com>",
            "from": "alice@example.com",
            "to": ["bob@example.com"],
            "subject": "Re: Invoice",
            "receivedAt": "2024-03-01T10:00:00Z"
        }"#;

        let msg: EmailMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id, EmailId::new("42"));
        assert_eq!(msg.in_reply_to.as_deref(), Some("<m41@example.com>"));
        assert!(msg.references.is_empty());
        assert!(msg.cc.is_empty());
        assert_eq!(
            msg.received_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
        );
    }
}
