//! Contact form validation and transient status messages
//!
//! Submission is simulated: a complete form always "sends". Messages are
//! shown above the form and expire on their own after a fixed time.

use serde::{Deserialize, Serialize};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent.";

/// Contact form timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long a status message stays visible
    pub message_ttl_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            message_ttl_ms: 5000,
        }
    }
}

/// Form field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "subject" => Some(Field::Subject),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

/// Current form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.is_empty())
    }
}

/// Status message kind, used as the element's modifier class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            MessageKind::Success => "form-message success",
            MessageKind::Error => "form-message error",
        }
    }
}

/// A status message shown above the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: &'static str,
    pub expires_at_ms: u64,
}

/// The contact form
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    config: ContactConfig,
    fields: ContactFields,
    messages: Vec<FormMessage>,
}

impl ContactForm {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    /// Submit at `now_ms`; returns the message that was shown
    pub fn submit(&mut self, now_ms: u64) -> &FormMessage {
        let (kind, text) = if self.fields.is_complete() {
            self.fields = ContactFields::default();
            (MessageKind::Success, SENT_MESSAGE)
        } else {
            (MessageKind::Error, MISSING_FIELDS_MESSAGE)
        };
        tracing::debug!(?kind, "contact form submitted");

        self.messages.push(FormMessage {
            kind,
            text,
            expires_at_ms: now_ms + self.config.message_ttl_ms,
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Visible messages, oldest first
    pub fn messages(&self) -> &[FormMessage] {
        &self.messages
    }

    /// Drop messages that expired by `now_ms`; returns how many were removed
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.messages.len();
        self.messages.retain(|message| message.expires_at_ms > now_ms);
        before - self.messages.len()
    }
}
