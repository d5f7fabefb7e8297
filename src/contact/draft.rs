use std::fmt;

use super::ValidationError;

/// Upper bound on the message body, in UTF-16 code units like the
/// textarea's `maxlength`.
pub static MESSAGE_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of `s` as the browser counts it for `maxlength`.
pub fn message_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn truncate_message(value: &str) -> String {
    let mut used = 0;
    value
        .chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= MESSAGE_LIMIT
        })
        .collect()
}

/// The four values a visitor types into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Replaces one slot. The message is cut at [`MESSAGE_LIMIT`].
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = if field == Field::Message {
            truncate_message(value)
        } else {
            value.to_string()
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Every field must be filled in. Address syntax is left to the
    /// browser's `type="email"` check and the relay.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match Field::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            Some(field) => Err(ValidationError::MissingField(field)),
            None => Ok(()),
        }
    }
}
