use url::form_urlencoded;

use super::{Field, FormDraft, RelayConfig, ValidationError};

/// Percent-encodes one URI component. Spaces become `%20`, which mail
/// handlers understand, rather than the `+` of form encoding.
fn encode_component(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Builds a `mailto:` URI that hands the current draft to the visitor's own
/// mail client.
pub fn direct_email_uri(draft: &FormDraft, config: &RelayConfig) -> Result<String, ValidationError> {
    if draft.message.is_empty() {
        return Err(ValidationError::MissingField(Field::Message));
    }
    let subject = if draft.subject.is_empty() {
        config.fallback_subject.as_str()
    } else {
        draft.subject.as_str()
    };
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        draft.name, draft.email, draft.message
    );
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        config.contact_email,
        encode_component(subject),
        encode_component(&body)
    ))
}
