use std::future::Future;

use http::header::{ACCEPT, CONTENT_TYPE};
use url::form_urlencoded;

use super::{FormDraft, TransportError};

static RELAY_BASE: &str = "https://formsubmit.co/ajax";
static OWNER_EMAIL: &str = "thashreefkhan4@gmail.com";

/// Fixed parameters for the form relay and the direct-email fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub contact_email: String,
    pub subject_prefix: String,
    pub template: String,
    pub cc: String,
    pub next: String,
    pub fallback_subject: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: format!("{RELAY_BASE}/{OWNER_EMAIL}"),
            contact_email: OWNER_EMAIL.to_string(),
            subject_prefix: "Portfolio Contact: ".to_string(),
            template: "table".to_string(),
            cc: OWNER_EMAIL.to_string(),
            next: "https://thashreefkhan.dev/#contact".to_string(),
            fallback_subject: "Portfolio Contact".to_string(),
        }
    }
}

impl RelayConfig {
    pub fn failure_message(&self) -> String {
        format!(
            "Failed to send message. Please email me directly at {}",
            self.contact_email
        )
    }
}

/// One submission as the relay receives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayPayload {
    pub draft: FormDraft,
    pub relay_subject: String,
    pub reply_to: String,
    pub template: String,
    pub cc: String,
    pub next: String,
}

impl RelayPayload {
    pub fn new(draft: &FormDraft, config: &RelayConfig) -> Self {
        Self {
            draft: draft.clone(),
            relay_subject: format!("{}{}", config.subject_prefix, draft.subject),
            reply_to: draft.email.clone(),
            template: config.template.clone(),
            cc: config.cc.clone(),
            next: config.next.clone(),
        }
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("name", &self.draft.name)
            .append_pair("email", &self.draft.email)
            .append_pair("subject", &self.draft.subject)
            .append_pair("message", &self.draft.message)
            .append_pair("_subject", &self.relay_subject)
            .append_pair("_replyto", &self.reply_to)
            .append_pair("_template", &self.template)
            .append_pair("_captcha", "false")
            .append_pair("_cc", &self.cc)
            .append_pair("_next", &self.next)
            .finish()
    }
}

/// Delivers a payload to the form relay. One call, one attempt.
pub trait Relay {
    fn config(&self) -> &RelayConfig;

    fn deliver(
        &self,
        payload: &RelayPayload,
    ) -> impl Future<Output = Result<(), TransportError>>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpRelay {
    http: reqwest::Client,
    config: RelayConfig,
}

impl HttpRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: RelayConfig) -> Self {
        Self { http, config }
    }
}

impl Relay for HttpRelay {
    fn config(&self) -> &RelayConfig {
        &self.config
    }

    async fn deliver(&self, payload: &RelayPayload) -> Result<(), TransportError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .body(payload.encode())
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
        log::debug!("relay accepted submission: {body}");
        Ok(())
    }
}
