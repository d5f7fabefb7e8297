mod draft;
mod mailto;
mod relay;
mod state;

pub use draft::{message_len, Field, FormDraft, MESSAGE_LIMIT};
pub use mailto::direct_email_uri;
pub use relay::{HttpRelay, Relay, RelayConfig, RelayPayload};
pub use state::{
    dismiss_delay_ms, ContactForm, Dismissal, SubmissionState, DISMISS_AFTER, SUCCESS_MESSAGE,
};

use std::cell::RefCell;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("couldn't reach the relay: {0}")]
    Network(String),
    #[error("relay responded with status {0}")]
    Status(u16),
    #[error("relay response wasn't valid JSON: {0}")]
    MalformedBody(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Somewhere a [`ContactForm`] lives between the steps of a submission.
///
/// Returns `None` once the form is gone (e.g. its component was unmounted).
pub trait FormStore {
    fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T>;
}

impl FormStore for RefCell<ContactForm> {
    fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Runs one submission: validate, go `Pending`, send once, record the outcome.
///
/// The store is only borrowed around the synchronous steps, so readers see
/// `Pending` while the request is in flight. Transport failures land in
/// [`SubmissionState::Failed`]; only validation and in-flight rejections are
/// returned as errors.
pub async fn submit<S, R>(store: &S, relay: &R) -> Result<Option<Dismissal>, ContactError>
where
    S: FormStore,
    R: Relay,
{
    let payload = match store.with_form(|form| form.begin_submit(relay.config())) {
        Some(payload) => payload?,
        None => return Ok(None),
    };
    let outcome = relay.deliver(&payload).await;
    Ok(store
        .with_form(|form| form.complete_submit(outcome, relay.config()))
        .flatten())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    struct FakeRelay<'a> {
        config: RelayConfig,
        outcome: Result<(), TransportError>,
        sent: RefCell<Vec<RelayPayload>>,
        // whether the form read as pending while the request was in flight
        seen: Cell<Option<bool>>,
        store: Option<&'a RefCell<ContactForm>>,
    }

    impl FakeRelay<'_> {
        fn new(outcome: Result<(), TransportError>) -> Self {
            Self {
                config: RelayConfig::default(),
                outcome,
                sent: RefCell::new(Vec::new()),
                seen: Cell::new(None),
                store: None,
            }
        }
    }

    impl Relay for FakeRelay<'_> {
        fn config(&self) -> &RelayConfig {
            &self.config
        }

        async fn deliver(&self, payload: &RelayPayload) -> Result<(), TransportError> {
            self.sent.borrow_mut().push(payload.clone());
            if let Some(store) = self.store {
                self.seen.set(Some(store.borrow().state().is_pending()));
            }
            self.outcome.clone()
        }
    }

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> RefCell<ContactForm> {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, name);
        form.update_field(Field::Email, email);
        form.update_field(Field::Subject, subject);
        form.update_field(Field::Message, message);
        RefCell::new(form)
    }

    #[tokio::test]
    async fn test_alice_scenario() {
        let store = filled("Alice", "a@x.com", "Hi", "Test");
        let relay = FakeRelay {
            store: Some(&store),
            ..FakeRelay::new(Ok(()))
        };
        assert_eq!(store.borrow().state(), &SubmissionState::Idle);

        let dismissal = submit(&store, &relay).await.unwrap().unwrap();

        assert_eq!(relay.seen.get(), Some(true));
        assert_eq!(
            store.borrow().state(),
            &SubmissionState::Succeeded(
                "Message sent successfully! I'll respond within 24 hours.".to_string()
            )
        );
        assert!(store.borrow().draft().is_empty());

        assert_eq!(dismissal.after, DISMISS_AFTER);
        assert!(store.borrow_mut().dismiss(dismissal));
        assert_eq!(store.borrow().state(), &SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_exactly_one_request_with_unmodified_fields() {
        let store = filled("Zoë O'Neil", "zoe@example.com", "Re: 50% & more", "a=b\nc");
        let relay = FakeRelay::new(Ok(()));

        submit(&store, &relay).await.unwrap();

        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].draft,
            FormDraft {
                name: "Zoë O'Neil".to_string(),
                email: "zoe@example.com".to_string(),
                subject: "Re: 50% & more".to_string(),
                message: "a=b\nc".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unusual_address_is_sent_as_typed() {
        let store = filled("Alice", "a..b@x.com", "Hi", "Test");
        let relay = FakeRelay::new(Ok(()));

        let res = submit(&store, &relay).await;

        assert!(matches!(res, Ok(Some(_))));
        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].draft.email, "a..b@x.com");
        assert_eq!(sent[0].reply_to, "a..b@x.com");
    }

    #[tokio::test]
    async fn test_incomplete_draft_sends_nothing() {
        let store = filled("Alice", "a@x.com", "", "Test");
        let relay = FakeRelay::new(Ok(()));

        let res = submit(&store, &relay).await;

        assert_eq!(
            res,
            Err(ContactError::Validation(ValidationError::MissingField(
                Field::Subject
            )))
        );
        assert!(relay.sent.borrow().is_empty());
        assert_eq!(store.borrow().state(), &SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_transport_failures_preserve_draft() {
        for outcome in [
            TransportError::Status(500),
            TransportError::Network("connection refused".to_string()),
            TransportError::MalformedBody("expected value".to_string()),
        ] {
            let store = filled("Alice", "a@x.com", "Hi", "Test");
            let before = store.borrow().draft().clone();
            let relay = FakeRelay::new(Err(outcome));

            let res = submit(&store, &relay).await;

            assert_eq!(res, Ok(None));
            assert_eq!(
                store.borrow().state(),
                &SubmissionState::Failed(relay.config.failure_message())
            );
            assert_eq!(store.borrow().draft(), &before);
        }
    }

    struct GoneStore;

    impl FormStore for GoneStore {
        fn with_form<T>(&self, _f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
            None
        }
    }

    #[tokio::test]
    async fn test_detached_store_sends_nothing() {
        let relay = FakeRelay::new(Ok(()));
        assert_eq!(submit(&GoneStore, &relay).await, Ok(None));
        assert!(relay.sent.borrow().is_empty());
    }
}
