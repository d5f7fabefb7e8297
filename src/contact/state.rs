use std::time::Duration;

use super::{
    mailto, ContactError, Field, FormDraft, RelayConfig, RelayPayload, TransportError,
    ValidationError,
};

pub static SUCCESS_MESSAGE: &str = "Message sent successfully! I'll respond within 24 hours.";

/// How long a success banner stays up before the form returns to idle.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Ticket for the timer that clears a success banner.
///
/// Only dismisses the success it was issued for: a later submission bumps the
/// epoch and makes older tickets inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismissal {
    epoch: u64,
    pub after: Duration,
}

/// [`DISMISS_AFTER`] in the milliseconds browser timers take.
pub fn dismiss_delay_ms() -> f64 {
    DISMISS_AFTER.as_millis() as f64
}

/// Draft plus submission state for the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: FormDraft,
    state: SubmissionState,
    epoch: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn update_field(&mut self, field: Field, value: &str) {
        if self.state.is_pending() {
            log::debug!("ignoring edit to {field} while a submission is pending");
            return;
        }
        self.draft.set(field, value);
    }

    /// Empties the draft. Ignored while a submission is pending, since a
    /// failure must hand back what was sent.
    pub fn clear(&mut self) {
        if self.state.is_pending() {
            log::debug!("ignoring clear while a submission is pending");
            return;
        }
        self.draft.clear();
    }

    /// Validates the draft and moves to `Pending`, returning what to send.
    /// Nothing changes when this fails.
    pub fn begin_submit(&mut self, config: &RelayConfig) -> Result<RelayPayload, ContactError> {
        if self.state.is_pending() {
            return Err(ContactError::InFlight);
        }
        self.draft.validate()?;

        self.epoch += 1;
        self.state = SubmissionState::Pending;
        Ok(RelayPayload::new(&self.draft, config))
    }

    /// Records the relay's answer. On success the draft is cleared and a
    /// [`Dismissal`] is returned for the caller's timer.
    pub fn complete_submit(
        &mut self,
        outcome: Result<(), TransportError>,
        config: &RelayConfig,
    ) -> Option<Dismissal> {
        if !self.state.is_pending() {
            log::warn!("relay outcome arrived with no submission pending");
            return None;
        }
        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Succeeded(SUCCESS_MESSAGE.to_string());
                self.draft.clear();
                Some(Dismissal {
                    epoch: self.epoch,
                    after: DISMISS_AFTER,
                })
            }
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                self.state = SubmissionState::Failed(config.failure_message());
                None
            }
        }
    }

    /// Returns to `Idle` if the success this ticket belongs to is still showing.
    pub fn dismiss(&mut self, dismissal: Dismissal) -> bool {
        if dismissal.epoch == self.epoch && matches!(self.state, SubmissionState::Succeeded(_)) {
            self.state = SubmissionState::Idle;
            true
        } else {
            false
        }
    }

    pub fn direct_email_uri(&self, config: &RelayConfig) -> Result<String, ValidationError> {
        mailto::direct_email_uri(&self.draft, config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn alice() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Alice");
        form.update_field(Field::Email, "a@x.com");
        form.update_field(Field::Subject, "Hi");
        form.update_field(Field::Message, "Test");
        form
    }

    #[test]
    fn test_success_clears_draft_and_dismisses() {
        let config = RelayConfig::default();
        let mut form = alice();
        assert_eq!(form.state(), &SubmissionState::Idle);

        let payload = form.begin_submit(&config).unwrap();
        assert_eq!(payload.draft.name, "Alice");
        assert_eq!(form.state(), &SubmissionState::Pending);

        let dismissal = form.complete_submit(Ok(()), &config).unwrap();
        assert_eq!(
            form.state(),
            &SubmissionState::Succeeded(SUCCESS_MESSAGE.to_string())
        );
        assert!(form.draft().is_empty());
        assert_eq!(dismissal.after, Duration::from_secs(5));

        assert!(form.dismiss(dismissal));
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_failure_keeps_draft() {
        let config = RelayConfig::default();
        let mut form = alice();
        let before = form.draft().clone();

        form.begin_submit(&config).unwrap();
        let dismissal = form.complete_submit(Err(TransportError::Status(500)), &config);

        assert_eq!(dismissal, None);
        assert_eq!(
            form.state(),
            &SubmissionState::Failed(config.failure_message())
        );
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_incomplete_draft_stays_idle() {
        let config = RelayConfig::default();
        let mut form = alice();
        form.update_field(Field::Subject, "");

        let res = form.begin_submit(&config);
        assert_eq!(
            res,
            Err(ContactError::Validation(ValidationError::MissingField(
                Field::Subject
            )))
        );
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_pending_rejects_second_submit_and_edits() {
        let config = RelayConfig::default();
        let mut form = alice();
        form.begin_submit(&config).unwrap();

        assert_eq!(form.begin_submit(&config), Err(ContactError::InFlight));
        form.update_field(Field::Name, "Mallory");
        assert_eq!(form.draft().name, "Alice");
    }

    #[test]
    fn test_stale_dismissal_is_ignored() {
        let config = RelayConfig::default();
        let mut form = alice();
        form.begin_submit(&config).unwrap();
        let stale = form.complete_submit(Ok(()), &config).unwrap();

        // resubmit before the first banner timed out
        form.update_field(Field::Name, "Alice");
        form.update_field(Field::Email, "a@x.com");
        form.update_field(Field::Subject, "Again");
        form.update_field(Field::Message, "Second");
        form.begin_submit(&config).unwrap();
        let fresh = form.complete_submit(Ok(()), &config).unwrap();

        assert!(!form.dismiss(stale));
        assert!(matches!(form.state(), SubmissionState::Succeeded(_)));
        assert!(form.dismiss(fresh));
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_failure_can_be_retried() {
        let config = RelayConfig::default();
        let mut form = alice();
        form.begin_submit(&config).unwrap();
        form.complete_submit(Err(TransportError::Network("refused".to_string())), &config);

        form.begin_submit(&config).unwrap();
        assert_eq!(form.state(), &SubmissionState::Pending);
        form.complete_submit(Ok(()), &config);
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_clear_while_pending_keeps_draft_for_failure() {
        let config = RelayConfig::default();
        let mut form = alice();
        let before = form.draft().clone();
        form.begin_submit(&config).unwrap();

        form.clear();
        assert_eq!(form.draft(), &before);

        form.complete_submit(Err(TransportError::Status(500)), &config);
        assert_eq!(
            form.state(),
            &SubmissionState::Failed(config.failure_message())
        );
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_dismissal_delay_is_five_seconds() {
        let config = RelayConfig::default();
        let mut form = alice();
        form.begin_submit(&config).unwrap();
        let dismissal = form.complete_submit(Ok(()), &config).unwrap();
        assert_eq!(dismissal.after, DISMISS_AFTER);
        assert_eq!(dismiss_delay_ms(), 5000.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_banner_holds_until_timer_fires() {
        use tokio::time::{sleep, timeout, Instant};

        let config = RelayConfig::default();
        let mut form = alice();
        form.begin_submit(&config).unwrap();
        let dismissal = form.complete_submit(Ok(()), &config).unwrap();

        let started = Instant::now();
        let timer = sleep(dismissal.after);
        tokio::pin!(timer);

        let early = timeout(dismissal.after - Duration::from_millis(1), &mut timer).await;
        assert!(early.is_err());
        assert!(matches!(form.state(), SubmissionState::Succeeded(_)));

        timer.await;
        assert_eq!(started.elapsed(), DISMISS_AFTER);
        assert!(form.dismiss(dismissal));
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_clear_leaves_state_alone() {
        let config = RelayConfig::default();
        let mut form = alice();
        form.begin_submit(&config).unwrap();
        form.complete_submit(Err(TransportError::Status(503)), &config);

        form.clear();
        form.clear();
        assert!(form.draft().is_empty());
        assert!(matches!(form.state(), SubmissionState::Failed(_)));
    }
}
