use regex::Regex;
use std::{future::Future, sync::LazyLock, time::Duration};
use thiserror::Error;

// local@domain.tld with no whitespace and a single '@'
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    InFlight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Couldn't reach the server. Please try again later.")]
    Network,
    #[error("Your message was rejected: {0}")]
    Rejected(String),
    #[error("Too many messages. Please wait a moment and try again.")]
    RateLimited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Required fields first, then the email shape. Stops at the first failure.
    /// A field is missing only when it is the empty string.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [Field::Name, Field::Email, Field::Subject, Field::Message];
        if required.iter().any(|f| self.get(*f).is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Where a validated message goes. The only seam to a real backend.
pub trait SubmissionTransport {
    fn submit(&self, payload: ContactFields) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stand-in transport: waits a fixed latency, then always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, payload: ContactFields) -> Result<(), SubmitError> {
        log::debug!(
            "simulating delivery of {:?} from {}",
            payload.subject,
            payload.email
        );
        wait(self.latency).await;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
async fn wait(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

// submissions only ever start in the browser
#[cfg(not(feature = "hydrate"))]
async fn wait(_duration: Duration) {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub message: String,
    pub fading: bool,
}

/// Holds at most one banner. Ids let stale dismiss timers miss newer banners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerSlot {
    current: Option<Banner>,
    next_id: u64,
}

impl BannerSlot {
    pub fn show(&mut self, kind: BannerKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Banner {
            id,
            kind,
            message: message.into(),
            fading: false,
        });
        id
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }

    pub fn fade(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(b) if b.id == id => {
                b.fading = true;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|b| b.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    phase: SubmissionPhase,
    banner: BannerSlot,
}

impl ContactFormState {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.current()
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Submitting => SENDING_LABEL,
            _ => SEND_LABEL,
        }
    }

    /// Validate and move to `Submitting`, handing back the payload to send.
    /// A validation failure shows an error banner and leaves the phase alone.
    pub fn begin_submit(&mut self) -> Result<ContactFields, ContactError> {
        if self.phase != SubmissionPhase::Idle {
            return Err(ContactError::InFlight);
        }
        if let Err(e) = self.fields.validate() {
            self.banner.show(BannerKind::Error, e.to_string());
            return Err(e);
        }
        self.phase = SubmissionPhase::Submitting;
        Ok(self.fields.clone())
    }

    /// Record the transport outcome. Returns the id of the banner shown.
    pub fn complete_submit(&mut self, outcome: Result<(), SubmitError>) -> u64 {
        match outcome {
            Ok(()) => {
                self.phase = SubmissionPhase::Succeeded;
                self.fields = ContactFields::default();
                self.banner.show(BannerKind::Success, SUCCESS_MESSAGE)
            }
            Err(e) => {
                self.phase = SubmissionPhase::Failed;
                self.banner.show(BannerKind::Error, e.to_string())
            }
        }
    }

    /// Re-enable the form after a finished submission.
    pub fn settle(&mut self) {
        if matches!(
            self.phase,
            SubmissionPhase::Succeeded | SubmissionPhase::Failed
        ) {
            self.phase = SubmissionPhase::Idle;
        }
    }

    pub fn fade_banner(&mut self, id: u64) -> bool {
        self.banner.fade(id)
    }

    pub fn dismiss_banner(&mut self, id: u64) -> bool {
        self.banner.dismiss(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    struct FakeTransport {
        outcome: Result<(), SubmitError>,
        calls: Cell<usize>,
    }

    impl FakeTransport {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl SubmissionTransport for FakeTransport {
        async fn submit(&self, _payload: ContactFields) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b.c "));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            let mut fields = filled();
            fields.set(field, String::new());
            assert_eq!(fields.validate(), Err(ContactError::MissingFields));
        }
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        for field in [Field::Name, Field::Subject, Field::Message] {
            let mut fields = filled();
            fields.set(field, "   ".to_string());
            assert_eq!(fields.validate(), Ok(()));
        }
        // present, so the email shape check is what rejects it
        let mut fields = filled();
        fields.email = " ".to_string();
        assert_eq!(fields.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_missing_fields_checked_before_email() {
        let mut fields = filled();
        fields.email = "not-an-email".to_string();
        fields.message = String::new();
        assert_eq!(fields.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut fields = filled();
        for email in ["not-an-email", "a@b", "a@b.c "] {
            fields.email = email.to_string();
            assert_eq!(fields.validate(), Err(ContactError::InvalidEmail));
        }
        fields.email = "a@b.co".to_string();
        assert_eq!(fields.validate(), Ok(()));
    }

    #[test]
    fn test_validation_failure_does_not_submit() {
        let mut state = ContactFormState::default();
        state.fields = filled();
        state.fields.subject = String::new();

        assert_eq!(state.begin_submit(), Err(ContactError::MissingFields));
        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert!(!state.submit_disabled());
        let banner = state.banner().expect("error banner should be shown");
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, "Please fill in all fields");

        state.fields.subject = "Hi".to_string();
        state.fields.email = "a@b".to_string();
        assert_eq!(state.begin_submit(), Err(ContactError::InvalidEmail));
        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert_eq!(
            state.banner().map(|b| b.message.as_str()),
            Some("Please enter a valid email address")
        );
    }

    #[tokio::test]
    async fn test_successful_submission_sequence() {
        let transport = FakeTransport::new(Ok(()));
        let mut state = ContactFormState::default();
        state.fields = filled();
        assert_eq!(state.submit_label(), SEND_LABEL);

        let payload = state.begin_submit().expect("valid form should submit");
        assert_eq!(payload, filled());
        assert!(state.submit_disabled());
        assert_eq!(state.submit_label(), SENDING_LABEL);
        assert!(state.banner().is_none());

        let outcome = transport.submit(payload).await;
        let id = state.complete_submit(outcome);
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(state.phase(), SubmissionPhase::Succeeded);
        assert_eq!(state.fields, ContactFields::default());
        let banner = state.banner().expect("success banner should be shown");
        assert_eq!((banner.id, banner.kind), (id, BannerKind::Success));
        // still disabled until the settle delay passes
        assert!(state.submit_disabled());
        assert_eq!(state.submit_label(), SEND_LABEL);

        state.settle();
        assert!(!state.submit_disabled());
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_fields() {
        let transport = FakeTransport::new(Err(SubmitError::RateLimited));
        let mut state = ContactFormState::default();
        state.fields = filled();

        let payload = state.begin_submit().expect("valid form should submit");
        let outcome = transport.submit(payload).await;
        state.complete_submit(outcome);
        assert_eq!(state.phase(), SubmissionPhase::Failed);
        assert_eq!(state.fields, filled());
        let banner = state.banner().expect("error banner should be shown");
        assert_eq!(banner.kind, BannerKind::Error);
        assert!(banner.message.starts_with("Too many messages"));

        state.settle();
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_simulated_transport_always_succeeds() {
        let transport = SimulatedTransport::new(Duration::from_millis(2000));
        assert_eq!(transport.submit(filled()).await, Ok(()));
        assert_eq!(transport.submit(ContactFields::default()).await, Ok(()));
    }

    #[test]
    fn test_resubmit_while_in_flight() {
        let mut state = ContactFormState::default();
        state.fields = filled();
        state.begin_submit().expect("valid form should submit");
        assert_eq!(state.begin_submit(), Err(ContactError::InFlight));
        assert!(state.banner().is_none());
        assert_eq!(state.phase(), SubmissionPhase::Submitting);
        // settle only applies to finished submissions
        state.settle();
        assert_eq!(state.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn test_single_banner_replaced() {
        let mut slot = BannerSlot::default();
        let first = slot.show(BannerKind::Error, "first");
        let second = slot.show(BannerKind::Success, "second");
        assert_ne!(first, second);
        assert_eq!(slot.current().map(|b| b.message.as_str()), Some("second"));

        // timers from the replaced banner must not touch the new one
        assert!(!slot.fade(first));
        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|b| b.fading), Some(false));

        assert!(slot.fade(second));
        assert_eq!(slot.current().map(|b| b.fading), Some(true));
        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
        assert!(!slot.dismiss(second));
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::Rejected("spam".to_string()).to_string(),
            "Your message was rejected: spam"
        );
        assert!(SubmitError::Network.to_string().contains("try again"));
    }
}
