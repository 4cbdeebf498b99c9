//! Contact form validation and simulated submission
//!
//! Submitting walks the status banner through `Sending` and then a terminal
//! `Success` or `Error`. Delivery is a timer standing in for a network call;
//! it always succeeds and is never retried.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

pub const MSG_REQUIRED: &str = "Please fill in all required fields.";
pub const MSG_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_SENDING: &str = "Sending...";
pub const MSG_SENT: &str = "Message sent successfully! We will get back to you shortly.";

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

fn looks_like_email(value: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Subject)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Missing,
    MalformedEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

/// Inline message shown for a failed validation
pub fn validation_message(errors: &[FieldError]) -> &'static str {
    if errors.iter().any(|e| e.problem == Problem::Missing) {
        MSG_REQUIRED
    } else {
        MSG_EMAIL
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Every failing field, in form order
    pub fn validate(&self) -> Vec<FieldError> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                let value = self.value(field).trim();
                if field.is_required() && value.is_empty() {
                    Some(FieldError {
                        field,
                        problem: Problem::Missing,
                    })
                } else if field == Field::Email && !value.is_empty() && !looks_like_email(value) {
                    Some(FieldError {
                        field,
                        problem: Problem::MalformedEmail,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Sending => Some(MSG_SENDING),
            FormStatus::Success(msg) | FormStatus::Error(msg) => Some(msg),
        }
    }
}

/// Status line under the form; terminal states hide themselves
#[derive(Debug, Clone)]
pub struct StatusBanner {
    status: FormStatus,
    hide_at: Option<Instant>,
    hide_after: Duration,
}

impl StatusBanner {
    pub fn new(hide_after: Duration) -> Self {
        Self {
            status: FormStatus::Idle,
            hide_at: None,
            hide_after,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn show(&mut self, status: FormStatus, now: Instant) {
        self.hide_at = match status {
            FormStatus::Idle | FormStatus::Sending => None,
            _ => Some(now + self.hide_after),
        };
        self.status = status;
    }

    pub fn update(&mut self, now: Instant) {
        if self.hide_at.is_some_and(|at| now >= at) {
            self.hide_at = None;
            self.status = FormStatus::Idle;
        }
    }
}

/// Payload handed to delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    #[serde(flatten)]
    pub form: ContactForm,
}

impl Submission {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed(String),
}

/// Simulated delivery: waits `delay` and reports success
pub async fn deliver(submission: Submission, delay: Duration) -> SubmissionOutcome {
    match submission.to_json() {
        Ok(payload) => debug!(%payload, "Simulating contact form delivery"),
        Err(e) => debug!("Could not encode submission for logging: {}", e),
    }
    tokio::time::sleep(delay).await;
    info!("Contact form delivered");
    SubmissionOutcome::Delivered
}

/// Form contents plus submission state
#[derive(Debug, Clone)]
pub struct ContactFormState {
    pub form: ContactForm,
    banner: StatusBanner,
    invalid: Vec<Field>,
    sending: bool,
}

impl ContactFormState {
    pub fn new(status_hide: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            banner: StatusBanner::new(status_hide),
            invalid: Vec::new(),
            sending: false,
        }
    }

    pub fn status(&self) -> &FormStatus {
        self.banner.status()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Fields highlighted by the last failed validation
    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    /// Validate and start sending
    ///
    /// Returns the payload to deliver, or `None` when validation failed or a
    /// submission is already underway.
    pub fn submit(&mut self, now: Instant) -> Option<Submission> {
        if self.sending {
            debug!("Submission already in progress");
            return None;
        }

        let errors = self.form.validate();
        self.invalid = errors.iter().map(|e| e.field).collect();
        if !errors.is_empty() {
            debug!(invalid = errors.len(), "Contact form failed validation");
            self.banner
                .show(FormStatus::Error(validation_message(&errors).to_string()), now);
            return None;
        }

        self.sending = true;
        self.banner.show(FormStatus::Sending, now);
        Some(Submission {
            form: self.form.clone(),
        })
    }

    /// Apply the result of `deliver`
    pub fn complete(&mut self, outcome: SubmissionOutcome, now: Instant) {
        self.sending = false;
        match outcome {
            SubmissionOutcome::Delivered => {
                self.form.reset();
                self.banner.show(FormStatus::Success(MSG_SENT.to_string()), now);
            }
            SubmissionOutcome::Failed(reason) => {
                self.banner.show(FormStatus::Error(reason), now);
            }
        }
    }

    pub fn update(&mut self, now: Instant) {
        self.banner.update(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIDE: Duration = Duration::from_secs(5);

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_blank_required_fields_reported_in_order() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..Default::default()
        };
        let fields: Vec<Field> = form.validate().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
        assert_eq!(validation_message(&form.validate()), MSG_REQUIRED);
    }

    #[test]
    fn test_malformed_email() {
        for bad in ["ada", "ada@", "ada@example", "a da@example.com"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..filled()
            };
            let errors = form.validate();
            assert_eq!(
                errors,
                vec![FieldError {
                    field: Field::Email,
                    problem: Problem::MalformedEmail
                }],
                "{} should be rejected",
                bad
            );
            assert_eq!(validation_message(&errors), MSG_EMAIL);
        }
    }

    #[test]
    fn test_invalid_submit_shows_inline_error() {
        let now = Instant::now();
        let mut state = ContactFormState::new(HIDE);
        assert!(state.submit(now).is_none());
        assert!(!state.is_sending());
        assert!(state.is_invalid(Field::Name));
        assert!(!state.is_invalid(Field::Subject));
        assert_eq!(state.status(), &FormStatus::Error(MSG_REQUIRED.to_string()));
    }

    #[test]
    fn test_status_banner_hides_terminal_states() {
        let now = Instant::now();
        let mut banner = StatusBanner::new(HIDE);

        banner.show(FormStatus::Sending, now);
        banner.update(now + HIDE * 2);
        assert_eq!(banner.status(), &FormStatus::Sending);

        banner.show(FormStatus::Success(MSG_SENT.to_string()), now);
        banner.update(now + HIDE - Duration::from_millis(1));
        assert_eq!(banner.status().message(), Some(MSG_SENT));
        banner.update(now + HIDE);
        assert_eq!(banner.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_second_submit_refused_while_sending() {
        let now = Instant::now();
        let mut state = ContactFormState::new(HIDE);
        state.form = filled();

        assert!(state.submit(now).is_some());
        assert_eq!(state.status(), &FormStatus::Sending);
        assert!(state.submit(now).is_none());
    }

    #[test]
    fn test_failed_outcome_keeps_form() {
        let now = Instant::now();
        let mut state = ContactFormState::new(HIDE);
        state.form = filled();
        state.submit(now);

        state.complete(SubmissionOutcome::Failed("offline".to_string()), now);
        assert!(!state.is_sending());
        assert_eq!(state.form, filled());
        assert_eq!(state.status(), &FormStatus::Error("offline".to_string()));
    }

    #[test]
    fn test_submission_json_is_flat() {
        let json = Submission { form: filled() }.to_json().unwrap();
        assert!(json.contains("\"email\":\"ada@example.com\""));
        assert!(!json.contains("\"form\""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivery_takes_configured_delay() {
        let start = tokio::time::Instant::now();
        let outcome = deliver(Submission { form: filled() }, Duration::from_millis(2000)).await;
        assert_eq!(outcome, SubmissionOutcome::Delivered);
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_submission_resets_form() {
        let now = Instant::now();
        let mut state = ContactFormState::new(HIDE);
        state.form = filled();

        let submission = state.submit(now).unwrap();
        let handle = tokio::spawn(deliver(submission, Duration::from_millis(2000)));

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(!handle.is_finished());

        let outcome = handle.await.unwrap();
        state.complete(outcome, now);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.status().message(), Some(MSG_SENT));
        assert!(!state.is_sending());
    }
}
