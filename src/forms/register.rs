use log::{info, warn};

use crate::api::{FieldErrors, SubmitError, SubmitOutcome};
use crate::components::toast::Notifier;
use crate::forms::models::{
    ConstraintViolation, Field, RegistrationFields, RegistrationKind, RegistrationPayload,
};

pub const SUCCESS_FALLBACK: &str = "Registration submitted ✅";
pub const FAILURE_FALLBACK: &str = "Oops, failed to submit. Please try again.";
pub const SUCCESS_DETAILS: &str =
    "We’ve emailed you a confirmation. Our team will review and get back to you shortly.";

/// At most this many server messages are folded into the error toast.
const TOAST_MESSAGE_LIMIT: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not completed yet.
    InFlight,
    Invalid(Vec<ConstraintViolation>),
}

/// Field state and submission lifecycle of one registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterState {
    pub kind: RegistrationKind,
    pub fields: RegistrationFields,
    pub field_errors: FieldErrors,
    pub submitting: bool,
    pub success_open: bool,
    first_name: String,
}

impl RegisterState {
    pub fn new(kind: RegistrationKind) -> Self {
        Self {
            kind,
            fields: RegistrationFields::default(),
            field_errors: FieldErrors::new(),
            submitting: false,
            success_open: false,
            first_name: String::new(),
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        if field == Field::FirstName {
            self.first_name = value.trim().to_string();
        }
        self.fields.set(field, value);
    }

    /// Applies a picker selection; `None` clears it.
    pub fn select(&mut self, field: Field, value: Option<String>) {
        self.set_field(field, value.unwrap_or_default());
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.field_errors.first(field.name())
    }

    /// Gate run before any request. On success the form is marked as submitting,
    /// old field errors are dropped and the payload to send is returned.
    pub fn begin_submit(&mut self) -> Result<RegistrationPayload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let violations = self.fields.validate();
        if !violations.is_empty() {
            return Err(SubmitBlocked::Invalid(violations));
        }

        self.first_name = self.fields.first_name.trim().to_string();
        self.field_errors.clear();
        self.submitting = true;
        Ok(self.fields.to_payload(self.kind))
    }

    /// Applies the adapter's answer. Returns the name of the field that should
    /// receive focus, if the server pointed at one.
    pub fn finish(
        &mut self,
        result: Result<SubmitOutcome, SubmitError>,
        notifier: &dyn Notifier,
    ) -> Option<String> {
        self.submitting = false;

        match result {
            Ok(outcome) => {
                info!("{:?} registration accepted", self.kind);
                notifier.success(outcome.message.unwrap_or_else(|| SUCCESS_FALLBACK.to_string()));
                self.fields.clear();
                self.success_open = true;
                None
            }
            Err(SubmitError::Validation { message, errors }) => {
                warn!("Registration failed validation on {:?}", errors.first_field());
                let summary = errors.summary(TOAST_MESSAGE_LIMIT);
                notifier.error(if summary.is_empty() { message } else { summary });
                let focus = errors.first_field().map(str::to_string);
                self.field_errors = errors;
                focus
            }
            Err(err) => {
                warn!("Registration failed (status {:?}): {}", err.status(), err);
                let message = err.server_message().map(str::to_string);
                notifier.error(message.unwrap_or_else(|| FAILURE_FALLBACK.to_string()));
                None
            }
        }
    }

    pub fn close_success(&mut self) {
        self.success_open = false;
    }

    pub fn dialog_title(&self) -> String {
        if self.first_name.is_empty() {
            "Thanks!".to_string()
        } else {
            format!("Thanks, {}!", self.first_name)
        }
    }

    pub fn dialog_subtitle(&self) -> String {
        format!("Your {} registration was received.", self.kind.audience())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::api::RegistrationApi;
    use crate::components::toast::ToastLevel;
    use crate::forms::models::ConstraintKind;

    struct FakeApi {
        calls: Cell<usize>,
        sent: RefCell<Vec<RegistrationPayload>>,
        reply: Result<SubmitOutcome, SubmitError>,
    }

    impl FakeApi {
        fn replying(reply: Result<SubmitOutcome, SubmitError>) -> Self {
            Self { calls: Cell::new(0), sent: RefCell::new(Vec::new()), reply }
        }
    }

    impl RegistrationApi for FakeApi {
        fn submit<'a>(
            &'a self,
            payload: &'a RegistrationPayload,
        ) -> LocalBoxFuture<'a, Result<SubmitOutcome, SubmitError>> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(payload.clone());
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<(ToastLevel, String)>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: ToastLevel, message: String) {
            self.0.borrow_mut().push((level, message));
        }
    }

    fn filled_state(kind: RegistrationKind) -> RegisterState {
        let mut state = RegisterState::new(kind);
        state.set_field(Field::FirstName, "  Amara ".into());
        state.set_field(Field::LastName, "Okafor".into());
        state.set_field(Field::Email, "amara@example.com".into());
        state.set_field(Field::Phone, "+254700000000".into());
        state.select(Field::Country, Some("Kenya".into()));
        state.select(Field::Niche, Some("Fashion".into()));
        state.set_field(Field::Instagram, "https://instagram.com/amara".into());
        state.set_field(Field::About, "Styling and lookbooks for slow fashion labels.".into());
        state
    }

    /// Same sequence `RegisterForm::update` runs: gate, one request, finish.
    fn submit(
        state: &mut RegisterState,
        api: &dyn RegistrationApi,
        notifier: &dyn Notifier,
    ) -> Result<Option<String>, SubmitBlocked> {
        let payload = state.begin_submit()?;
        let result = block_on(api.submit(&payload));
        Ok(state.finish(result, notifier))
    }

    fn ok() -> Result<SubmitOutcome, SubmitError> {
        Ok(SubmitOutcome { message: None })
    }

    #[test]
    fn empty_required_fields_never_reach_the_network() {
        let api = FakeApi::replying(ok());
        let notifier = RecordingNotifier::default();
        let mut state = RegisterState::new(RegistrationKind::Creator);

        let blocked = submit(&mut state, &api, &notifier).unwrap_err();

        assert!(matches!(blocked, SubmitBlocked::Invalid(ref v) if v.len() == 7));
        assert_eq!(api.calls.get(), 0);
        assert!(!state.submitting);
        assert!(notifier.0.borrow().is_empty());
    }

    #[test]
    fn short_about_is_blocked_client_side() {
        let api = FakeApi::replying(ok());
        let notifier = RecordingNotifier::default();
        let mut state = filled_state(RegistrationKind::Creator);
        state.set_field(Field::About, "Nineteen chars long".into());

        let blocked = submit(&mut state, &api, &notifier).unwrap_err();

        assert_eq!(
            blocked,
            SubmitBlocked::Invalid(vec![ConstraintViolation {
                field: Field::About,
                kind: ConstraintKind::TooShort { min: 20 },
            }])
        );
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn success_resets_fields_and_opens_dialog() {
        let api = FakeApi::replying(ok());
        let notifier = RecordingNotifier::default();
        let mut state = filled_state(RegistrationKind::Business);

        let focus = submit(&mut state, &api, &notifier).unwrap();

        assert_eq!(focus, None);
        assert_eq!(api.calls.get(), 1);
        assert!(state.fields.is_empty());
        assert_eq!(state.fields.country, "");
        assert_eq!(state.fields.niche, "");
        assert!(state.success_open);
        assert!(!state.submitting);
        assert_eq!(state.dialog_title(), "Thanks, Amara!");
        assert_eq!(state.dialog_subtitle(), "Your Brand registration was received.");
        assert_eq!(
            *notifier.0.borrow(),
            vec![(ToastLevel::Success, SUCCESS_FALLBACK.to_string())]
        );

        let sent = api.sent.borrow();
        assert_eq!(sent[0].kind, RegistrationKind::Business);
        assert_eq!(sent[0].country, "Kenya");
        assert_eq!(sent[0].niche, "Fashion");
        assert_eq!(sent[0].tiktok, None);

        state.close_success();
        assert!(!state.success_open);
    }

    #[test]
    fn server_message_is_used_for_success_toast() {
        let api = FakeApi::replying(Ok(SubmitOutcome { message: Some("See you soon".into()) }));
        let notifier = RecordingNotifier::default();
        let mut state = filled_state(RegistrationKind::Creator);

        submit(&mut state, &api, &notifier).unwrap();

        assert_eq!(notifier.0.borrow()[0].1, "See you soon");
    }

    #[test]
    fn field_errors_are_shown_and_first_field_focused() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Invalid email");
        let api = FakeApi::replying(Err(SubmitError::Validation {
            message: "The given data was invalid.".into(),
            errors,
        }));
        let notifier = RecordingNotifier::default();
        let mut state = filled_state(RegistrationKind::Creator);

        let focus = submit(&mut state, &api, &notifier).unwrap();

        assert_eq!(focus.as_deref(), Some("email"));
        assert_eq!(state.error_for(Field::Email), Some("Invalid email"));
        assert_eq!(state.error_for(Field::Phone), None);
        assert_eq!(state.fields.email, "amara@example.com");
        assert!(!state.success_open);
        assert!(!state.submitting);
        assert_eq!(
            *notifier.0.borrow(),
            vec![(ToastLevel::Error, "Invalid email".to_string())]
        );
    }

    #[test]
    fn toast_summarises_at_most_two_messages() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", "Phone taken");
        errors.insert("email", "Invalid email");
        errors.insert("about", "Too short");
        let mut state = filled_state(RegistrationKind::Creator);
        let notifier = RecordingNotifier::default();

        state.begin_submit().unwrap();
        let focus = state.finish(
            Err(SubmitError::Validation { message: "invalid".into(), errors }),
            &notifier,
        );

        assert_eq!(focus.as_deref(), Some("phone"));
        assert_eq!(notifier.0.borrow()[0].1, "Phone taken • Invalid email");
    }

    #[test]
    fn opaque_failure_shows_one_generic_toast_and_keeps_values() {
        let api = FakeApi::replying(Err(SubmitError::Network("connection reset".into())));
        let notifier = RecordingNotifier::default();
        let mut state = filled_state(RegistrationKind::Creator);
        let before = state.fields.clone();

        let focus = submit(&mut state, &api, &notifier).unwrap();

        assert_eq!(focus, None);
        assert_eq!(state.fields, before);
        assert!(state.field_errors.is_empty());
        assert!(!state.submitting);
        assert_eq!(
            *notifier.0.borrow(),
            vec![(ToastLevel::Error, FAILURE_FALLBACK.to_string())]
        );
    }

    #[test]
    fn rejected_response_message_is_surfaced() {
        let notifier = RecordingNotifier::default();
        let mut state = filled_state(RegistrationKind::Creator);

        state.begin_submit().unwrap();
        state.finish(
            Err(SubmitError::Rejected { status: 503, message: Some("Down for maintenance".into()) }),
            &notifier,
        );

        assert_eq!(
            *notifier.0.borrow(),
            vec![(ToastLevel::Error, "Down for maintenance".to_string())]
        );
    }

    #[test]
    fn new_attempt_clears_previous_field_errors() {
        let mut state = filled_state(RegistrationKind::Creator);
        state.field_errors.insert("email", "Invalid email");

        state.begin_submit().unwrap();

        assert!(state.submitting);
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut state = filled_state(RegistrationKind::Creator);

        state.begin_submit().unwrap();

        assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn dialog_title_without_first_name() {
        let state = RegisterState::new(RegistrationKind::Creator);
        assert_eq!(state.dialog_title(), "Thanks!");
        assert_eq!(state.dialog_subtitle(), "Your Creator registration was received.");
    }
}
