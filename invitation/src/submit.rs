use dto::guest::{CreateRsvpDto, GuestPayload};
use dto::submit::SubmitReply;

use crate::errors::{errors_from_rejection, SUBMIT_RETRY_LATER};
use crate::form::{ConfirmationFormState, FormErrors, HasPlusOne};

/// Lifecycle of one confirmation attempt. `Submitted` is terminal for the
/// current dialog session; closing the dialog resets everything to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmitPhase {
    /// Single entry point into `Submitting`. Returns whether the caller owns
    /// the submission; while a request is in flight (or after success) every
    /// further attempt is a no-op, so the API is never invoked twice.
    pub fn try_begin(&mut self, form_valid: bool) -> bool {
        if form_valid && *self == SubmitPhase::Idle {
            *self = SubmitPhase::Submitting;
            true
        } else {
            false
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitPhase::Submitting
    }

    pub fn is_submitted(self) -> bool {
        self == SubmitPhase::Submitted
    }
}

/// Request body for the create-guest call. The companion payload is dropped
/// entirely unless the guest answered "yes".
pub fn build_payload(state: &ConfirmationFormState, user_id: i64) -> CreateRsvpDto {
    CreateRsvpDto {
        guest: GuestPayload {
            guest: state.guest.clone(),
            user_id,
        },
        plus_one: match state.has_plus_one {
            HasPlusOne::Yes => Some(state.plus_one.clone()),
            HasPlusOne::No => None,
        },
    }
}

/// Fold the proxy reply into the next phase plus the errors to display.
/// Failures never escape: a dead proxy is shown the same way as an
/// unclassified API failure.
pub fn conclude<E>(outcome: Result<SubmitReply, E>) -> (SubmitPhase, FormErrors) {
    match outcome {
        Ok(SubmitReply::Created) => (SubmitPhase::Submitted, FormErrors::default()),
        Ok(SubmitReply::Rejected(rejection)) => {
            (SubmitPhase::Idle, errors_from_rejection(&rejection))
        }
        Err(_) => (
            SubmitPhase::Idle,
            FormErrors::submit_only(SUBMIT_RETRY_LATER),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{SUBMIT_CHECK_FIELDS, SUBMIT_MISSING_RESOURCE};
    use dto::guest::{GuestDto, PlusOneDto};
    use dto::submit::{ApiRejection, FieldMessages};
    use std::collections::HashMap;
    use uuid::Uuid;

    fn state_with_plus_one(has_plus_one: HasPlusOne) -> ConfirmationFormState {
        ConfirmationFormState {
            guest: GuestDto {
                first_name: "Ana".into(),
                last_name: "García".into(),
                phone: "600123123".into(),
                email: "ana@example.com".into(),
                menu_id: Some(Uuid::new_v4()),
                ..GuestDto::default()
            },
            plus_one: PlusOneDto {
                first_name: "Luis".into(),
                last_name: "Pérez".into(),
                menu_id: Some(Uuid::new_v4()),
                allergies: vec!["gluten".into()],
            },
            has_plus_one,
        }
    }

    #[test]
    fn begin_is_idempotent_while_submitting() {
        let mut phase = SubmitPhase::Idle;

        assert!(phase.try_begin(true));
        assert!(phase.is_submitting());

        // A second click while the request is in flight must not dispatch.
        assert!(!phase.try_begin(true));
        assert!(phase.is_submitting());
    }

    #[test]
    fn begin_refuses_invalid_forms_and_terminal_states() {
        let mut phase = SubmitPhase::Idle;
        assert!(!phase.try_begin(false));
        assert_eq!(phase, SubmitPhase::Idle);

        let mut done = SubmitPhase::Submitted;
        assert!(!done.try_begin(true));
        assert_eq!(done, SubmitPhase::Submitted);
    }

    #[test]
    fn payload_omits_companion_when_answer_is_no() {
        let payload = build_payload(&state_with_plus_one(HasPlusOne::No), 7);
        assert!(payload.plus_one.is_none());
        assert_eq!(payload.guest.user_id, 7);
        assert_eq!(payload.guest.guest.first_name, "Ana");
    }

    #[test]
    fn payload_carries_companion_when_answer_is_yes() {
        let payload = build_payload(&state_with_plus_one(HasPlusOne::Yes), 7);
        let plus_one = payload.plus_one.expect("companion record");
        assert_eq!(plus_one.first_name, "Luis");
        assert_eq!(plus_one.allergies, vec!["gluten".to_string()]);
    }

    #[test]
    fn success_is_terminal_and_clears_errors() {
        let (phase, errors) = conclude::<()>(Ok(SubmitReply::Created));
        assert!(phase.is_submitted());
        assert!(errors.is_empty());
    }

    #[test]
    fn transport_failure_returns_to_idle_with_retry_banner() {
        let (phase, errors) = conclude(Err("connection refused"));
        assert_eq!(phase, SubmitPhase::Idle);
        assert!(errors.fields.is_empty());
        assert_eq!(errors.submit.as_deref(), Some(SUBMIT_RETRY_LATER));
    }

    #[test]
    fn general_validation_failure_yields_one_banner_and_no_field_errors() {
        let mut error = HashMap::new();
        error.insert(
            "general".to_string(),
            FieldMessages::One("Invalid content detected in guest.first_name".to_string()),
        );
        let (phase, errors) =
            conclude::<()>(Ok(SubmitReply::Rejected(ApiRejection::Validation { error })));

        assert_eq!(phase, SubmitPhase::Idle);
        assert!(errors.fields.is_empty());
        assert!(errors.submit.expect("banner").contains("nombre"));
    }

    #[test]
    fn field_validation_failure_marks_the_field_and_sets_the_banner() {
        let mut error = HashMap::new();
        error.insert(
            "phone".to_string(),
            FieldMessages::Many(vec!["validatePhone failed".to_string()]),
        );
        let (phase, errors) =
            conclude::<()>(Ok(SubmitReply::Rejected(ApiRejection::Validation { error })));

        assert_eq!(phase, SubmitPhase::Idle);
        assert_eq!(errors.fields.len(), 1);
        assert_eq!(
            errors.field("guest.phone").as_deref(),
            Some("El formato del teléfono no es válido")
        );
        assert_eq!(errors.submit.as_deref(), Some(SUBMIT_CHECK_FIELDS));
    }

    #[test]
    fn missing_resource_asks_for_a_refresh() {
        let (phase, errors) =
            conclude::<()>(Ok(SubmitReply::Rejected(ApiRejection::MissingResource)));
        assert_eq!(phase, SubmitPhase::Idle);
        assert_eq!(errors.submit.as_deref(), Some(SUBMIT_MISSING_RESOURCE));
    }
}
