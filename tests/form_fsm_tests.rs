use clasificador_rust::{
    Error,
    form::{FormEvent, FormState, FormStateMachine},
};
use pretty_assertions::assert_eq;

#[test]
fn test_form_initial_state() {
    let form = FormStateMachine::new();

    assert_eq!(*form.current_state(), FormState::Editing);
    assert!(!form.is_sending());
    assert_eq!(form.context.prompt, "");
    assert!(form.context.response.is_none());
    assert!(form.context.error.is_none());
}

#[test]
fn test_submit_then_response_received() {
    let mut form = FormStateMachine::new();

    form.transition(FormEvent::Submit).unwrap();
    assert_eq!(*form.current_state(), FormState::Sending);
    assert!(form.is_sending());

    form.transition(FormEvent::ResponseReceived).unwrap();
    assert_eq!(*form.current_state(), FormState::Editing);
    assert!(!form.is_sending());
}

#[test]
fn test_submit_then_request_failed() {
    let mut form = FormStateMachine::new();

    form.transition(FormEvent::Submit).unwrap();
    assert!(form.is_sending());

    // Failure settles the submission exactly like success does
    form.transition(FormEvent::RequestFailed).unwrap();
    assert_eq!(*form.current_state(), FormState::Editing);
    assert!(!form.is_sending());
}

#[test]
fn test_submit_while_sending_is_refused() {
    let mut form = FormStateMachine::new();

    form.transition(FormEvent::Submit).unwrap();

    // The trigger control is disabled while a request is outstanding
    let result = form.transition(FormEvent::Submit);
    assert!(matches!(result, Err(Error::InvalidTransition { .. })));

    // The refused event leaves the machine sending
    assert_eq!(*form.current_state(), FormState::Sending);
}

#[test]
fn test_settlement_events_require_a_pending_submission() {
    let mut form = FormStateMachine::new();

    assert!(matches!(
        form.transition(FormEvent::ResponseReceived),
        Err(Error::InvalidTransition { .. })
    ));
    assert!(matches!(
        form.transition(FormEvent::RequestFailed),
        Err(Error::InvalidTransition { .. })
    ));
    assert_eq!(*form.current_state(), FormState::Editing);
}

#[test]
fn test_form_accepts_resubmission_after_settlement() {
    let mut form = FormStateMachine::new();

    form.transition(FormEvent::Submit).unwrap();
    form.transition(FormEvent::RequestFailed).unwrap();

    // Once settled, the control is enabled again
    form.transition(FormEvent::Submit).unwrap();
    assert!(form.is_sending());
}

#[test]
fn test_clear_outcome_resets_response_and_error() {
    let mut form = FormStateMachine::new();
    form.context.error = Some("Error al clasificar la prioridad".to_string());

    form.context.clear_outcome();

    assert!(form.context.response.is_none());
    assert!(form.context.error.is_none());
}
