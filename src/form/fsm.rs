use crate::{Error, Result, classifier::ClassificationResponse};
use tracing::{debug, info, warn};

// Form states
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing,
    Sending,
}

// Form events
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submit,
    ResponseReceived,
    RequestFailed,
}

// Form context (transient state, discarded with the form)
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    pub prompt: String,
    pub response: Option<ClassificationResponse>,
    pub error: Option<String>,
}

impl FormContext {
    pub fn clear_outcome(&mut self) {
        self.response = None;
        self.error = None;
    }
}

// Submission lifecycle machine. At most one of {response, error} is
// populated once a submission settles; Sending holds only strictly
// between submission start and settlement.
pub struct FormStateMachine {
    state: FormState,
    pub context: FormContext,
}

impl FormStateMachine {
    pub fn new() -> Self {
        Self {
            state: FormState::Editing,
            context: FormContext::default(),
        }
    }

    pub fn current_state(&self) -> &FormState {
        &self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == FormState::Sending
    }

    pub fn transition(&mut self, event: FormEvent) -> Result<()> {
        let old_state = self.state.clone();
        debug!(
            "🔄 Form processing event {:?} in state {:?}",
            event, old_state
        );

        let new_state = match (&self.state, &event) {
            (FormState::Editing, FormEvent::Submit) => FormState::Sending,
            (FormState::Sending, FormEvent::ResponseReceived) => FormState::Editing,
            (FormState::Sending, FormEvent::RequestFailed) => FormState::Editing,
            _ => {
                warn!(
                    "❌ Invalid form transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        if old_state != new_state {
            info!(
                "🎯 Form state transition: {:?} -> {:?} (event: {:?})",
                old_state, new_state, event
            );
        }

        self.state = new_state;
        Ok(())
    }
}

impl Default for FormStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
