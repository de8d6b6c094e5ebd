use super::fsm::{FormEvent, FormStateMachine};
use crate::{
    Error, Result,
    classifier::{ClassificationRequest, ClassificationResponse, ClassifierClient},
};
use tracing::{error, info};

/// Shown when a failed submission carries no server detail message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error al clasificar la prioridad";

/// The classifier form: holds the input text and the outcome of the
/// last submission, and drives one submission at a time through the
/// remote client.
pub struct ClassifierForm {
    client: Box<dyn ClassifierClient>,
    machine: FormStateMachine,
}

impl ClassifierForm {
    pub fn new(client: Box<dyn ClassifierClient>) -> Self {
        Self {
            client,
            machine: FormStateMachine::new(),
        }
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.machine.context.prompt = text.into();
    }

    pub fn prompt(&self) -> &str {
        &self.machine.context.prompt
    }

    pub fn is_sending(&self) -> bool {
        self.machine.is_sending()
    }

    pub fn response(&self) -> Option<&ClassificationResponse> {
        self.machine.context.response.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.machine.context.error.as_deref()
    }

    /// Submits the current input text. Refused while a submission is
    /// already in flight. The outcome lands in `response`/
    /// `error_message`; a settled failure is not an `Err` here.
    pub async fn submit(&mut self) -> Result<()> {
        // Guard first: the trigger is disabled while sending
        self.machine.transition(FormEvent::Submit)?;
        self.machine.context.clear_outcome();

        let request = ClassificationRequest {
            prompt: self.machine.context.prompt.clone(),
        };
        info!("🚀 Submitting prompt to classifier");

        match self.client.classify(request).await {
            Ok(response) => {
                info!("✅ Classification received: {}", response.classification);
                self.machine.context.response = Some(response);
                self.machine.transition(FormEvent::ResponseReceived)?;
            }
            Err(e) => {
                error!("❌ Classification request failed: {}", e);
                self.machine.context.error = Some(display_message(&e));
                self.machine.transition(FormEvent::RequestFailed)?;
            }
        }

        Ok(())
    }
}

/// Server-supplied detail when present, generic fallback otherwise.
fn display_message(error: &Error) -> String {
    match error {
        Error::Classifier(detail) => detail.clone(),
        _ => DEFAULT_ERROR_MESSAGE.to_string(),
    }
}
