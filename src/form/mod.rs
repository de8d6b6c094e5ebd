mod component;
mod fsm;

pub use component::{ClassifierForm, DEFAULT_ERROR_MESSAGE};
pub use fsm::{FormContext, FormEvent, FormState, FormStateMachine};
