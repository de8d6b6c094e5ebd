mod client;
mod types;

pub use client::{ClassifierClient, HttpClassifierClient};
pub use types::*;
