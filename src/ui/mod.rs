use crate::{
    Result,
    classifier::{ClassifierClient, HttpClassifierClient},
    config::Config,
    form::ClassifierForm,
    render,
};
use crossterm::style::Stylize;
use inquire::{InquireError, Text, validator::ValueRequiredValidator};
use tracing::{info, warn};

/// Runs the interactive form until the user cancels the prompt.
pub async fn run(config: Config) -> Result<()> {
    let client = HttpClassifierClient::new(config.classifier.clone());

    // Informational probe; submissions go through the error path anyway
    match client.health().await {
        Ok(health) => info!(
            "Classification service '{}' reported status: {}",
            health.service, health.status
        ),
        Err(e) => warn!("Classification service health probe failed: {}", e),
    }

    let mut form = ClassifierForm::new(Box::new(client));

    println!("{}", "Clasificador de Prioridades".bold());

    loop {
        let input = match Text::new("Describe la situación:")
            .with_help_message("Ejemplo: El servidor principal está caído y no responde")
            .with_validator(ValueRequiredValidator::new("El prompt no puede estar vacío"))
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        form.set_prompt(input);

        println!("{}", render::sending_line());
        form.submit().await?;

        if let Some(message) = form.error_message() {
            println!("{}", render::error_panel(message));
        }
        if let Some(response) = form.response() {
            println!("{}", render::result_panel(response));
        }
        println!();
    }

    info!("Exiting classifier console");

    Ok(())
}
