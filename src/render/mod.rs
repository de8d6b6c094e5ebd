use crate::classifier::{ClassificationResponse, Priority};
use crossterm::style::{Color, Stylize};

/// Label shown on the trigger while a submission is outstanding.
pub const SENDING_LABEL: &str = "Enviando...";

const URGENTE_COLOR: Color = Color::Rgb { r: 220, g: 53, b: 69 };
const MODERADO_COLOR: Color = Color::Rgb { r: 255, g: 193, b: 7 };
const NORMAL_COLOR: Color = Color::Rgb { r: 40, g: 167, b: 69 };
const NEUTRAL_COLOR: Color = Color::Rgb { r: 108, g: 117, b: 125 };

/// Fixed color per known classification label, neutral for anything
/// unrecognized.
pub fn priority_color(classification: &str) -> Color {
    match Priority::from_label(classification) {
        Some(Priority::Urgente) => URGENTE_COLOR,
        Some(Priority::Moderado) => MODERADO_COLOR,
        Some(Priority::Normal) => NORMAL_COLOR,
        None => NEUTRAL_COLOR,
    }
}

/// The result panel: echoed prompt, uppercased label in its mapped
/// color, the success indicator, and any extra fields the service
/// attached.
pub fn result_panel(response: &ClassificationResponse) -> String {
    let color = priority_color(&response.classification);
    let status = if response.success {
        "✅ Exitoso"
    } else {
        "❌ Error"
    };

    let mut lines = Vec::new();
    lines.push(format!("{}", "Resultado de la Clasificación".bold()));
    lines.push(format!("  Situación: {}", response.prompt));
    lines.push(format!(
        "  Clasificación: {}",
        response.classification.to_uppercase().with(color).bold()
    ));
    lines.push(format!("  Estado: {}", status));
    for (key, value) in &response.extra {
        lines.push(format!("  {}: {}", key, value));
    }

    lines.join("\n")
}

pub fn error_panel(message: &str) -> String {
    format!("{}", message.with(URGENTE_COLOR))
}

pub fn sending_line() -> String {
    format!("{}", SENDING_LABEL.dim())
}
