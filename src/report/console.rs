use crate::classify::classify_model::ClassificationResult;
use crate::fill::response::FillDecision;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a classification result for terminal output.
///
/// Produces output like:
/// ```text
/// === Classification ===
///
/// app:    com.example.bank
/// domain: login.example.com
///
/// password      -> field_2
/// username      -> field_1
///
/// === 2 fields ===
/// ```
pub fn format_console_result(result: &ClassificationResult) -> String {
    let mut out = String::new();

    out.push_str("=== Classification ===\n\n");

    if let Some(app) = &result.app_id {
        out.push_str(&format!("app:    {}\n", app));
    }
    if let Some(domain) = &result.web_domain {
        out.push_str(&format!("domain: {}\n", domain));
    }
    if result.app_id.is_some() || result.web_domain.is_some() {
        out.push('\n');
    }

    for m in result.roles.iter() {
        out.push_str(&format!("{:<13} -> {}\n", m.role.as_str(), m.id.as_str()));
    }

    out.push_str(&format!("\n=== {} fields ===\n", result.roles.len()));

    out
}

/// Format a fill decision for terminal output.
pub fn format_console_decision(decision: &FillDecision) -> String {
    let mut out = String::new();

    match decision {
        FillDecision::NoOp => {
            out.push_str("=== Fill decision: NO-OP ===\n");
            out.push_str("No password field found; nothing to fill.\n");
        }
        FillDecision::Offer(offer) => {
            out.push_str("=== Fill decision: OFFER ===\n\n");

            for m in &offer.fields {
                out.push_str(&format!("{:<13} -> {}\n", m.role.as_str(), m.id.as_str()));
            }

            if let Some(app) = &offer.app_id {
                out.push_str(&format!("\napp:    {}", app));
            }
            if let Some(domain) = &offer.web_domain {
                out.push_str(&format!("\ndomain: {}", domain));
            }

            out.push_str(&format!("\n\nprompt: {}\n", offer.prompt));
        }
    }

    out
}
