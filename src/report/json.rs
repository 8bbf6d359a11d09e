use crate::classify::classify_model::ClassificationResult;
use crate::fill::response::FillDecision;

/// Render a classification result as pretty JSON.
pub fn format_json_result(result: &ClassificationResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| {
        eprintln!("Warning: failed to serialize result: {}", e);
        String::from("{}")
    })
}

/// Render a fill decision as pretty JSON.
pub fn format_json_decision(decision: &FillDecision) -> String {
    serde_json::to_string_pretty(decision).unwrap_or_else(|e| {
        eprintln!("Warning: failed to serialize decision: {}", e);
        String::from("{}")
    })
}
