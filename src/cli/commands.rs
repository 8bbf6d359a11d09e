use crate::classify::classifier::classify_traced;
use crate::classify::classify_model::ClassificationResult;
use crate::cli::config::{AppConfig, build_lexicon};
use crate::cli::error::DetectError;
use crate::fill::response::decide_fill;
use crate::report::console::{format_console_decision, format_console_result};
use crate::report::json::{format_json_decision, format_json_result};
use crate::snapshot::node_model::SnapshotNode;
use crate::snapshot::parse::{FillRequest, latest_structure};
use crate::trace::logger::TraceLogger;

// ============================================================================
// classify subcommand
// ============================================================================

pub fn cmd_classify(
    snapshot_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    config: &AppConfig,
    trace_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = load_request(snapshot_path)?;

    if verbose > 0 {
        eprintln!(
            "Classifying latest of {} snapshot context(s) from {}...",
            request.contexts.len(),
            snapshot_path
        );
    }

    let result = match latest_structure(&request) {
        Some(root) => run_classification(root, config, trace_path),
        None => {
            eprintln!("No snapshot context in {}; nothing to classify", snapshot_path);
            ClassificationResult::default()
        }
    };

    let content = match format {
        "json" => format_json_result(&result),
        "console" => format_console_result(&result),
        other => return Err(Box::new(DetectError::UnknownFormat(other.to_string()))),
    };

    write_output(output, &content)?;
    Ok(())
}

// ============================================================================
// fill subcommand
// ============================================================================

/// Run the full fill pipeline and return whether a fill was offered.
pub fn cmd_fill(
    snapshot_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    config: &AppConfig,
    trace_path: Option<&str>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let request = load_request(snapshot_path)?;

    let result = match latest_structure(&request) {
        Some(root) => run_classification(root, config, trace_path),
        None => ClassificationResult::default(),
    };

    let decision = decide_fill(&result, &config.prompt);

    if verbose > 0 {
        eprintln!(
            "Detected {} field(s); offering fill: {}",
            result.roles.len(),
            decision.is_offer()
        );
    }

    let content = match format {
        "json" => format_json_decision(&decision),
        "console" => format_console_decision(&decision),
        other => return Err(Box::new(DetectError::UnknownFormat(other.to_string()))),
    };

    write_output(output, &content)?;
    Ok(decision.is_offer())
}

// ============================================================================
// Helpers
// ============================================================================

fn run_classification(
    root: &SnapshotNode,
    config: &AppConfig,
    trace_path: Option<&str>,
) -> ClassificationResult {
    let lexicon = build_lexicon(&config.lexicon);

    let tracer = match trace_path {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    classify_traced(root, &lexicon, Some(&tracer))
}

/// Load a fill request from a JSON file. A bare snapshot tree is accepted
/// and wrapped as a single-context request.
pub fn load_request(path: &str) -> Result<FillRequest, DetectError> {
    let content = std::fs::read_to_string(path).map_err(|e| DetectError::SnapshotRead {
        path: path.to_string(),
        source: e,
    })?;

    if let Ok(request) = serde_json::from_str::<FillRequest>(&content) {
        return Ok(request);
    }

    let node: SnapshotNode =
        serde_json::from_str(&content).map_err(|e| DetectError::SnapshotParse {
            path: path.to_string(),
            source: e,
        })?;

    Ok(FillRequest {
        contexts: vec![node],
    })
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => print!("{}", content),
    }
    Ok(())
}
