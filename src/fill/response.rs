use serde::Serialize;

use crate::classify::classify_model::{ClassificationResult, FieldMatch, FieldRole};
use crate::snapshot::node_model::NodeId;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Presentation label shown on the authentication-gated suggestion.
pub const DEFAULT_PROMPT: &str = "Autofill with vault";

// ============================================================================
// Fill decision — the password gate
// ============================================================================

/// What the host should do with a classified snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FillDecision {
    /// Present an authentication-gated fill suggestion.
    Offer(FillOffer),

    /// Nothing to fill. Not an error; the host stays silent.
    NoOp,
}

impl FillDecision {
    pub fn is_offer(&self) -> bool {
        matches!(self, FillDecision::Offer(_))
    }
}

/// Everything the host glue needs to present a suggestion and, after the
/// user authenticates, inject values into the right nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillOffer {
    /// (role, identity) descriptors in claim order.
    pub fields: Vec<FieldMatch>,

    pub app_id: Option<String>,
    pub web_domain: Option<String>,

    /// Identities the suggestion targets, in claim order.
    pub target_ids: Vec<NodeId>,

    /// Suggestion label.
    pub prompt: String,
}

/// Gate a classification result into a fill decision.
///
/// Assistance is only offered when a password field was found; a role map
/// without one means "nothing to do".
pub fn decide_fill(result: &ClassificationResult, prompt: &str) -> FillDecision {
    if result.roles.is_empty() || !result.roles.contains(FieldRole::Password) {
        return FillDecision::NoOp;
    }

    let fields: Vec<FieldMatch> = result.roles.iter().cloned().collect();
    let target_ids = fields.iter().map(|m| m.id.clone()).collect();

    FillDecision::Offer(FillOffer {
        fields,
        app_id: result.app_id.clone(),
        web_domain: result.web_domain.clone(),
        target_ids,
        prompt: prompt.to_string(),
    })
}

// ============================================================================
// Save requests
// ============================================================================

/// Save requests are deliberately not handled; external collaborators own
/// credential persistence. Acknowledged on the trace channel only.
pub fn acknowledge_save(tracer: Option<&TraceLogger>) {
    if let Some(t) = tracer {
        t.log(&TraceEvent::now("save_ignored"));
    }
}
