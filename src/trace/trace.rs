use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::classify::classify_model::FieldRole;
use crate::snapshot::node_model::NodeId;

/// One diagnostic event on the soft trace channel.
///
/// Classification never fails; everything noteworthy (a claimed role, a
/// discarded duplicate, a match without an identity, a missing structure)
/// is surfaced here instead.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    /// Event kind, e.g. "role_claimed" or "duplicate_discarded".
    pub event: String,

    /// Fingerprint of the snapshot tree being classified.
    pub snapshot: Option<String>,

    pub role: Option<String>,
    pub node: Option<String>,

    /// Which heuristic produced the match: "hint", "input_kind", "label",
    /// "content", "resource_id".
    pub source: Option<String>,

    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(event: impl ToString) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            event: event.to_string(),
            snapshot: None,
            role: None,
            node: None,
            source: None,
            detail: None,
        }
    }

    pub fn with_snapshot(mut self, fingerprint: impl ToString) -> Self {
        self.snapshot = Some(fingerprint.to_string());
        self
    }

    pub fn with_role(mut self, role: FieldRole) -> Self {
        self.role = Some(role.as_str().to_string());
        self
    }

    pub fn with_node(mut self, id: &NodeId) -> Self {
        self.node = Some(id.as_str().to_string());
        self
    }

    pub fn with_source(mut self, source: impl ToString) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
