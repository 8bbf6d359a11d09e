use serde::Deserialize;

use crate::snapshot::node_model::SnapshotNode;

// ============================================================================
// Fill request — one or more snapshot contexts, most recent last
// ============================================================================

/// A fill request as handed over by the host: an ordered list of snapshot
/// trees. Only the most recent context is ever read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FillRequest {
    pub contexts: Vec<SnapshotNode>,
}

/// Single read of the most recent snapshot in the request.
pub fn latest_structure(request: &FillRequest) -> Option<&SnapshotNode> {
    request.contexts.last()
}

// ============================================================================
// JSON parsing — malformed input is "no structure", never an error
// ============================================================================

/// Parse a snapshot tree from JSON. Returns None on malformed input,
/// with a warning on stderr.
pub fn parse_snapshot(raw: &str) -> Option<SnapshotNode> {
    match serde_json::from_str(raw) {
        Ok(node) => Some(node),
        Err(e) => {
            eprintln!("Warning: malformed snapshot, skipping: {}", e);
            None
        }
    }
}

/// Parse a fill request from JSON. Accepts either a full request object
/// (`{"contexts": [...]}`) or a bare snapshot tree, which is wrapped as a
/// single-context request.
pub fn parse_request(raw: &str) -> Option<FillRequest> {
    if let Ok(request) = serde_json::from_str::<FillRequest>(raw) {
        return Some(request);
    }
    parse_snapshot(raw).map(|node| FillRequest {
        contexts: vec![node],
    })
}

// ============================================================================
// Fingerprinting
// ============================================================================

/// Stable fingerprint of a snapshot tree, for correlating trace events
/// across repeated classifications of the same structure.
pub fn tree_fingerprint(root: &SnapshotNode) -> String {
    use sha1::{Digest, Sha1};

    let serialized = serde_json::to_string(root).unwrap_or_default();
    let mut hasher = Sha1::new();
    hasher.update(serialized.as_bytes());
    format!("{:x}", hasher.finalize())
}
