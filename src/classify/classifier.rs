use crate::classify::classify_model::{ClassificationResult, FieldRole};
use crate::classify::lexicon::Lexicon;
use crate::snapshot::node_model::SnapshotNode;
use crate::snapshot::parse::tree_fingerprint;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Which heuristic in the inference chain produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    ExplicitHint,
    InputKind,
    Label,
    Content,
    ResourceId,
}

impl MatchSource {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchSource::ExplicitHint => "hint",
            MatchSource::InputKind => "input_kind",
            MatchSource::Label => "label",
            MatchSource::Content => "content",
            MatchSource::ResourceId => "resource_id",
        }
    }
}

/// Classify a snapshot tree into a role map plus captured context.
pub fn classify(root: &SnapshotNode, lexicon: &Lexicon) -> ClassificationResult {
    classify_traced(root, lexicon, None)
}

/// Classify with diagnostic events emitted to a trace logger.
///
/// Pre-order traversal: parent before children, children left-to-right.
/// Uses an explicit stack so arbitrarily deep trees cannot overflow the
/// call stack. The tree is never mutated.
pub fn classify_traced(
    root: &SnapshotNode,
    lexicon: &Lexicon,
    tracer: Option<&TraceLogger>,
) -> ClassificationResult {
    let fingerprint = tracer.map(|_| tree_fingerprint(root));
    let mut result = ClassificationResult::default();

    let mut stack: Vec<&SnapshotNode> = vec![root];

    while let Some(node) = stack.pop() {
        visit(node, lexicon, &mut result, tracer, fingerprint.as_deref());

        // Reversed push keeps children in given order on a pop stack.
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }

    result
}

fn visit(
    node: &SnapshotNode,
    lexicon: &Lexicon,
    result: &mut ClassificationResult,
    tracer: Option<&TraceLogger>,
    fingerprint: Option<&str>,
) {
    // First occurrence wins for both context attributes.
    if result.app_id.is_none() && node.app_id.is_some() {
        result.app_id = node.app_id.clone();
    }
    if result.web_domain.is_none() && node.web_domain.is_some() {
        result.web_domain = node.web_domain.clone();
    }

    let Some((role, source)) = infer_role_source(node, lexicon) else {
        return;
    };

    match &node.id {
        Some(id) => {
            if result.roles.claim(role, id.clone()) {
                emit(
                    tracer,
                    fingerprint,
                    TraceEvent::now("role_claimed")
                        .with_role(role)
                        .with_node(id)
                        .with_source(source.as_str()),
                );
            } else {
                emit(
                    tracer,
                    fingerprint,
                    TraceEvent::now("duplicate_discarded")
                        .with_role(role)
                        .with_node(id)
                        .with_source(source.as_str()),
                );
            }
        }
        // A role without an identity is not actionable.
        None => emit(
            tracer,
            fingerprint,
            TraceEvent::now("identity_missing")
                .with_role(role)
                .with_source(source.as_str()),
        ),
    }
}

/// Infer the semantic role of a single node. First match in the chain wins.
pub fn infer_role(node: &SnapshotNode, lexicon: &Lexicon) -> Option<FieldRole> {
    infer_role_source(node, lexicon).map(|(role, _)| role)
}

/// Like [`infer_role`], also reporting which heuristic matched.
pub fn infer_role_source(
    node: &SnapshotNode,
    lexicon: &Lexicon,
) -> Option<(FieldRole, MatchSource)> {
    // (a) Explicit author hint, by literal role name.
    if let Some(first) = node.hints.first() {
        if let Some(role) = FieldRole::from_hint(first) {
            return Some((role, MatchSource::ExplicitHint));
        }
    }

    // (b) Declared input kind. Exact variant match, not substring.
    if let Some(kind) = node.input_kind {
        if kind.is_password() {
            return Some((FieldRole::Password, MatchSource::InputKind));
        }
        if kind.is_email() {
            return Some((FieldRole::EmailAddress, MatchSource::InputKind));
        }
    }

    // (c) Visible label or placeholder.
    if let Some(role) = lexicon.infer_from_text(node.label.as_deref()) {
        return Some((role, MatchSource::Label));
    }

    // (d) Current content, only for editable text widgets with text.
    if node.is_editable_text() {
        if let Some(text) = node.text.as_deref() {
            if !text.is_empty() {
                if let Some(role) = lexicon.infer_from_text(Some(text)) {
                    return Some((role, MatchSource::Content));
                }
            }
        }
    }

    // (e) Resource name assigned by the form author.
    if let Some(role) = lexicon.infer_from_text(node.resource_id.as_deref()) {
        return Some((role, MatchSource::ResourceId));
    }

    None
}

fn emit(tracer: Option<&TraceLogger>, fingerprint: Option<&str>, event: TraceEvent) {
    if let Some(t) = tracer {
        let event = match fingerprint {
            Some(fp) => event.with_snapshot(fp),
            None => event,
        };
        t.log(&event);
    }
}
