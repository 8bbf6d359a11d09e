use field_detection::snapshot::node_model::{InputKind, NodeId, SnapshotNode};

pub fn nid(s: &str) -> NodeId {
    NodeId(s.to_string())
}

/// Leaf node with an identity and nothing else.
pub fn node(id: &str) -> SnapshotNode {
    SnapshotNode {
        id: Some(nid(id)),
        ..SnapshotNode::default()
    }
}

pub fn labeled(id: &str, label: &str) -> SnapshotNode {
    SnapshotNode {
        label: Some(label.to_string()),
        ..node(id)
    }
}

pub fn hinted(id: &str, hints: &[&str]) -> SnapshotNode {
    SnapshotNode {
        hints: hints.iter().map(|h| h.to_string()).collect(),
        ..node(id)
    }
}

pub fn typed(id: &str, kind: InputKind) -> SnapshotNode {
    SnapshotNode {
        input_kind: Some(kind),
        ..node(id)
    }
}

pub fn resourced(id: &str, resource: &str) -> SnapshotNode {
    SnapshotNode {
        resource_id: Some(resource.to_string()),
        ..node(id)
    }
}

/// Editable text widget with current content.
pub fn editable(id: &str, text: &str) -> SnapshotNode {
    SnapshotNode {
        widget: Some("EditText".to_string()),
        text: Some(text.to_string()),
        ..node(id)
    }
}

/// Anonymous wrapper holding the given children, in order.
pub fn screen(children: Vec<SnapshotNode>) -> SnapshotNode {
    SnapshotNode {
        children,
        ..SnapshotNode::default()
    }
}

pub fn with_children(mut parent: SnapshotNode, children: Vec<SnapshotNode>) -> SnapshotNode {
    parent.children = children;
    parent
}

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    let path = base.join("tests").join("fixtures").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Scratch path for trace/output artifacts, unique per process.
pub fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("field_detection_{}_{}", std::process::id(), name))
        .display()
        .to_string()
}
