use serde::{Deserialize, Serialize};

/// Opaque identity token for a node, unique within one snapshot.
///
/// The host platform owns the real handle; here it travels as a string so
/// the classifier can hand it back for targeted fill without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Declared input classification of an editable element.
///
/// Matching against these is exact-match per variant, never substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    Text,
    Password,
    VisiblePassword,
    WebPassword,
    Email,
    WebEmail,
    Number,
    Phone,
    Date,
    Multiline,
}

impl InputKind {
    pub fn is_password(self) -> bool {
        matches!(
            self,
            InputKind::Password | InputKind::VisiblePassword | InputKind::WebPassword
        )
    }

    pub fn is_email(self) -> bool {
        matches!(self, InputKind::Email | InputKind::WebEmail)
    }
}

/// One UI element in a snapshot tree.
///
/// Every field except `children` is optional: real snapshots are sparse and
/// most nodes carry only a subset of the attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotNode {
    pub id: Option<NodeId>,

    /// Author-supplied semantic hints, in author order.
    pub hints: Vec<String>,

    pub input_kind: Option<InputKind>,

    /// Visible label or placeholder text.
    pub label: Option<String>,

    /// Current text content of the element.
    pub text: Option<String>,

    /// Widget class tag, e.g. "EditText" or "input".
    pub widget: Option<String>,

    /// Resource/name identifier assigned by the form author.
    pub resource_id: Option<String>,

    pub app_id: Option<String>,
    pub web_domain: Option<String>,

    pub children: Vec<SnapshotNode>,
}

/// Widget class markers that indicate an editable text field.
const EDITABLE_MARKERS: [&str; 3] = ["EditText", "input", "textarea"];

impl SnapshotNode {
    /// Whether the widget class names an editable text field.
    pub fn is_editable_text(&self) -> bool {
        match self.widget.as_deref() {
            Some(w) => EDITABLE_MARKERS.iter().any(|m| w.contains(m)),
            None => false,
        }
    }
}
