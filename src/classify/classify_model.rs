use serde::Serialize;

use crate::snapshot::node_model::NodeId;

/// Semantic role of a fillable field. Closed set.
///
/// Serialized names are the literal role names, matching [`FieldRole::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FieldRole {
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "username")]
    Username,
    #[serde(rename = "emailAddress")]
    EmailAddress,
    #[serde(rename = "name")]
    PersonName,
    #[serde(rename = "phone")]
    PhoneNumber,
}

impl FieldRole {
    /// Literal role name as it appears in hints and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldRole::Password => "password",
            FieldRole::Username => "username",
            FieldRole::EmailAddress => "emailAddress",
            FieldRole::PersonName => "name",
            FieldRole::PhoneNumber => "phone",
        }
    }

    /// Map an author-supplied hint to a role by literal name,
    /// case-insensitive. Unknown hint names map to nothing.
    pub fn from_hint(raw: &str) -> Option<FieldRole> {
        match raw.to_lowercase().as_str() {
            "password" => Some(FieldRole::Password),
            "username" => Some(FieldRole::Username),
            "emailaddress" | "email" => Some(FieldRole::EmailAddress),
            "name" => Some(FieldRole::PersonName),
            "phone" => Some(FieldRole::PhoneNumber),
            _ => None,
        }
    }
}

/// One claimed field: a role bound to the node identity that will receive
/// the fill value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMatch {
    pub role: FieldRole,
    pub id: NodeId,
}

/// Role → node identity mapping, first-writer-wins.
///
/// Claims are kept in traversal order so rendering and offer packaging are
/// deterministic. The role set is small, so lookups scan the claim list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleMap {
    claims: Vec<FieldMatch>,
}

impl RoleMap {
    /// Claim a role for a node. Returns false if the role was already
    /// claimed by an earlier node; the earlier claim is preserved.
    pub fn claim(&mut self, role: FieldRole, id: NodeId) -> bool {
        if self.contains(role) {
            return false;
        }
        self.claims.push(FieldMatch { role, id });
        true
    }

    pub fn contains(&self, role: FieldRole) -> bool {
        self.claims.iter().any(|m| m.role == role)
    }

    pub fn get(&self, role: FieldRole) -> Option<&NodeId> {
        self.claims.iter().find(|m| m.role == role).map(|m| &m.id)
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Claims in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldMatch> {
        self.claims.iter()
    }
}

/// Output of one classification pass over a snapshot tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub roles: RoleMap,

    /// Owning application identifier, from the first node that supplied one.
    pub app_id: Option<String>,

    /// Associated web domain, from the first node that supplied one.
    pub web_domain: Option<String>,
}
