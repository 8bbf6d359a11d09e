use crate::classify::classify_model::FieldRole;

// ============================================================================
// Trigger-substring lexicon — role priority is declaration order
// ============================================================================

/// Substrings that mark a non-field wrapper. Checked before any role
/// tokens; a text containing one never yields a role.
const WRAPPER_TOKENS: [&str; 2] = ["label", "container"];

/// Ordered trigger substrings per role. The rule order IS the priority
/// order: the first role whose token set matches wins.
///
/// Locales are data, not code: new languages extend the token sets without
/// touching the chain.
#[derive(Debug, Clone)]
pub struct Lexicon {
    rules: Vec<(FieldRole, Vec<String>)>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let rule = |role, tokens: &[&str]| {
            (role, tokens.iter().map(|t| t.to_string()).collect())
        };

        Self {
            rules: vec![
                rule(FieldRole::Password, &["password", "пароль"]),
                rule(FieldRole::Username, &["username", "login", "пользовател"]),
                rule(FieldRole::EmailAddress, &["email", "e-mail", "почта"]),
                rule(FieldRole::PersonName, &["name", "имя"]),
                rule(FieldRole::PhoneNumber, &["phone", "телефон"]),
            ],
        }
    }
}

impl Lexicon {
    /// Add trigger tokens for a role. Priority order is unchanged.
    pub fn extend(&mut self, role: FieldRole, tokens: impl IntoIterator<Item = String>) {
        if let Some((_, existing)) = self.rules.iter_mut().find(|(r, _)| *r == role) {
            existing.extend(tokens);
        }
    }

    /// Infer a role from free text (a label, content, or resource name).
    ///
    /// Lower-cases the input, rejects wrapper text, then tests role token
    /// sets in priority order.
    pub fn infer_from_text(&self, raw: Option<&str>) -> Option<FieldRole> {
        let text = raw?.to_lowercase();

        if WRAPPER_TOKENS.iter().any(|t| text.contains(t)) {
            return None;
        }

        for (role, tokens) in &self.rules {
            if tokens.iter().any(|t| text.contains(t.as_str())) {
                return Some(*role);
            }
        }

        None
    }
}
