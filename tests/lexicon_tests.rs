use field_detection::classify::{
    classify_model::FieldRole,
    lexicon::Lexicon,
};
use field_detection::snapshot::node_model::InputKind;

// ============================================================================
// Text inference: priority order
// ============================================================================

#[test]
fn roles_match_in_strict_priority_order() {
    let lexicon = Lexicon::default();

    // Each text matches two roles; the higher-priority one must win.
    let cases = [
        ("login password", FieldRole::Password),
        ("login email", FieldRole::Username),
        ("email name", FieldRole::EmailAddress),
        ("name phone", FieldRole::PersonName),
    ];

    for (text, expected) in cases {
        assert_eq!(
            lexicon.infer_from_text(Some(text)),
            Some(expected),
            "'{}' must resolve to {:?}",
            text,
            expected
        );
    }
}

#[test]
fn username_is_not_misread_as_name() {
    // "username" contains "name"; the username rule is checked first.
    let lexicon = Lexicon::default();

    assert_eq!(
        lexicon.infer_from_text(Some("username")),
        Some(FieldRole::Username)
    );
}

#[test]
fn each_latin_token_set_matches() {
    let lexicon = Lexicon::default();

    assert_eq!(lexicon.infer_from_text(Some("Password")), Some(FieldRole::Password));
    assert_eq!(lexicon.infer_from_text(Some("login")), Some(FieldRole::Username));
    assert_eq!(lexicon.infer_from_text(Some("E-mail")), Some(FieldRole::EmailAddress));
    assert_eq!(lexicon.infer_from_text(Some("Full name")), Some(FieldRole::PersonName));
    assert_eq!(lexicon.infer_from_text(Some("phone number")), Some(FieldRole::PhoneNumber));
}

#[test]
fn each_cyrillic_token_set_matches() {
    let lexicon = Lexicon::default();

    assert_eq!(lexicon.infer_from_text(Some("Пароль")), Some(FieldRole::Password));
    assert_eq!(
        lexicon.infer_from_text(Some("Имя пользователя")),
        Some(FieldRole::Username),
        "The user stem outranks the name token"
    );
    assert_eq!(lexicon.infer_from_text(Some("Эл. почта")), Some(FieldRole::EmailAddress));
    assert_eq!(lexicon.infer_from_text(Some("Имя")), Some(FieldRole::PersonName));
    assert_eq!(lexicon.infer_from_text(Some("Телефон")), Some(FieldRole::PhoneNumber));
}

#[test]
fn uppercase_cyrillic_is_lowercased_before_matching() {
    let lexicon = Lexicon::default();

    assert_eq!(lexicon.infer_from_text(Some("ПАРОЛЬ")), Some(FieldRole::Password));
}

// ============================================================================
// Text inference: exclusions and misses
// ============================================================================

#[test]
fn absent_text_yields_nothing() {
    assert_eq!(Lexicon::default().infer_from_text(None), None);
}

#[test]
fn wrapper_tokens_exclude_everything() {
    let lexicon = Lexicon::default();

    for text in [
        "password label",
        "Label: password",
        "login_container",
        "container",
        "email-label",
    ] {
        assert_eq!(
            lexicon.infer_from_text(Some(text)),
            None,
            "'{}' names a wrapper, not a field",
            text
        );
    }
}

#[test]
fn unrelated_text_yields_nothing() {
    let lexicon = Lexicon::default();

    for text in ["Search", "Submit", "Комментарий", ""] {
        assert_eq!(lexicon.infer_from_text(Some(text)), None);
    }
}

// ============================================================================
// Lexicon extension
// ============================================================================

#[test]
fn extended_tokens_match_without_reordering() {
    let mut lexicon = Lexicon::default();
    lexicon.extend(
        FieldRole::Password,
        ["mot de passe".to_string(), "passwort".to_string()],
    );
    lexicon.extend(FieldRole::Username, ["benutzername".to_string()]);

    assert_eq!(
        lexicon.infer_from_text(Some("Mot de passe")),
        Some(FieldRole::Password)
    );
    assert_eq!(
        lexicon.infer_from_text(Some("Benutzername")),
        Some(FieldRole::Username)
    );

    // Both roles present: priority order still holds after extension.
    assert_eq!(
        lexicon.infer_from_text(Some("benutzername passwort")),
        Some(FieldRole::Password)
    );

    // Built-in tokens are unaffected.
    assert_eq!(lexicon.infer_from_text(Some("login")), Some(FieldRole::Username));
}

// ============================================================================
// Hint names and input kinds
// ============================================================================

#[test]
fn hint_names_map_case_insensitively() {
    assert_eq!(FieldRole::from_hint("password"), Some(FieldRole::Password));
    assert_eq!(FieldRole::from_hint("USERNAME"), Some(FieldRole::Username));
    assert_eq!(FieldRole::from_hint("emailAddress"), Some(FieldRole::EmailAddress));
    assert_eq!(FieldRole::from_hint("email"), Some(FieldRole::EmailAddress));
    assert_eq!(FieldRole::from_hint("Name"), Some(FieldRole::PersonName));
    assert_eq!(FieldRole::from_hint("phone"), Some(FieldRole::PhoneNumber));
}

#[test]
fn unknown_hint_names_map_to_nothing() {
    assert_eq!(FieldRole::from_hint("creditCardNumber"), None);
    assert_eq!(FieldRole::from_hint(""), None);

    // Trigger substrings are not hint names: hints are literal role names.
    assert_eq!(FieldRole::from_hint("login"), None);
}

#[test]
fn input_kind_matching_is_exact_not_substring() {
    assert!(InputKind::Password.is_password());
    assert!(InputKind::VisiblePassword.is_password());
    assert!(InputKind::WebPassword.is_password());
    assert!(!InputKind::Text.is_password());
    assert!(!InputKind::Number.is_password());

    assert!(InputKind::Email.is_email());
    assert!(InputKind::WebEmail.is_email());
    assert!(!InputKind::Text.is_email());
    assert!(!InputKind::Password.is_email());
}

#[test]
fn role_names_round_trip_through_hints() {
    for role in [
        FieldRole::Password,
        FieldRole::Username,
        FieldRole::EmailAddress,
        FieldRole::PersonName,
        FieldRole::PhoneNumber,
    ] {
        assert_eq!(
            FieldRole::from_hint(role.as_str()),
            Some(role),
            "literal role name '{}' must parse back",
            role.as_str()
        );
    }
}
