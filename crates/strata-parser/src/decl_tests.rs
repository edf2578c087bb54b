//! End-to-end tests for declaration parsing.
//!
//! These tests feed YAML documents through [`parse_declaration`] and verify
//! the full set of edges each shorthand form expands to.

use crate::{ParseError, parse_declaration, parse_stem};

/// Helper to parse a declaration for the given owner stem and return the
/// edge targets in canonical stem form.
fn expand(owner_stem: &str, source: &str) -> Vec<String> {
    let owner = parse_stem(owner_stem).expect("owner stem should parse");
    match parse_declaration(owner, source) {
        Ok(edges) => edges.iter().map(|e| e.dependency().to_string()).collect(),
        Err(e) => panic!("Expected declaration to parse, but got error: {e}"),
    }
}

/// Helper to assert a declaration document is rejected.
fn assert_rejected(owner_stem: &str, source: &str) {
    let owner = parse_stem(owner_stem).expect("owner stem should parse");
    let result = parse_declaration(owner, source);
    assert!(
        result.is_err(),
        "Expected declaration to be rejected: {source:?}"
    );
    assert!(matches!(result.unwrap_err(), ParseError::Declaration { .. }));
}

#[test]
fn test_empty_document_expands_to_nothing() {
    assert!(expand("block", "").is_empty());
    assert!(expand("block", "---\n").is_empty());
    assert!(expand("block", "# only a comment\n").is_empty());
}

#[test]
fn test_flat_block_list() {
    let targets = expand("block", "- variables\n- mixins\n");
    assert_eq!(targets, ["variables", "mixins"]);
}

#[test]
fn test_inline_sequence() {
    let targets = expand("block", "[variables, mixins]");
    assert_eq!(targets, ["variables", "mixins"]);
}

#[test]
fn test_block_and_elem_node() {
    let targets = expand("card", "- block: b-popup\n  elem: tail\n");
    assert_eq!(targets, ["b-popup__tail"]);
}

#[test]
fn test_node_mods_table() {
    let targets = expand(
        "card",
        "- block: b-button\n  mods:\n    theme: dark\n    active: true\n",
    );
    assert_eq!(targets, ["b-button", "b-button_theme_dark", "b-button_active"]);
}

#[test]
fn test_node_mods_value_list() {
    let targets = expand("card", "- block: b-button\n  mods:\n    size: [s, m, l]\n");
    assert_eq!(
        targets,
        ["b-button", "b-button_size_s", "b-button_size_m", "b-button_size_l"]
    );
}

#[test]
fn test_node_flag_list() {
    let targets = expand("card", "- block: b-menu\n  mods: [horizontal, compact]\n");
    assert_eq!(targets, ["b-menu", "b-menu_horizontal", "b-menu_compact"]);
}

#[test]
fn test_false_mod_value_is_skipped() {
    let targets = expand("card", "- block: b-menu\n  mods:\n    legacy: false\n");
    assert_eq!(targets, ["b-menu"]);
}

#[test]
fn test_elems_expansion() {
    let targets = expand(
        "card",
        "- block: b-popup\n  elems:\n    - tail\n    - elem: shadow\n      mods: [soft]\n",
    );
    assert_eq!(
        targets,
        ["b-popup", "b-popup__tail", "b-popup__shadow", "b-popup__shadow_soft"]
    );
}

#[test]
fn test_elem_mods_on_primary() {
    let targets = expand(
        "card",
        "- block: b-menu\n  elem: item\n  mods:\n    size: xl\n",
    );
    assert_eq!(targets, ["b-menu__item", "b-menu__item_size_xl"]);
}

#[test]
fn test_scoped_document_uses_owner_block() {
    let targets = expand("popup", "elems: [tail]\nmods: [visible]\n");
    assert_eq!(targets, ["popup", "popup__tail", "popup_visible"]);
}

#[test]
fn test_scoped_document_for_elem_owner() {
    // The owner is popup__tail; a bare mods section still scopes to the
    // owner's block, not the element.
    let targets = expand("popup__tail", "mods: [visible]\n");
    assert_eq!(targets, ["popup", "popup_visible"]);
}

#[test]
fn test_mixed_entry_forms() {
    let targets = expand(
        "page",
        concat!(
            "- variables\n",
            "- block: b-header\n",
            "- block: b-button\n",
            "  mods:\n",
            "    theme: dark\n",
            "- footer\n",
        ),
    );
    assert_eq!(
        targets,
        ["variables", "b-header", "b-button", "b-button_theme_dark", "footer"]
    );
}

#[test]
fn test_tech_field_is_accepted_and_ignored() {
    let targets = expand("card", "- block: b-link\n  tech: css\n");
    assert_eq!(targets, ["b-link"]);
}

#[test]
fn test_unknown_field_is_rejected() {
    assert_rejected("card", "- block: b-link\n  elm: typo\n");
}

#[test]
fn test_scalar_document_is_rejected() {
    assert_rejected("card", "b-link");
}

#[test]
fn test_numeric_entry_is_rejected() {
    assert_rejected("card", "- 42\n");
}

#[test]
fn test_numeric_mod_value_is_rejected() {
    assert_rejected("card", "- block: b-grid\n  mods:\n    cols: 12\n");
}

#[test]
fn test_broken_yaml_is_rejected() {
    assert_rejected("card", "- block: [unclosed\n");
}

#[test]
fn test_flat_stem_entry_unifies_with_parsed_identifier() {
    let owner = parse_stem("block").expect("owner stem should parse");
    let edges = parse_declaration(owner, "- menu__item\n").unwrap();

    // The declared target must be the same identifier the payload file
    // `menu__item.css` parses to, not a block merely displaying that text.
    assert_eq!(edges.len(), 1);
    assert_eq!(
        edges[0].dependency(),
        parse_stem("menu__item").expect("payload stem should parse")
    );
}

#[test]
fn test_malformed_flat_entry_is_rejected_with_naming_error() {
    let owner = parse_stem("block").expect("owner stem should parse");
    let err = parse_declaration(owner, "- bad____name\n").unwrap_err();

    assert_eq!(err.to_string(), "Invalid bem naming used: bad____name");
}

#[test]
fn test_stem_in_block_position_is_rejected() {
    let owner = parse_stem("block").expect("owner stem should parse");
    let err = parse_declaration(owner, "- block: menu__item\n").unwrap_err();

    assert!(matches!(err, ParseError::InvalidNaming(_)));
}

#[test]
fn test_separator_in_mod_name_is_rejected() {
    let owner = parse_stem("block").expect("owner stem should parse");
    let result = parse_declaration(owner, "- block: menu\n  mods: [is_current]\n");

    assert!(matches!(result.unwrap_err(), ParseError::InvalidNaming(_)));
}

#[test]
fn test_rejection_message_names_owner() {
    let owner = parse_stem("menu__item").expect("owner stem should parse");
    let err = parse_declaration(owner, "b-broken").unwrap_err();
    assert!(err.to_string().contains("menu__item"));
}
