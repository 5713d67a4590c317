use super::defs::builtin_labels;
use super::{Catalog, KeyLookup, LabelTable, label_table, resolve};

fn upper(key: &str) -> String {
    key.to_ascii_uppercase()
}

#[test]
fn test_unknown_label_falls_back() {
    let d = resolve("xyz123", &KeyLookup);
    assert_eq!(d.zero_text, "!xyz123");
    assert_eq!(d.one_text, "xyz123");
    assert!(d.zero_description.is_empty());
    assert!(d.one_description.is_empty());
    assert!(!d.inverted);
}

#[test]
fn test_spam_uses_lookup_and_is_inverted() {
    let d = resolve("spam", &upper);
    assert_eq!(d.zero_text, "NOT_SPAM");
    assert_eq!(d.one_text, "SPAM");
    assert_eq!(d.zero_description, vec!["NOT_SPAM.EXPLANATION".to_string()]);
    assert_eq!(d.one_description.len(), 4);
    assert_eq!(d.one_description[3], "SPAM.ONE_DESC.LINE_4");
    assert!(d.inverted);
}

#[test]
fn test_humor_not_inverted() {
    let d = resolve("humor", &KeyLookup);
    assert_eq!(d.zero_text, "serious");
    assert_eq!(d.one_text, "humorous");
    assert_eq!(d.one_description, vec!["humorous.one_desc".to_string()]);
    assert!(!d.inverted);
}

#[test]
fn test_resolve_idempotent() {
    for id in ["spam", "quality", "advocacy_rights", "nope"] {
        assert_eq!(resolve(id, &upper), resolve(id, &upper));
    }
}

#[test]
fn test_table_ids_unique_and_complete() {
    let table = label_table();
    assert_eq!(table.len(), builtin_labels().len());
    assert!(table.get("advocacy_intersectionality").is_some());
    assert!(table.get("harmful_to_animals").unwrap().inverted);
}

#[test]
fn test_required_keys_include_descriptions() {
    let keys = LabelTable::build().required_keys();
    assert!(keys.contains("spam.one_desc.line_1"));
    assert!(keys.contains("not_spam.explanation"));
    assert!(keys.contains("advocacy_focus.zero"));
    // "safe" is shared by three labels but listed once.
    assert_eq!(keys.iter().filter(|k| **k == "safe").count(), 1);
}

#[test]
fn test_catalog_lookup_and_audit() {
    let catalog = Catalog::from_entries([("serious", "Serious"), ("humorous", "Funny")]);
    let d = resolve("humor", &catalog);
    assert_eq!(d.zero_text, "Serious");
    assert_eq!(d.one_text, "Funny");
    assert_eq!(d.one_description, vec!["humorous.one_desc".to_string()]);

    let missing = label_table().missing_keys(&catalog);
    assert!(missing.contains(&"humorous.one_desc"));
    assert!(!missing.contains(&"serious"));
}

#[test]
fn test_catalog_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labelling.json");
    std::fs::write(&path, r#"{"spam":"Spam","not_spam":"Not spam"}"#).unwrap();
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(resolve("spam", &catalog).one_text, "Spam");

    std::fs::write(&path, r#"{"spam":{"nested":true}}"#).unwrap();
    assert!(Catalog::load(&path).is_err());
}
