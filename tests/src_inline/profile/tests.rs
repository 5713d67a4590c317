use std::collections::BTreeMap;

use serde_json::json;

use super::options::{ADVOCACY_APPROACH_LABELS, DIET_OPTIONS, OTHER};
use super::{
    MAX_OTHER_LENGTH, ProfileData, ProfileError, ProfileForm, RadioWithOther, RoleChecklist,
    parse_stored_profile, serialize_profile,
};
use crate::labels::KeyLookup;
use crate::likert::{GroupState, Rating};

fn full_profile() -> ProfileData {
    let advocacy_approach: BTreeMap<String, Option<Rating>> = ADVOCACY_APPROACH_LABELS
        .iter()
        .map(|id| (id.to_string(), Some(Rating::new(0.5).unwrap())))
        .collect();
    ProfileData {
        advocacy_approach,
        advocate: "true".to_string(),
        diet: "vegan".to_string(),
        roles: vec!["donor".to_string()],
    }
}

#[test]
fn test_radio_load_known_unknown_empty() {
    let mut radio = RadioWithOther::new(DIET_OPTIONS);
    radio.load("vegan");
    assert_eq!((radio.option(), radio.other()), ("vegan", ""));

    radio.load("pescatarian");
    assert_eq!((radio.option(), radio.other()), (OTHER, "pescatarian"));
    assert_eq!(radio.answer(), "pescatarian");

    radio.load("");
    assert_eq!((radio.option(), radio.other()), ("", ""));
    assert!(!radio.is_answered());
}

#[test]
fn test_radio_other_without_text_answers_other() {
    let mut radio = RadioWithOther::new(DIET_OPTIONS);
    assert!(radio.choose(OTHER));
    assert_eq!(radio.answer(), OTHER);
    assert!(!radio.choose("carnivore"));
}

#[test]
fn test_other_text_length_limit() {
    let mut radio = RadioWithOther::new(DIET_OPTIONS);
    assert!(radio.set_other(&"a".repeat(MAX_OTHER_LENGTH - 1)));
    assert!(!radio.set_other(&"b".repeat(MAX_OTHER_LENGTH)));
    assert_eq!(radio.other().len(), MAX_OTHER_LENGTH - 1);
}

#[test]
fn test_roles_load_and_answer() {
    let mut roles = RoleChecklist::default();
    roles.load(&[
        "donor".to_string(),
        "other".to_string(),
        "farmer".to_string(),
        "writer".to_string(),
    ]);
    assert_eq!(roles.checked(), &["donor".to_string(), "other".to_string()]);
    assert_eq!(roles.other(), "farmer,writer");
    assert_eq!(roles.answer(), vec!["donor", "other", "farmer,writer"]);

    roles.set_checked("other", false);
    assert_eq!(roles.answer(), vec!["donor"]);
    assert!(!roles.set_checked("astronaut", true));
}

#[test]
fn test_serialize_rejects_long_fields() {
    let mut data = full_profile();
    data.diet = "x".repeat(MAX_OTHER_LENGTH + 1);
    assert!(matches!(
        serialize_profile(&data),
        Err(ProfileError::FieldTooLong { field: "diet", .. })
    ));

    let mut data = full_profile();
    data.roles.push("y".repeat(MAX_OTHER_LENGTH + 1));
    assert!(matches!(
        serialize_profile(&data),
        Err(ProfileError::RoleTooLong { .. })
    ));
}

#[test]
fn test_serialize_rejects_oversize_document() {
    let mut data = full_profile();
    data.roles = (0..100).map(|i| format!("{i:0>60}")).collect();
    assert!(matches!(
        serialize_profile(&data),
        Err(ProfileError::TooLarge { .. })
    ));
}

#[test]
fn test_limits_count_utf16_units() {
    let mut data = full_profile();
    data.advocate = "\u{1F600}".repeat(51);
    assert!(matches!(
        serialize_profile(&data),
        Err(ProfileError::FieldTooLong {
            field: "advocate",
            len: 102
        })
    ));

    // two bytes each in UTF-8, one unit each in UTF-16
    let mut data = full_profile();
    data.roles = (0..45).map(|_| "\u{e9}".repeat(60)).collect();
    let blob = serialize_profile(&data).unwrap();
    assert!(blob.len() > 5000);

    let mut radio = RadioWithOther::new(DIET_OPTIONS);
    assert!(!radio.set_other(&"\u{1F600}".repeat(50)));
    assert!(radio.set_other(&"\u{1F600}".repeat(49)));
}

#[test]
fn test_serialize_shape() {
    let mut data = ProfileData::default();
    data.advocate = "false".to_string();
    data.advocacy_approach
        .insert("advocacy_focus".to_string(), Some(Rating::new(0.25).unwrap()));
    let s = serialize_profile(&data).unwrap();
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(
        v,
        json!({
            "advocacyApproach": {"advocacy_focus": 0.25},
            "advocate": "false",
            "diet": "",
            "roles": []
        })
    );
}

#[test]
fn test_parse_stored_profile_fallbacks() {
    assert_eq!(parse_stored_profile(None), json!({}));
    assert_eq!(parse_stored_profile(Some("{not json")), json!({}));
    assert_eq!(
        parse_stored_profile(Some(r#"{"diet":"vegan"}"#)),
        json!({"diet": "vegan"})
    );
}

#[test]
fn test_partial_document_deserializes() {
    let data: ProfileData = serde_json::from_str(r#"{"diet":"vegan"}"#).unwrap();
    assert_eq!(data.diet, "vegan");
    assert!(data.roles.is_empty());
    assert!(serde_json::from_str::<ProfileData>(r#"{"advocacyApproach":{"a":7}}"#).is_err());
}

#[test]
fn test_form_defaults_then_submission() {
    let mut form = ProfileForm::new(&KeyLookup).unwrap();
    assert!(!form.can_submit());

    let mut stored = full_profile();
    stored.diet = "raw food".to_string();
    stored.advocacy_approach.remove("advocacy_rights");
    form.load_defaults(&stored).unwrap();

    assert_eq!(form.advocacy().state(), GroupState::Populated);
    assert_eq!(form.diet.option(), OTHER);
    assert!(!form.can_submit());

    let rights = ADVOCACY_APPROACH_LABELS
        .iter()
        .position(|id| *id == "advocacy_rights")
        .unwrap();
    form.advocacy_mut().select(rights, 4).unwrap();
    assert!(form.can_submit());

    let out = form.submission();
    assert_eq!(out.diet, "raw food");
    assert_eq!(out.advocate, "true");
    assert_eq!(out.roles, vec!["donor"]);
    assert_eq!(
        out.advocacy_approach["advocacy_rights"],
        Some(Rating::ONE)
    );
    assert_eq!(out.advocacy_approach.len(), ADVOCACY_APPROACH_LABELS.len());
    assert!(serialize_profile(&out).is_ok());
}

#[test]
fn test_empty_defaults_keep_form_blank() {
    let mut form = ProfileForm::new(&KeyLookup).unwrap();
    form.load_defaults(&ProfileData::default()).unwrap();
    assert_eq!(form.advocacy().answered(), 0);
    let out = form.submission();
    assert!(out.advocacy_approach.values().all(Option::is_none));
    assert_eq!(out.diet, "");
}
