use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::likert::Rating;
use crate::profile::{MAX_OTHER_LENGTH, MAX_SERIALIZED_LENGTH, ProfileError, text_len};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub advocacy_approach: BTreeMap<String, Option<Rating>>,
    pub advocate: String,
    pub diet: String,
    pub roles: Vec<String>,
}

fn check_field(field: &'static str, value: &str) -> Result<(), ProfileError> {
    let len = text_len(value);
    if len > MAX_OTHER_LENGTH {
        return Err(ProfileError::FieldTooLong { field, len });
    }
    Ok(())
}

/// Validates `data` and renders the blob that gets persisted.
pub fn serialize_profile(data: &ProfileData) -> Result<String, ProfileError> {
    check_field("advocate", &data.advocate)?;
    check_field("diet", &data.diet)?;
    if let Some(role) = data
        .roles
        .iter()
        .find(|r| text_len(r) > MAX_OTHER_LENGTH)
    {
        return Err(ProfileError::RoleTooLong {
            len: text_len(role),
        });
    }

    let serialized = serde_json::to_string(data)?;
    let len = text_len(&serialized);
    if len >= MAX_SERIALIZED_LENGTH {
        return Err(ProfileError::TooLarge { len });
    }
    Ok(serialized)
}

/// Stored content as JSON. Missing or corrupt blobs read back as `{}`.
pub fn parse_stored_profile(content: Option<&str>) -> Value {
    let Some(raw) = content else {
        return Value::Object(Default::default());
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("stored profile is not valid JSON: {e}");
            Value::Object(Default::default())
        }
    }
}
