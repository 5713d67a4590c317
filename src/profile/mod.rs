pub mod data;
pub mod form;
pub mod options;

use thiserror::Error;

pub use data::{ProfileData, parse_stored_profile, serialize_profile};
pub use form::{ProfileForm, RadioWithOther, RoleChecklist};

// Lengths are counted in UTF-16 code units, the unit browser forms measure in.
pub const MAX_OTHER_LENGTH: usize = 100;

/// Serialized profiles must stay strictly below this length.
pub const MAX_SERIALIZED_LENGTH: usize = 5000;

pub(crate) fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{field} is {len} characters, limit is {limit}", limit = MAX_OTHER_LENGTH)]
    FieldTooLong { field: &'static str, len: usize },

    #[error("role is {len} characters, limit is {limit}", limit = MAX_OTHER_LENGTH)]
    RoleTooLong { len: usize },

    #[error("serialized profile is {len} units long, limit is {limit}", limit = MAX_SERIALIZED_LENGTH)]
    TooLarge { len: usize },

    #[error("profile serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "../../tests/src_inline/profile/tests.rs"]
mod tests;
