//! Admin user management: the flat "manage user" form and the nested notes
//! document it is stored as.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{Role, UserRecord, UserUpdate};

const AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=110;
const APPROACH_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("age {0} is outside 1..=110")]
    AgeOutOfRange(u32),

    #[error("{field} rating {value} is outside 1..=5")]
    RatingOutOfRange { field: &'static str, value: u8 },

    #[error("income level must be non-negative, got {0}")]
    NegativeIncome(f64),

    #[error("notes serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUserForm {
    #[serde(rename = "user_id")]
    pub user_id: String,
    pub id: String,
    #[serde(rename = "display_name")]
    pub display_name: String,
    pub role: Role,
    pub current_lifestyle_diet: String,
    pub age: Option<u32>,
    pub gender: String,
    pub ethnicity: String,
    pub country: String,
    pub education_level: String,
    pub income_level: Option<f64>,
    pub income_currency: String,
    pub political_affiliation: String,
    pub religious_affiliation: String,
    pub advocate_for_animals: String,
    pub roles_in_animal_advocacy: String,
    pub abolitionist_vs_incrementalist_approach: Option<u8>,
    pub institutional_vs_individual_focus: Option<u8>,
    pub intersectional_vs_animal_activism_focus: Option<u8>,
    pub welfare_vs_rights_focus: Option<u8>,
    pub confrontational_vs_diplomatic_activism: Option<u8>,
    pub intuitive_vs_empirical_effectiveness_judgement: Option<u8>,
    #[serde(rename = "show_on_leaderboard")]
    pub show_on_leaderboard: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminNotes {
    pub current_lifestyle_diet: String,
    pub demographics: Demographics,
    pub involvement_in_animal_advocacy: Involvement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age: Option<u32>,
    pub gender: String,
    pub ethnicity: String,
    pub country: String,
    pub education_level: String,
    pub income_level: Option<f64>,
    pub income_currency: String,
    pub political_affiliation: String,
    pub religious_affiliation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Involvement {
    pub advocate_for_animals: String,
    pub roles_in_animal_advocacy: String,
    pub personal_approach_rating: ApproachRatings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproachRatings {
    pub abolitionist_vs_incrementalist_approach: Option<u8>,
    pub institutional_vs_individual_focus: Option<u8>,
    pub intersectional_vs_animal_activism_focus: Option<u8>,
    pub welfare_vs_rights_focus: Option<u8>,
    pub confrontational_vs_diplomatic_activism: Option<u8>,
    pub intuitive_vs_empirical_effectiveness_judgement: Option<u8>,
}

impl ApproachRatings {
    fn fields(&self) -> [(&'static str, Option<u8>); 6] {
        [
            (
                "abolitionistVsIncrementalistApproach",
                self.abolitionist_vs_incrementalist_approach,
            ),
            (
                "institutionalVsIndividualFocus",
                self.institutional_vs_individual_focus,
            ),
            (
                "intersectionalVsAnimalActivismFocus",
                self.intersectional_vs_animal_activism_focus,
            ),
            ("welfareVsRightsFocus", self.welfare_vs_rights_focus),
            (
                "confrontationalVsDiplomaticActivism",
                self.confrontational_vs_diplomatic_activism,
            ),
            (
                "intuitiveVsEmpiricalEffectivenessJudgement",
                self.intuitive_vs_empirical_effectiveness_judgement,
            ),
        ]
    }

    fn validate(&self) -> Result<(), AdminError> {
        for (field, value) in self.fields() {
            if let Some(value) = value {
                if !APPROACH_RANGE.contains(&value) {
                    return Err(AdminError::RatingOutOfRange { field, value });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: String,
    pub display_name: String,
    pub role: Role,
    #[serde(rename = "show_on_leaderboard")]
    pub show_on_leaderboard: bool,
    pub notes: String,
}

impl UpdateUserRequest {
    pub fn into_update(self) -> UserUpdate {
        UserUpdate {
            display_name: self.display_name,
            role: self.role,
            show_on_leaderboard: self.show_on_leaderboard,
            notes: self.notes,
        }
    }
}

impl AdminUserForm {
    pub fn notes(&self) -> AdminNotes {
        AdminNotes {
            current_lifestyle_diet: self.current_lifestyle_diet.clone(),
            demographics: Demographics {
                age: self.age,
                gender: self.gender.clone(),
                ethnicity: self.ethnicity.clone(),
                country: self.country.clone(),
                education_level: self.education_level.clone(),
                income_level: self.income_level,
                income_currency: self.income_currency.clone(),
                political_affiliation: self.political_affiliation.clone(),
                religious_affiliation: self.religious_affiliation.clone(),
            },
            involvement_in_animal_advocacy: Involvement {
                advocate_for_animals: self.advocate_for_animals.clone(),
                roles_in_animal_advocacy: self.roles_in_animal_advocacy.clone(),
                personal_approach_rating: ApproachRatings {
                    abolitionist_vs_incrementalist_approach: self
                        .abolitionist_vs_incrementalist_approach,
                    institutional_vs_individual_focus: self.institutional_vs_individual_focus,
                    intersectional_vs_animal_activism_focus: self
                        .intersectional_vs_animal_activism_focus,
                    welfare_vs_rights_focus: self.welfare_vs_rights_focus,
                    confrontational_vs_diplomatic_activism: self
                        .confrontational_vs_diplomatic_activism,
                    intuitive_vs_empirical_effectiveness_judgement: self
                        .intuitive_vs_empirical_effectiveness_judgement,
                },
            },
        }
    }

    /// Validates the form and reshapes it into a store update.
    pub fn reformat(&self) -> Result<UpdateUserRequest, AdminError> {
        if let Some(age) = self.age {
            if !AGE_RANGE.contains(&age) {
                return Err(AdminError::AgeOutOfRange(age));
            }
        }
        if let Some(income) = self.income_level {
            if income < 0.0 {
                return Err(AdminError::NegativeIncome(income));
            }
        }
        let notes = self.notes();
        notes
            .involvement_in_animal_advocacy
            .personal_approach_rating
            .validate()?;

        Ok(UpdateUserRequest {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
            show_on_leaderboard: self.show_on_leaderboard,
            notes: serde_json::to_string(&notes)?,
        })
    }
}

/// Blank display names are shown as the user id.
pub fn valid_display_name(name: &str, id: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        id.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A user record as shown on the admin page.
pub fn admin_view(mut record: UserRecord) -> UserRecord {
    record.display_name = valid_display_name(&record.display_name, &record.id);
    record
}

#[cfg(test)]
#[path = "../tests/src_inline/admin.rs"]
mod tests;
