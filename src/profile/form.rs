use std::collections::BTreeMap;

use crate::labels::TextLookup;
use crate::likert::{LikertError, LikertGroup, ValueVector};
use crate::profile::{MAX_OTHER_LENGTH, text_len};
use crate::profile::data::ProfileData;
use crate::profile::options::{
    ADVOCACY_APPROACH_LABELS, ADVOCATE_OPTIONS, DIET_OPTIONS, OTHER, OptionDef, ROLE_OPTIONS,
    is_known,
};

fn accepts_other(text: &str) -> bool {
    text_len(text) < MAX_OTHER_LENGTH
}

/// Radio options whose last entry is "other" with a free-text field.
#[derive(Debug, Clone)]
pub struct RadioWithOther {
    options: &'static [OptionDef],
    option: String,
    other: String,
}

impl RadioWithOther {
    pub fn new(options: &'static [OptionDef]) -> Self {
        Self {
            options,
            option: String::new(),
            other: String::new(),
        }
    }

    pub fn options(&self) -> &'static [OptionDef] {
        self.options
    }

    pub fn option(&self) -> &str {
        &self.option
    }

    pub fn other(&self) -> &str {
        &self.other
    }

    pub fn is_answered(&self) -> bool {
        !self.option.is_empty()
    }

    /// Returns false for values that are not one of the options.
    pub fn choose(&mut self, value: &str) -> bool {
        if !is_known(self.options, value) {
            return false;
        }
        self.option = value.to_string();
        true
    }

    /// Edits that would reach the length limit are dropped.
    pub fn set_other(&mut self, text: &str) -> bool {
        if !accepts_other(text) {
            return false;
        }
        self.other = text.to_string();
        true
    }

    /// Splits a stored answer back into option and free text.
    pub fn load(&mut self, response: &str) {
        if response.is_empty() {
            self.option.clear();
            self.other.clear();
        } else if is_known(self.options, response) {
            self.option = response.to_string();
            self.other.clear();
        } else {
            self.option = OTHER.to_string();
            self.other = response.to_string();
        }
    }

    pub fn answer(&self) -> String {
        if self.option == OTHER && !self.other.is_empty() {
            self.other.clone()
        } else {
            self.option.clone()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoleChecklist {
    checked: Vec<String>,
    other: String,
}

impl RoleChecklist {
    pub fn checked(&self) -> &[String] {
        &self.checked
    }

    pub fn other(&self) -> &str {
        &self.other
    }

    pub fn set_checked(&mut self, value: &str, on: bool) -> bool {
        if !is_known(ROLE_OPTIONS, value) {
            return false;
        }
        let pos = self.checked.iter().position(|r| r == value);
        match (on, pos) {
            (true, None) => self.checked.push(value.to_string()),
            (false, Some(i)) => {
                self.checked.remove(i);
            }
            _ => {}
        }
        true
    }

    pub fn set_other(&mut self, text: &str) -> bool {
        if !accepts_other(text) {
            return false;
        }
        self.other = text.to_string();
        true
    }

    pub fn load(&mut self, roles: &[String]) {
        let (known, unknown): (Vec<&String>, Vec<&String>) =
            roles.iter().partition(|r| is_known(ROLE_OPTIONS, r));
        self.checked = known.into_iter().cloned().collect();
        self.other = unknown
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",");
    }

    pub fn answer(&self) -> Vec<String> {
        let mut roles = self.checked.clone();
        if self.checked.iter().any(|r| r == OTHER) && !self.other.is_empty() {
            roles.push(self.other.clone());
        }
        roles
    }
}

/// The "your profile" survey: diet, advocate, roles and advocacy ratings.
#[derive(Debug)]
pub struct ProfileForm {
    pub diet: RadioWithOther,
    pub advocate: RadioWithOther,
    pub roles: RoleChecklist,
    advocacy: LikertGroup,
}

impl ProfileForm {
    pub fn new(lookup: &dyn TextLookup) -> Result<Self, LikertError> {
        Ok(Self {
            diet: RadioWithOther::new(DIET_OPTIONS),
            advocate: RadioWithOther::new(ADVOCATE_OPTIONS),
            roles: RoleChecklist::default(),
            advocacy: LikertGroup::new(ADVOCACY_APPROACH_LABELS, lookup, true)?,
        })
    }

    pub fn advocacy(&self) -> &LikertGroup {
        &self.advocacy
    }

    pub fn advocacy_mut(&mut self) -> &mut LikertGroup {
        &mut self.advocacy
    }

    pub fn load_defaults(&mut self, data: &ProfileData) -> Result<(), LikertError> {
        self.diet.load(&data.diet);
        self.advocate.load(&data.advocate);
        self.roles.load(&data.roles);

        let values: Vec<_> = ADVOCACY_APPROACH_LABELS
            .iter()
            .map(|id| data.advocacy_approach.get(*id).copied().flatten())
            .collect();
        self.advocacy.apply_defaults(ValueVector::from(values))
    }

    pub fn can_submit(&self) -> bool {
        self.advocacy.is_complete() && self.advocate.is_answered() && self.diet.is_answered()
    }

    pub fn submission(&self) -> ProfileData {
        let values = self.advocacy.values();
        let advocacy_approach: BTreeMap<String, _> = ADVOCACY_APPROACH_LABELS
            .iter()
            .enumerate()
            .map(|(i, id)| (id.to_string(), values.get(i)))
            .collect();

        ProfileData {
            advocacy_approach,
            advocate: self.advocate.answer(),
            diet: self.diet.answer(),
            roles: self.roles.answer(),
        }
    }
}
