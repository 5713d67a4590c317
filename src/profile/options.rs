#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDef {
    pub label: &'static str,
    pub value: &'static str,
}

pub const OTHER: &str = "other";

pub const ADVOCACY_APPROACH_LABELS: &[&str] = &[
    "advocacy_approach",
    "advocacy_focus",
    "advocacy_intersectionality",
    "advocacy_rights",
    "advocacy_diplomacy",
    "advocacy_empiricism",
];

const fn opt(label: &'static str, value: &'static str) -> OptionDef {
    OptionDef { label, value }
}

pub const ADVOCATE_OPTIONS: &[OptionDef] = &[
    opt("advocate_true", "true"),
    opt("advocate_false", "false"),
    opt("advocate_other", OTHER),
];

pub const DIET_OPTIONS: &[OptionDef] = &[
    opt("diet_regular_meat_eater", "regular_meat_eater"),
    opt("diet_occasional_meat_eater", "occasional_meat_eater"),
    opt("diet_flexitarian", "flexitarian"),
    opt("diet_vegetarian", "vegetarian"),
    opt("diet_vegan", "vegan"),
    opt("diet_other", OTHER),
];

// "comany_staff" is the value already stored in existing profiles.
pub const ROLE_OPTIONS: &[OptionDef] = &[
    opt("role_volunteer", "volunteer"),
    opt("role_donor", "donor"),
    opt("role_staff", "staff"),
    opt("role_researcher", "researcher"),
    opt("role_independent", "independent"),
    opt("role_legal", "legal"),
    opt("role_rescuer", "rescuer"),
    opt("role_influencer", "influencer"),
    opt("role_company_owner", "company_owner"),
    opt("role_company_staff", "comany_staff"),
    opt("role_investor", "investor"),
    opt("role_other", OTHER),
];

pub fn is_known(options: &[OptionDef], value: &str) -> bool {
    options.iter().any(|o| o.value == value)
}
