#[derive(Debug, Clone, Copy)]
pub struct LabelDef {
    pub id: &'static str,
    pub zero_key: &'static str,
    pub zero_desc: &'static [&'static str],
    pub one_key: &'static str,
    pub one_desc: &'static [&'static str],
    pub inverted: bool,
}

impl LabelDef {
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.zero_key)
            .chain(self.zero_desc.iter().copied())
            .chain(std::iter::once(self.one_key))
            .chain(self.one_desc.iter().copied())
    }
}

const NONE: &[&str] = &[];

const NOT_SPAM_DESC: &[&str] = &["not_spam.explanation"];
const SPAM_DESC: &[&str] = &[
    "spam.one_desc.line_1",
    "spam.one_desc.line_2",
    "spam.one_desc.line_3",
    "spam.one_desc.line_4",
];
const HARMFUL_DESC: &[&str] = &["harmful.one_desc.line_1", "harmful.one_desc.line_2"];
const HATEFUL_DESC: &[&str] = &["hateful.one_desc.line_1", "hateful.one_desc.line_2"];
const CREATIVITY_DESC: &[&str] = &["creative.one_desc.line_1", "creative.one_desc.line_2"];

const fn inverted(
    id: &'static str,
    zero_key: &'static str,
    one_key: &'static str,
    one_desc: &'static [&'static str],
) -> LabelDef {
    LabelDef {
        id,
        zero_key,
        zero_desc: NONE,
        one_key,
        one_desc,
        inverted: true,
    }
}

const fn plain(
    id: &'static str,
    zero_key: &'static str,
    one_key: &'static str,
    one_desc: &'static [&'static str],
) -> LabelDef {
    LabelDef {
        id,
        zero_key,
        zero_desc: NONE,
        one_key,
        one_desc,
        inverted: false,
    }
}

const BUILTIN_LABELS: &[LabelDef] = &[
    LabelDef {
        id: "spam",
        zero_key: "not_spam",
        zero_desc: NOT_SPAM_DESC,
        one_key: "spam",
        one_desc: SPAM_DESC,
        inverted: true,
    },
    inverted(
        "fails_task",
        "follows_instructions",
        "fails_task",
        &["fails_task.one_desc"],
    ),
    inverted(
        "not_appropriate",
        "appropriate",
        "inappropriate",
        &["inappropriate.one_desc"],
    ),
    inverted("violence", "harmless", "violent", &["violent.one_desc"]),
    inverted("excessive_harm", "safe", "harmful", HARMFUL_DESC),
    inverted("sexual_content", "non_sexual", "sexual", &["sexual.one_desc"]),
    inverted("toxicity", "polite", "rude", &["rude.one_desc"]),
    inverted(
        "moral_judgement",
        "non_judgemental",
        "judgemental",
        &["judgemental.one_desc"],
    ),
    inverted(
        "political_content",
        "apolitical",
        "political",
        &["political.one_desc"],
    ),
    plain("humor", "serious", "humorous", &["humorous.one_desc"]),
    inverted("hate_speech", "safe", "hateful", HATEFUL_DESC),
    inverted("threat", "safe", "threatening", &["threatening.one_desc"]),
    inverted("misleading", "accurate", "misleading", &["misleading.one_desc"]),
    plain("helpfulness", "unhelpful", "helpful", &["helpful.one_desc"]),
    plain("creative", "boring", "creative", &["creative.one_desc"]),
    plain("pii", "clean", "contains_pii", &["contains_pii.one_desc"]),
    plain("quality", "low_quality", "high_quality", NONE),
    plain("creativity", "ordinary", "creative", CREATIVITY_DESC),
    inverted(
        "harmful_to_animals",
        "harmful_to_animals.zero_text",
        "harmful_to_animals.one_text",
        &["harmful_to_animals.one_desc"],
    ),
    plain(
        "animal_effect",
        "animal_effect.zero",
        "animal_effect.one",
        &["animal_effect.one_desc"],
    ),
    plain(
        "cultural_inclusion",
        "cultural_inclusion.zero",
        "cultural_inclusion.one",
        &["cultural_inclusion.one_desc"],
    ),
    plain(
        "emotional_effect",
        "emotional_effect.zero",
        "emotional_effect.one",
        &["emotional_effect.one_desc"],
    ),
    plain(
        "factuality",
        "factuality.zero",
        "factuality.one",
        &["factuality.one_desc"],
    ),
    plain(
        "influence",
        "influence.zero",
        "influence.one",
        &["influence.one_desc"],
    ),
    plain("logical", "logical.zero", "logical.one", &["logical.one_desc"]),
    plain(
        "advocacy_approach",
        "advocacy_approach.zero",
        "advocacy_approach.one",
        NONE,
    ),
    plain(
        "advocacy_diplomacy",
        "advocacy_diplomacy.zero",
        "advocacy_diplomacy.one",
        NONE,
    ),
    plain(
        "advocacy_empiricism",
        "advocacy_empiricism.zero",
        "advocacy_empiricism.one",
        NONE,
    ),
    plain(
        "advocacy_focus",
        "advocacy_focus.zero",
        "advocacy_focus.one",
        NONE,
    ),
    plain(
        "advocacy_intersectionality",
        "advocacy_intersectionality.zero",
        "advocacy_intersectionality.one",
        NONE,
    ),
    plain(
        "advocacy_rights",
        "advocacy_rights.zero",
        "advocacy_rights.one",
        NONE,
    ),
];

pub fn builtin_labels() -> &'static [LabelDef] {
    BUILTIN_LABELS
}
