pub mod defs;
pub mod lookup;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use serde::Serialize;

pub use defs::LabelDef;
pub use lookup::{Catalog, CatalogError, KeyLookup, TextLookup};

use defs::builtin_labels;

/// Display texts for the two poles of a labelled rating question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelDescriptor {
    pub zero_text: String,
    pub one_text: String,
    pub zero_description: Vec<String>,
    pub one_description: Vec<String>,
    pub inverted: bool,
}

#[derive(Debug)]
pub struct LabelTable {
    by_id: BTreeMap<&'static str, &'static LabelDef>,
}

impl LabelTable {
    fn build() -> Self {
        let mut by_id = BTreeMap::new();
        for def in builtin_labels() {
            by_id.entry(def.id).or_insert(def);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'static LabelDef> {
        self.by_id.get(id).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_id.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Every localization key referenced by the table.
    pub fn required_keys(&self) -> BTreeSet<&'static str> {
        self.by_id.values().flat_map(|def| def.keys()).collect()
    }

    pub fn missing_keys(&self, catalog: &Catalog) -> Vec<&'static str> {
        self.required_keys()
            .into_iter()
            .filter(|key| !catalog.contains(key))
            .collect()
    }

    pub fn resolve(&self, id: &str, lookup: &dyn TextLookup) -> LabelDescriptor {
        match self.get(id) {
            Some(def) => describe(def, lookup),
            None => fallback(id),
        }
    }
}

pub fn label_table() -> &'static LabelTable {
    static TABLE: OnceLock<LabelTable> = OnceLock::new();
    TABLE.get_or_init(LabelTable::build)
}

pub fn resolve(id: &str, lookup: &dyn TextLookup) -> LabelDescriptor {
    label_table().resolve(id, lookup)
}

fn describe(def: &LabelDef, lookup: &dyn TextLookup) -> LabelDescriptor {
    LabelDescriptor {
        zero_text: lookup.t(def.zero_key),
        one_text: lookup.t(def.one_key),
        zero_description: def.zero_desc.iter().map(|k| lookup.t(k)).collect(),
        one_description: def.one_desc.iter().map(|k| lookup.t(k)).collect(),
        inverted: def.inverted,
    }
}

// Unknown ids still render: "!id" on the zero pole, the id itself on the one pole.
fn fallback(id: &str) -> LabelDescriptor {
    LabelDescriptor {
        zero_text: format!("!{id}"),
        one_text: id.to_string(),
        zero_description: Vec::new(),
        one_description: Vec::new(),
        inverted: false,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/labels/tests.rs"]
mod tests;
