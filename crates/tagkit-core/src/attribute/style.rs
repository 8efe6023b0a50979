//! Inline CSS declarations.

use indexmap::IndexMap;

/// `property -> value` in insertion order; re-setting a property keeps its slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: IndexMap<String, String>,
}

impl StyleMap {
    pub fn set(&mut self, property: &str, value: &str) {
        self.declarations
            .insert(property.to_string(), value.to_string());
    }

    /// Merges every declaration of a compound string such as
    /// `border:1px; color:red`.
    pub fn merge_compound(&mut self, compound: &str) {
        for (property, value) in parse_compound_style(compound) {
            self.declarations.insert(property, value);
        }
    }

    pub fn remove(&mut self, property: &str) {
        self.declarations.shift_remove(property);
    }

    pub fn clear(&mut self) {
        self.declarations.clear();
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// `k: v; k: v;`
    pub fn joined(&self) -> String {
        self.declarations
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Splits a compound style string on `;`, then each segment on its `:`.
///
/// Segments with no colon or more than one colon are skipped, as are
/// segments whose property is blank. Property and value are trimmed.
pub fn parse_compound_style(compound: &str) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for segment in compound.split(';') {
        if segment.trim().is_empty() {
            continue;
        }
        if segment.matches(':').count() != 1 {
            tracing::warn!(
                segment,
                "skipping style declaration without exactly one ':'"
            );
            continue;
        }
        let Some((property, value)) = segment.split_once(':') else {
            continue;
        };
        let property = property.trim();
        if property.is_empty() {
            continue;
        }
        out.insert(property.to_string(), value.trim().to_string());
    }
    out
}
