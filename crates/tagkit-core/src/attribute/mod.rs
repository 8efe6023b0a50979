//! Tag attributes: plain key/value pairs plus CSS classes and inline styles.
//!
//! `class` and `style` are never stored as plain attributes. Writes under
//! those names (any case) go to the class list and style map, and the
//! assembled string always renders plain attributes first, then `class`,
//! then `style`.

mod class;
mod style;

pub use class::ClassList;
pub use style::{parse_compound_style, StyleMap};

use indexmap::IndexMap;
use std::fmt;

/// Which container a key is routed to.
enum Slot {
    Class,
    Style,
    Plain,
}

fn slot(key: &str) -> Slot {
    if key.eq_ignore_ascii_case("class") {
        Slot::Class
    } else if key.eq_ignore_ascii_case("style") {
        Slot::Style
    } else {
        Slot::Plain
    }
}

/// Attribute store for one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    plain: IndexMap<String, String>,
    classes: ClassList,
    styles: StyleMap,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// `class` appends classes, `style` merges a compound style string,
    /// anything else overwrites the plain attribute.
    pub fn add(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match slot(key) {
            Slot::Class => self.classes.add(&value),
            Slot::Style => self.styles.merge_compound(&value),
            Slot::Plain => {
                self.plain.insert(key.to_string(), value);
            }
        }
        self
    }

    /// Like `add`, but `class` and `style` replace their whole collection.
    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        match slot(key) {
            Slot::Class => self.classes.clear(),
            Slot::Style => self.styles.clear(),
            Slot::Plain => {}
        }
        self.add(key, value)
    }

    /// `class`/`style` clear their collection; other keys are removed if present.
    pub fn delete(&mut self, key: &str) -> &mut Self {
        match slot(key) {
            Slot::Class => self.classes.clear(),
            Slot::Style => self.styles.clear(),
            Slot::Plain => {
                self.plain.shift_remove(key);
            }
        }
        self
    }

    /// The assembled class or style string, or the plain value. Empty when absent.
    pub fn get(&self, key: &str) -> String {
        match slot(key) {
            Slot::Class => self.class_string(),
            Slot::Style => self.style_string(),
            Slot::Plain => self.plain.get(key).cloned().unwrap_or_default(),
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        match slot(key) {
            Slot::Class => !self.classes.is_empty(),
            Slot::Style => !self.styles.is_empty(),
            Slot::Plain => self.plain.contains_key(key),
        }
    }

    /// Nothing would be rendered.
    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.classes.is_empty() && self.styles.is_empty()
    }

    /// Appends one or more space-separated class names.
    pub fn add_class(&mut self, names: &str) -> &mut Self {
        self.classes.add(names);
        self
    }

    /// Removes the first occurrence of `name`.
    pub fn delete_class(&mut self, name: &str) -> &mut Self {
        self.classes.remove_first(name);
        self
    }

    pub fn delete_classes(&mut self) -> &mut Self {
        self.classes.clear();
        self
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn class_string(&self) -> String {
        self.classes.joined()
    }

    /// Merges a compound style string (`k: v; k: v`).
    pub fn add_style(&mut self, compound: &str) -> &mut Self {
        self.styles.merge_compound(compound);
        self
    }

    /// Sets a single declaration.
    pub fn add_style_property(&mut self, property: &str, value: impl ToString) -> &mut Self {
        self.styles.set(property, &value.to_string());
        self
    }

    pub fn delete_style(&mut self, property: &str) -> &mut Self {
        self.styles.remove(property);
        self
    }

    pub fn delete_styles(&mut self) -> &mut Self {
        self.styles.clear();
        self
    }

    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    pub fn style_string(&self) -> String {
        self.styles.joined()
    }

    /// `k="v" ... class="..." style="..."` with no trailing whitespace.
    pub fn assemble(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.plain {
            out.push_str(&format!("{key}=\"{value}\" "));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!("class=\"{}\" ", self.class_string()));
        }
        if !self.styles.is_empty() {
            out.push_str(&format!("style=\"{}\" ", self.style_string()));
        }
        out.trim_end().to_string()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.assemble())
    }
}
