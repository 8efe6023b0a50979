//! A single HTML tag with optional surrounding text and body content.

use crate::attribute::Attributes;
use crate::text;
use std::fmt;

/// Tag names longer than this are truncated.
pub const MAX_TAG_NAME_LEN: usize = 50;

/// How a tag is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Closure {
    /// `<x>content</x>`
    #[default]
    Content,
    /// `<x />`
    SelfClosing,
    /// `<x>content` with no closing tag.
    Unclosed,
}

impl Closure {
    /// 0, 1 and 2 map to content, self-closing and unclosed. Anything else
    /// falls back to content.
    pub fn from_code(code: i64) -> Closure {
        match code {
            1 => Closure::SelfClosing,
            2 => Closure::Unclosed,
            _ => Closure::Content,
        }
    }

    /// `content`, `self` and `none` (any case), or a numeric code. Anything
    /// else falls back to content.
    pub fn from_name(name: &str) -> Closure {
        if let Ok(code) = name.trim().parse::<i64>() {
            return Closure::from_code(code);
        }
        match name.to_ascii_lowercase().as_str() {
            "self" | "self-closing" => Closure::SelfClosing,
            "none" | "unclosed" => Closure::Unclosed,
            _ => Closure::Content,
        }
    }

    /// Inverse of `from_code`.
    pub fn code(self) -> i64 {
        match self {
            Closure::Content => 0,
            Closure::SelfClosing => 1,
            Closure::Unclosed => 2,
        }
    }
}

/// An HTML tag.
///
/// Output is `before` + opening tag + content + closing tag + `after`,
/// where the content and closing pieces depend on the `Closure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    closure: Closure,
    before: String,
    content: String,
    after: String,
    attributes: Attributes,
}

impl Tag {
    /// Tag named `name` (lower-cased, at most `MAX_TAG_NAME_LEN` characters).
    pub fn new(name: &str, closure: Closure) -> Self {
        Self::with_name_limit(name, closure, MAX_TAG_NAME_LEN)
    }

    /// Same as `new` with a custom name length cap.
    pub fn with_name_limit(name: &str, closure: Closure, limit: usize) -> Self {
        Self {
            name: name.to_lowercase().chars().take(limit).collect(),
            closure,
            before: String::new(),
            content: String::new(),
            after: String::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn closure(&self) -> Closure {
        self.closure
    }

    pub fn set_closure(&mut self, closure: Closure) -> &mut Self {
        self.closure = closure;
        self
    }

    /// Unknown codes fall back to `Closure::Content`.
    pub fn set_closure_code(&mut self, code: i64) -> &mut Self {
        self.closure = Closure::from_code(code);
        self
    }

    /// Escaped text placed before the opening tag.
    pub fn set_before(&mut self, text: &str) -> &mut Self {
        self.before = text::escape(text);
        self
    }

    pub fn set_before_raw(&mut self, text: &str) -> &mut Self {
        self.before = text.to_string();
        self
    }

    pub fn before(&self) -> &str {
        &self.before
    }

    /// Escaped text placed after the closing tag.
    pub fn set_after(&mut self, text: &str) -> &mut Self {
        self.after = text::escape(text);
        self
    }

    pub fn set_after_raw(&mut self, text: &str) -> &mut Self {
        self.after = text.to_string();
        self
    }

    pub fn after(&self) -> &str {
        &self.after
    }

    /// Escaped body content.
    pub fn set_content(&mut self, text: &str) -> &mut Self {
        self.content = text::escape(text);
        self
    }

    pub fn set_raw_content(&mut self, text: &str) -> &mut Self {
        self.content = text.to_string();
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Replaces the whole attribute store.
    pub fn set_attributes(&mut self, attributes: Attributes) -> &mut Self {
        self.attributes = attributes;
        self
    }

    pub fn add_attribute(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.attributes.add(key, value);
        self
    }

    pub fn attribute(&self, key: &str) -> String {
        self.attributes.get(key)
    }

    /// Binds `js` to the `onclick` event.
    pub fn set_event(&mut self, js: &str) -> &mut Self {
        self.set_event_for("onclick", js)
    }

    pub fn set_event_for(&mut self, event: &str, js: &str) -> &mut Self {
        self.add_attribute(event, js)
    }

    pub fn add_class(&mut self, names: &str) -> &mut Self {
        self.attributes.add_class(names);
        self
    }

    pub fn add_style(&mut self, property: &str, value: impl ToString) -> &mut Self {
        self.attributes.add_style_property(property, value);
        self
    }

    pub fn set_id(&mut self, id: &str) -> &mut Self {
        self.add_attribute("id", id)
    }

    /// `<name attrs>` or `<name attrs />`.
    pub fn open(&self) -> String {
        let mut out = format!("<{}", self.name);
        if !self.attributes.is_empty() {
            out.push(' ');
            out.push_str(&self.attributes.assemble());
        }
        if self.closure == Closure::SelfClosing {
            out.push_str(" />");
        } else {
            out.push('>');
        }
        out
    }

    /// `</name>`, or nothing for self-closing tags.
    pub fn close(&self) -> String {
        if self.closure == Closure::SelfClosing {
            String::new()
        } else {
            format!("</{}>", self.name)
        }
    }

    pub fn output(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.before);
        out.push_str(&self.open());
        match self.closure {
            Closure::Content => {
                out.push_str(&self.content);
                out.push_str(&self.close());
                out.push_str(&self.after);
            }
            Closure::Unclosed => out.push_str(&self.content),
            Closure::SelfClosing => out.push_str(&self.after),
        }
        out
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output())
    }
}
