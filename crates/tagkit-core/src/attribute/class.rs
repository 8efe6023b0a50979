//! Ordered CSS class tokens.

/// Class names in insertion order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Appends each space-separated token of `names`.
    pub fn add(&mut self, names: &str) {
        self.tokens.extend(
            names
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );
    }

    /// Removes the first occurrence of `name` only.
    pub fn remove_first(&mut self, name: &str) {
        if let Some(idx) = self.tokens.iter().position(|t| t == name) {
            self.tokens.remove(idx);
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}
