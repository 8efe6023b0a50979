//! Ordered query parameters.

use indexmap::IndexMap;

/// Key/value pairs emitted after `?`, in insertion order.
///
/// Values are stored exactly as they will be written. `insert_encoded`
/// form-encodes first; `merge_query_string` keeps raw text from a parsed URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: IndexMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` after `application/x-www-form-urlencoded` encoding
    /// (space becomes `+`). An existing key keeps its position.
    pub fn insert_encoded(&mut self, key: &str, value: &str) {
        let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
        self.pairs.insert(key.to_string(), encoded);
    }

    /// Inserts `value` untouched.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.pairs.insert(key.to_string(), value.to_string());
    }

    /// Splits `a=1&b=2` and inserts every pair raw. A pair without `=`
    /// gets an empty value; empty segments are skipped.
    pub fn merge_query_string(&mut self, query: &str) {
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            self.insert_raw(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    /// Removes `key`; the remaining pairs keep their order.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.pairs.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn as_map(&self) -> &IndexMap<String, String> {
        &self.pairs
    }

    /// `?k=v&k=v`, or an empty string when there are no pairs.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_insert_uses_plus_for_space() {
        let mut q = QueryParams::new();
        q.insert_encoded("y", "foo bar");
        q.insert_encoded("h", "S o m#%");
        assert_eq!(q.get("y"), Some("foo+bar"));
        assert_eq!(q.get("h"), Some("S+o+m%23%25"));
    }

    #[test]
    fn merge_keeps_raw_values_and_overwrites_in_place() {
        let mut q = QueryParams::new();
        q.insert_raw("x", "1");
        q.merge_query_string("y=a%20b&x=2&flag&&z=c=d");
        assert_eq!(q.to_query_string(), "?x=2&y=a%20b&flag=&z=c=d");
    }

    #[test]
    fn remove_preserves_order() {
        let mut q = QueryParams::new();
        q.merge_query_string("a=1&b=2&c=3");
        assert_eq!(q.remove("b").as_deref(), Some("2"));
        assert_eq!(q.remove("missing"), None);
        assert_eq!(q.to_query_string(), "?a=1&c=3");
    }

    #[test]
    fn empty_params_render_nothing() {
        assert_eq!(QueryParams::new().to_query_string(), "");
    }
}
