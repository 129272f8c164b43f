//! Parsing of a single annotation string into its options.

use std::collections::HashMap;

use crate::grammar::keyword;

/// Options parsed from one field annotation.
///
/// Keys are trimmed and lowercased; values are kept verbatim so that
/// defaults and names preserve their casing and whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    options: HashMap<String, String>,
}

impl TagOptions {
    /// Parse `tag` using `separator` between options.
    ///
    /// Each segment is split at its first `=`; a segment without `=` gets an
    /// empty value. Segments with a blank key are dropped. When a key
    /// repeats, the last occurrence wins.
    pub fn parse(tag: &str, separator: &str) -> Self {
        let mut options = HashMap::new();

        for part in tag.split(separator) {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            if !keyword::is_known(&key) {
                tracing::debug!(option = %key, "ignoring unknown env tag option");
            }
            options.insert(key, value.to_string());
        }

        Self { options }
    }

    /// Whether `key` was present, with or without a value
    pub fn has(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// The value given for `key`, empty for flag-style options
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
