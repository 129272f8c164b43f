//! Key/value stores that fields are resolved from

use std::collections::{BTreeMap, HashMap};
use std::env;

/// A flat string key/value store queried by exact, case-sensitive key.
pub trait Source {
    /// Return the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Variables whose value is not valid Unicode are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl Source for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Source for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| v.to_string())
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// First non-empty value among `names`, looked up in order.
///
/// Returns the matching key together with its value; absent and empty
/// entries are both skipped.
pub(crate) fn first_non_empty<'n, S: Source + ?Sized>(
    source: &S,
    names: &'n [String],
) -> Option<(&'n str, String)> {
    names.iter().find_map(|name| {
        source
            .get(name)
            .filter(|value| !value.is_empty())
            .map(|value| (name.as_str(), value))
    })
}
