//! Variable name handling: path stripping and key matching.

use varex_core::constants::NAME_PATH_SEPARATOR;
use varex_core::models::NameMatching;

/// Final `/` segment of a variable name (`Primary/textPrimary` → `textPrimary`).
pub fn final_segment(name: &str) -> &str {
    name.rsplit(NAME_PATH_SEPARATOR).next().unwrap_or(name)
}

/// Name shown in list entries.
pub fn display_name(name: &str, strip_path_prefix: bool) -> &str {
    if strip_path_prefix {
        final_segment(name)
    } else {
        name
    }
}

/// Compares variable names against rule keys. Case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatcher {
    discipline: NameMatching,
}

impl NameMatcher {
    pub fn new(discipline: NameMatching) -> Self {
        Self { discipline }
    }

    pub fn discipline(&self) -> NameMatching {
        self.discipline
    }

    pub fn matches(&self, name: &str, key: &str) -> bool {
        match self.discipline {
            NameMatching::Exact => name == key || final_segment(name) == key,
            NameMatching::Contains => name.contains(key),
        }
    }

    /// The slot of the longest matching key in `table`, if any.
    ///
    /// Under `Exact` at most one key can match; under `Contains` the longest
    /// key wins so `linkDecorationHover` is never taken for `linkDecoration`.
    pub fn best_match<T: Copy>(&self, name: &str, table: &[(&str, T)]) -> Option<T> {
        table
            .iter()
            .filter(|(key, _)| self.matches(name, key))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, slot)| *slot)
    }
}
