use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One decoded row of remote table data: a label→value mapping.
///
/// Cell values are always strings. Numeric and boolean columns carry their
/// source text ("12", "true") and are parsed by consumers; the loader
/// enforces no schema beyond that convention. A missing column reads as the
/// empty string, never as an absent key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    inner: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Record {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(label.into(), value.into());
    }

    /// Value under `label`, or `""` when the column is absent.
    pub fn get(&self, label: &str) -> &str {
        self.inner.get(label).map(String::as_str).unwrap_or("")
    }

    /// True when the cell text is the literal `"true"`, case-insensitively.
    /// The remote table cannot express booleans, so flags like `isActive` and
    /// `hasSubCategory` arrive as these two string literals.
    pub fn flag(&self, label: &str) -> bool {
        self.get(label).eq_ignore_ascii_case("true")
    }

    /// Numeric sort key for `label`. Absent or unparseable values sort after
    /// every parseable one.
    pub fn order_key(&self, label: &str) -> f64 {
        self.get(label).trim().parse().unwrap_or(f64::INFINITY)
    }

    /// A comma-joined list cell (the `gallery_images` convention): split on
    /// commas, entries trimmed, empties dropped.
    pub fn list(&self, label: &str) -> Vec<&str> {
        self.get(label)
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(pairs: I) -> Self {
        let mut record = Record::new();
        for (label, value) in pairs {
            record.insert(label, value);
        }
        record
    }
}
