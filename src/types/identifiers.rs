use serde::{Deserialize, Serialize};

/// Identifier of a service (the `id` column of the services table, referenced
/// by portfolio records through their `category` column).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        ServiceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        ServiceId(id.to_string())
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        ServiceId(id)
    }
}

/// Identifier of a service sub-category (the `id` column of the
/// sub-categories table, referenced by portfolio records through
/// `sub_category_id`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubCategoryId(String);

impl SubCategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        SubCategoryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubCategoryId {
    fn from(id: &str) -> Self {
        SubCategoryId(id.to_string())
    }
}

impl From<String> for SubCategoryId {
    fn from(id: String) -> Self {
        SubCategoryId(id)
    }
}
