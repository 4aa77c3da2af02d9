use serde::{Deserialize, Serialize};

/// Search criteria for a contact query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    /// Case-insensitive substring to search for. Empty means no filtering.
    pub filter: String,
    /// Return every match instead of only the first.
    pub multiple: bool,
}

impl FindOptions {
    pub fn new(filter: impl Into<String>, multiple: bool) -> Self {
        Self {
            filter: filter.into(),
            multiple,
        }
    }

    /// Match everything, returning all results.
    pub fn all() -> Self {
        Self::new("", true)
    }

    /// The filter string, or `None` when empty.
    pub fn filter(&self) -> Option<&str> {
        Some(self.filter.as_str()).filter(|f| !f.is_empty())
    }
}
