//! Newtype identifiers used throughout the workspace.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a row within one dataset provider's scope.
///
/// Ids are never reused after deletion within a session; equality on
/// `RowId` is the identity test the pipeline properties are stated over.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Name of a field within a view schema.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

// Lets `BTreeMap<FieldName, _>` be queried with a plain `&str`.
impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn field_name_borrows_as_str() {
        let mut map = BTreeMap::new();
        map.insert(FieldName::from("balance"), 1);
        assert_eq!(map.get("balance"), Some(&1));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn row_id_display_round_trips() {
        let id = RowId::new("ACC-001");
        assert_eq!(id.to_string(), "ACC-001");
        assert_eq!(id.as_str(), "ACC-001");
    }
}
