use std::fmt;

use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier of a persisted document.
///
/// A UUIDv4 in string form, assigned exactly once when the document is
/// constructed. Serializes transparently as a plain string, which is also
/// how it is stored in the `_id` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an identifier received from a client or another record.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Raw values arrive straight from the query string; the clamped accessors
/// are the only thing the storage layer ever sees.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageParams {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 200;

    /// Page size, clamped to `1..=MAX_LIMIT`.
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    /// Number of records to skip, never negative.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn entity_ids_are_non_empty() {
        assert!(!EntityId::new().as_str().is_empty());
    }

    #[test]
    fn entity_ids_are_unique() {
        let ids: HashSet<String> = (0..100).map(|_| EntityId::new().into()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn entity_id_serializes_as_plain_string() {
        let id = EntityId::from_string("abc-123");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("abc-123"));
    }

    #[test]
    fn page_params_default_limit() {
        let page = PageParams::default();
        assert_eq!(page.limit(), PageParams::DEFAULT_LIMIT);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn page_params_clamp_out_of_range_values() {
        let page = PageParams {
            limit: Some(10_000),
            offset: Some(-5),
        };
        assert_eq!(page.limit(), PageParams::MAX_LIMIT);
        assert_eq!(page.offset(), 0);

        let page = PageParams {
            limit: Some(0),
            offset: None,
        };
        assert_eq!(page.limit(), 1);
    }
}
