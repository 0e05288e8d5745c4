//! Owner document model and DTOs.

use chrono::{NaiveDate, Utc};
use hacienda_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// An owner document from the `owners` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthdate: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owner {
    pub const COLLECTION: &'static str = "owners";

    /// Build a new owner from a create request. The identifier is assigned
    /// here, exactly once.
    pub fn new(input: CreateOwner) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            name: input.name,
            address: input.address,
            photo: input.photo,
            birthdate: input.birthdate,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a new owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOwner {
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthdate: NaiveDate,
}

/// DTO for updating an existing owner.
///
/// `name`, `address` and `photo` are required by the shape; `id` presence
/// is a validation rule, so a missing id produces a field violation
/// instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOwner {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthdate: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateOwner {
        CreateOwner {
            name: "Amparo Grisales".to_string(),
            address: "Cra 7 # 71-21, Bogotá".to_string(),
            photo: "https://example.com/amparo.jpg".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1956, 9, 19).unwrap(),
        }
    }

    #[test]
    fn new_assigns_a_non_empty_id() {
        let owner = Owner::new(create_input());
        assert!(!owner.id.as_str().is_empty());
    }

    #[test]
    fn new_assigns_distinct_ids() {
        let a = Owner::new(create_input());
        let b = Owner::new(create_input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_preserves_input_fields() {
        let owner = Owner::new(create_input());
        assert_eq!(owner.name, "Amparo Grisales");
        assert_eq!(owner.birthdate, NaiveDate::from_ymd_opt(1956, 9, 19).unwrap());
        assert_eq!(owner.created_at, owner.updated_at);
    }

    #[test]
    fn document_id_serializes_under_underscore_id() {
        let owner = Owner::new(create_input());
        let json = serde_json::to_value(&owner).unwrap();
        assert_eq!(json["_id"], serde_json::json!(owner.id.as_str()));
    }
}
