//! Response DTOs.
//!
//! Flat shapes returned to clients, constructed from stored documents
//! rather than serializing the database types directly.

use chrono::NaiveDate;
use serde::Serialize;

use hacienda_db::models::owner::Owner;
use hacienda_db::models::property::Property;

/// Owner as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthdate: NaiveDate,
}

impl From<Owner> for OwnerResponse {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id.into(),
            name: owner.name,
            address: owner.address,
            photo: owner.photo,
            birthdate: owner.birthdate,
        }
    }
}

/// Property as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub code_internal: String,
    pub year: i32,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            id: property.id.into(),
            owner_id: property.owner_id.into(),
            name: property.name,
            address: property.address,
            price: property.price,
            code_internal: property.code_internal,
            year: property.year,
        }
    }
}

/// Payload of an owner query: a single owner or a page of owners.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OwnerData {
    One(OwnerResponse),
    Many(Vec<OwnerResponse>),
}

/// Payload of a property query: a single property or a page of matches.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PropertyData {
    One(PropertyResponse),
    Many(Vec<PropertyResponse>),
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use hacienda_core::types::EntityId;

    use super::*;

    #[test]
    fn owner_response_preserves_document_fields() {
        let now = Utc::now();
        let owner = Owner {
            id: EntityId::from_string("owner-42"),
            name: "Fernando Botero".to_string(),
            address: "Cl 11 # 5-42, Medellín".to_string(),
            photo: "https://example.com/botero.jpg".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1932, 4, 19).unwrap(),
            created_at: now,
            updated_at: now,
        };

        let response = OwnerResponse::from(owner.clone());
        assert_eq!(response.id, "owner-42");
        assert_eq!(response.name, owner.name);
        assert_eq!(response.address, owner.address);
        assert_eq!(response.birthdate, owner.birthdate);
    }

    #[test]
    fn owner_data_serializes_without_variant_tag() {
        let response = OwnerResponse {
            id: "o-1".to_string(),
            name: "N".to_string(),
            address: "A".to_string(),
            photo: "https://example.com/p.jpg".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        };
        let json = serde_json::to_value(OwnerData::Many(vec![response])).unwrap();
        assert!(json.is_array());
    }
}
