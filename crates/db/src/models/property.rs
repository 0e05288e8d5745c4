//! Property document model, DTOs, and the search filter.

use chrono::Utc;
use hacienda_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// A property document from the `properties` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub owner_id: EntityId,
    pub name: String,
    pub address: String,
    pub price: f64,
    /// Internal listing reference, unique per deployment.
    pub code_internal: String,
    pub year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Property {
    pub const COLLECTION: &'static str = "properties";

    /// Build a new property from a create request. The identifier is
    /// assigned here, exactly once.
    pub fn new(input: CreateProperty) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            owner_id: EntityId::from_string(input.owner_id),
            name: input.name,
            address: input.address,
            price: input.price,
            code_internal: input.code_internal,
            year: input.year,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for creating a new property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProperty {
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub code_internal: String,
    pub year: i32,
}

/// DTO for updating an existing property. All fields except `id` are
/// optional; only the provided ones are applied. Price changes go through
/// [`ChangePrice`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProperty {
    pub id: Option<String>,
    pub owner_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub year: Option<i32>,
}

/// DTO for the dedicated price-change command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePrice {
    pub id: Option<String>,
    pub price: Option<f64>,
}

/// Search filter for properties. All bounds optional; pagination rides
/// alongside as separate query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
