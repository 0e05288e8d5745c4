//! In-memory store implementations.
//!
//! Back the same traits as the MongoDB stores with locked hash maps, for
//! integration tests and driver-free local runs. Matching semantics
//! mirror the BSON filters: case-insensitive substring match on name and
//! address, inclusive price bounds.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use hacienda_core::types::{EntityId, PageParams, Timestamp};

use crate::error::StoreError;
use crate::models::owner::{Owner, UpdateOwner};
use crate::models::property::{Property, PropertyFilter, UpdateProperty};
use crate::repositories::{OwnerStore, PropertyStore};

#[derive(Default)]
pub struct InMemoryOwnerStore {
    owners: Mutex<HashMap<String, Owner>>,
}

impl InMemoryOwnerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first, with the id as a tie-breaker so ordering is stable.
fn sorted_page<T>(
    mut items: Vec<T>,
    page: PageParams,
    created_at: impl Fn(&T) -> Timestamp,
    id: impl Fn(&T) -> String,
) -> Vec<T> {
    items.sort_by(|a, b| {
        created_at(b)
            .cmp(&created_at(a))
            .then_with(|| id(a).cmp(&id(b)))
    });
    items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

#[async_trait]
impl OwnerStore for InMemoryOwnerStore {
    async fn insert(&self, owner: Owner) -> Result<Owner, StoreError> {
        let mut owners = self
            .owners
            .lock()
            .map_err(|_| StoreError::Poisoned("owner insert"))?;
        owners.insert(owner.id.as_str().to_string(), owner.clone());
        Ok(owner)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Owner>, StoreError> {
        let owners = self
            .owners
            .lock()
            .map_err(|_| StoreError::Poisoned("owner lookup"))?;
        Ok(owners.get(id).cloned())
    }

    async fn list(&self, page: PageParams) -> Result<Vec<Owner>, StoreError> {
        let owners = self
            .owners
            .lock()
            .map_err(|_| StoreError::Poisoned("owner list"))?;
        Ok(sorted_page(
            owners.values().cloned().collect(),
            page,
            |o| o.created_at,
            |o| o.id.as_str().to_string(),
        ))
    }

    async fn update(&self, id: &str, update: &UpdateOwner) -> Result<Option<Owner>, StoreError> {
        let mut owners = self
            .owners
            .lock()
            .map_err(|_| StoreError::Poisoned("owner update"))?;
        let Some(owner) = owners.get_mut(id) else {
            return Ok(None);
        };
        owner.name = update.name.clone();
        owner.address = update.address.clone();
        owner.photo = update.photo.clone();
        if let Some(birthdate) = update.birthdate {
            owner.birthdate = birthdate;
        }
        owner.updated_at = Utc::now();
        Ok(Some(owner.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut owners = self
            .owners
            .lock()
            .map_err(|_| StoreError::Poisoned("owner delete"))?;
        Ok(owners.remove(id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryPropertyStore {
    properties: Mutex<HashMap<String, Property>>,
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(property: &Property, filter: &PropertyFilter) -> bool {
    if let Some(name) = filter.name.as_deref().filter(|s| !s.is_empty()) {
        if !property.name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }
    if let Some(address) = filter.address.as_deref().filter(|s| !s.is_empty()) {
        if !property
            .address
            .to_lowercase()
            .contains(&address.to_lowercase())
        {
            return false;
        }
    }
    if let Some(min) = filter.min_price {
        if property.price < min {
            return false;
        }
    }
    if let Some(max) = filter.max_price {
        if property.price > max {
            return false;
        }
    }
    true
}

#[async_trait]
impl PropertyStore for InMemoryPropertyStore {
    async fn insert(&self, property: Property) -> Result<Property, StoreError> {
        let mut properties = self
            .properties
            .lock()
            .map_err(|_| StoreError::Poisoned("property insert"))?;
        if properties
            .values()
            .any(|p| p.code_internal == property.code_internal)
        {
            return Err(StoreError::Duplicate {
                field: "code_internal",
                value: property.code_internal.clone(),
            });
        }
        properties.insert(property.id.as_str().to_string(), property.clone());
        Ok(property)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, StoreError> {
        let properties = self
            .properties
            .lock()
            .map_err(|_| StoreError::Poisoned("property lookup"))?;
        Ok(properties.get(id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Property>, StoreError> {
        let properties = self
            .properties
            .lock()
            .map_err(|_| StoreError::Poisoned("property code lookup"))?;
        Ok(properties
            .values()
            .find(|p| p.code_internal == code)
            .cloned())
    }

    async fn search(
        &self,
        filter: &PropertyFilter,
        page: PageParams,
    ) -> Result<Vec<Property>, StoreError> {
        let properties = self
            .properties
            .lock()
            .map_err(|_| StoreError::Poisoned("property search"))?;
        Ok(sorted_page(
            properties
                .values()
                .filter(|p| matches_filter(p, filter))
                .cloned()
                .collect(),
            page,
            |p| p.created_at,
            |p| p.id.as_str().to_string(),
        ))
    }

    async fn count(&self, filter: &PropertyFilter) -> Result<u64, StoreError> {
        let properties = self
            .properties
            .lock()
            .map_err(|_| StoreError::Poisoned("property count"))?;
        Ok(properties
            .values()
            .filter(|p| matches_filter(p, filter))
            .count() as u64)
    }

    async fn update(
        &self,
        id: &str,
        update: &UpdateProperty,
    ) -> Result<Option<Property>, StoreError> {
        let mut properties = self
            .properties
            .lock()
            .map_err(|_| StoreError::Poisoned("property update"))?;
        let Some(property) = properties.get_mut(id) else {
            return Ok(None);
        };
        if let Some(owner_id) = update.owner_id.as_deref() {
            property.owner_id = EntityId::from_string(owner_id);
        }
        if let Some(name) = update.name.as_deref() {
            property.name = name.to_string();
        }
        if let Some(address) = update.address.as_deref() {
            property.address = address.to_string();
        }
        if let Some(year) = update.year {
            property.year = year;
        }
        property.updated_at = Utc::now();
        Ok(Some(property.clone()))
    }

    async fn set_price(&self, id: &str, price: f64) -> Result<Option<Property>, StoreError> {
        let mut properties = self
            .properties
            .lock()
            .map_err(|_| StoreError::Poisoned("property price change"))?;
        let Some(property) = properties.get_mut(id) else {
            return Ok(None);
        };
        property.price = price;
        property.updated_at = Utc::now();
        Ok(Some(property.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut properties = self
            .properties
            .lock()
            .map_err(|_| StoreError::Poisoned("property delete"))?;
        Ok(properties.remove(id).is_some())
    }
}
