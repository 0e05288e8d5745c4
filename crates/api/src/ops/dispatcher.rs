//! Explicit operation dispatch.
//!
//! The [`Dispatcher`] owns the storage handles and routes every command
//! and query variant to exactly one handler function. Expected business
//! outcomes travel in the [`OperationOutcome`] envelope; storage failures
//! are logged and classified as `Unexpected`.

use std::sync::Arc;

use serde_json::json;

use hacienda_core::error::CoreError;
use hacienda_core::outcome::OperationOutcome;
use hacienda_core::types::PageParams;
use hacienda_core::validation::rules::FieldViolation;
use hacienda_db::models::owner::{CreateOwner, Owner, UpdateOwner};
use hacienda_db::models::property::{
    ChangePrice, CreateProperty, Property, PropertyFilter, UpdateProperty,
};
use hacienda_db::repositories::{OwnerStore, PropertyStore};
use hacienda_db::StoreError;

use super::commands::{OwnerCommand, PropertyCommand};
use super::queries::{OwnerQuery, PropertyQuery};
use super::responses::{OwnerData, OwnerResponse, PropertyData, PropertyResponse};
use super::validate;

/// Map a storage failure into a domain error, logging driver errors.
fn storage(err: StoreError) -> CoreError {
    match err {
        StoreError::Duplicate { field, value } => CoreError::Conflict {
            field,
            message: format!("Duplicate value: {value}"),
        },
        other => {
            tracing::error!(error = %other, "Storage operation failed");
            CoreError::Internal(other.to_string())
        }
    }
}

/// Routes operations to their handlers. Cheaply cloneable.
#[derive(Clone)]
pub struct Dispatcher {
    owners: Arc<dyn OwnerStore>,
    properties: Arc<dyn PropertyStore>,
}

impl Dispatcher {
    pub fn new(owners: Arc<dyn OwnerStore>, properties: Arc<dyn PropertyStore>) -> Self {
        Self { owners, properties }
    }

    /// Execute a mutating owner operation.
    pub async fn owner_command(&self, command: OwnerCommand) -> OperationOutcome<OwnerResponse> {
        let result = match command {
            OwnerCommand::Create(input) => self.create_owner(input).await,
            OwnerCommand::Update(input) => self.update_owner(input).await,
            OwnerCommand::Delete { id } => self.delete_owner(id).await,
        };
        result.unwrap_or_else(OperationOutcome::from)
    }

    /// Execute an owner read operation.
    pub async fn owner_query(&self, query: OwnerQuery) -> OperationOutcome<OwnerData> {
        let result = match query {
            OwnerQuery::ById { id } => self.owner_by_id(id).await,
            OwnerQuery::List(page) => self.list_owners(page).await,
        };
        result.unwrap_or_else(OperationOutcome::from)
    }

    /// Execute a mutating property operation.
    pub async fn property_command(
        &self,
        command: PropertyCommand,
    ) -> OperationOutcome<PropertyResponse> {
        let result = match command {
            PropertyCommand::Create(input) => self.create_property(input).await,
            PropertyCommand::Update(input) => self.update_property(input).await,
            PropertyCommand::ChangePrice(input) => self.change_price(input).await,
            PropertyCommand::Delete { id } => self.delete_property(id).await,
        };
        result.unwrap_or_else(OperationOutcome::from)
    }

    /// Execute a property read operation.
    pub async fn property_query(&self, query: PropertyQuery) -> OperationOutcome<PropertyData> {
        let result = match query {
            PropertyQuery::ById { id } => self.property_by_id(id).await,
            PropertyQuery::Search { filter, page } => self.search_properties(filter, page).await,
        };
        result.unwrap_or_else(OperationOutcome::from)
    }

    // --- Owner handlers ---

    async fn create_owner(
        &self,
        input: CreateOwner,
    ) -> Result<OperationOutcome<OwnerResponse>, CoreError> {
        let report = validate::check(&validate::create_owner_rules(), &input);
        if !report.is_valid {
            return Ok(OperationOutcome::invalid(report.errors));
        }
        let owner = self.owners.insert(Owner::new(input)).await.map_err(storage)?;
        Ok(OperationOutcome::created(owner.into()))
    }

    async fn update_owner(
        &self,
        input: UpdateOwner,
    ) -> Result<OperationOutcome<OwnerResponse>, CoreError> {
        let report = validate::check(&validate::update_owner_rules(), &input);
        if !report.is_valid {
            return Ok(OperationOutcome::invalid(report.errors));
        }
        // Validated non-empty above.
        let id = input.id.clone().unwrap_or_default();
        match self.owners.update(&id, &input).await.map_err(storage)? {
            Some(owner) => Ok(OperationOutcome::ok(owner.into())),
            None => Err(CoreError::NotFound { entity: "Owner", id }),
        }
    }

    async fn delete_owner(&self, id: String) -> Result<OperationOutcome<OwnerResponse>, CoreError> {
        if self.owners.delete(&id).await.map_err(storage)? {
            Ok(OperationOutcome::ok_empty())
        } else {
            Err(CoreError::NotFound { entity: "Owner", id })
        }
    }

    async fn owner_by_id(&self, id: String) -> Result<OperationOutcome<OwnerData>, CoreError> {
        match self.owners.find_by_id(&id).await.map_err(storage)? {
            Some(owner) => Ok(OperationOutcome::ok(OwnerData::One(owner.into()))),
            None => Err(CoreError::NotFound { entity: "Owner", id }),
        }
    }

    async fn list_owners(&self, page: PageParams) -> Result<OperationOutcome<OwnerData>, CoreError> {
        let owners = self.owners.list(page).await.map_err(storage)?;
        Ok(OperationOutcome::ok(OwnerData::Many(
            owners.into_iter().map(Into::into).collect(),
        )))
    }

    // --- Property handlers ---

    async fn create_property(
        &self,
        input: CreateProperty,
    ) -> Result<OperationOutcome<PropertyResponse>, CoreError> {
        let report = validate::check(&validate::create_property_rules(), &input);
        if !report.is_valid {
            return Ok(OperationOutcome::invalid(report.errors));
        }
        // The referenced owner must exist.
        if self
            .owners
            .find_by_id(&input.owner_id)
            .await
            .map_err(storage)?
            .is_none()
        {
            return Ok(OperationOutcome::invalid(vec![FieldViolation {
                field: "owner_id".to_string(),
                rule_type: "exists".to_string(),
                message: format!("No owner with id {}", input.owner_id),
                value: Some(json!(input.owner_id)),
            }]));
        }
        if self
            .properties
            .find_by_code(&input.code_internal)
            .await
            .map_err(storage)?
            .is_some()
        {
            return Ok(OperationOutcome::invalid(vec![FieldViolation {
                field: "code_internal".to_string(),
                rule_type: "unique".to_string(),
                message: format!("CodeInternal {} is already in use", input.code_internal),
                value: Some(json!(input.code_internal)),
            }]));
        }
        let property = self
            .properties
            .insert(Property::new(input))
            .await
            .map_err(storage)?;
        Ok(OperationOutcome::created(property.into()))
    }

    async fn update_property(
        &self,
        input: UpdateProperty,
    ) -> Result<OperationOutcome<PropertyResponse>, CoreError> {
        let report = validate::check(&validate::update_property_rules(), &input);
        if !report.is_valid {
            return Ok(OperationOutcome::invalid(report.errors));
        }
        let id = input.id.clone().unwrap_or_default();
        match self.properties.update(&id, &input).await.map_err(storage)? {
            Some(property) => Ok(OperationOutcome::ok(property.into())),
            None => Err(CoreError::NotFound {
                entity: "Property",
                id,
            }),
        }
    }

    async fn change_price(
        &self,
        input: ChangePrice,
    ) -> Result<OperationOutcome<PropertyResponse>, CoreError> {
        let report = validate::check(&validate::change_price_rules(), &input);
        if !report.is_valid {
            return Ok(OperationOutcome::invalid(report.errors));
        }
        // Both validated present above.
        let id = input.id.clone().unwrap_or_default();
        let price = input.price.unwrap_or_default();
        match self.properties.set_price(&id, price).await.map_err(storage)? {
            Some(property) => Ok(OperationOutcome::ok(property.into())),
            None => Err(CoreError::NotFound {
                entity: "Property",
                id,
            }),
        }
    }

    async fn delete_property(
        &self,
        id: String,
    ) -> Result<OperationOutcome<PropertyResponse>, CoreError> {
        if self.properties.delete(&id).await.map_err(storage)? {
            Ok(OperationOutcome::ok_empty())
        } else {
            Err(CoreError::NotFound {
                entity: "Property",
                id,
            })
        }
    }

    async fn property_by_id(
        &self,
        id: String,
    ) -> Result<OperationOutcome<PropertyData>, CoreError> {
        match self.properties.find_by_id(&id).await.map_err(storage)? {
            Some(property) => Ok(OperationOutcome::ok(PropertyData::One(property.into()))),
            None => Err(CoreError::NotFound {
                entity: "Property",
                id,
            }),
        }
    }

    async fn search_properties(
        &self,
        filter: PropertyFilter,
        page: PageParams,
    ) -> Result<OperationOutcome<PropertyData>, CoreError> {
        let mut report = validate::check(&validate::property_filter_rules(), &filter);
        if let Some(violation) = validate::check_price_range(&filter) {
            report.errors.push(violation);
            report.is_valid = false;
        }
        if !report.is_valid {
            return Ok(OperationOutcome::invalid(report.errors));
        }

        let found = self.properties.search(&filter, page).await.map_err(storage)?;
        let total = self.properties.count(&filter).await.map_err(storage)?;
        let truncated = page.offset() + (found.len() as i64) < total as i64;

        let data = PropertyData::Many(found.into_iter().map(Into::into).collect());
        if truncated {
            Ok(OperationOutcome::partial(data))
        } else {
            Ok(OperationOutcome::ok(data))
        }
    }
}
