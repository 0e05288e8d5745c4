//! Property storage: trait, MongoDB implementation, and the pure filter
//! translation.

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, to_bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use hacienda_core::types::PageParams;

use crate::error::StoreError;
use crate::models::property::{Property, PropertyFilter, UpdateProperty};

/// Storage seam for property documents.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn insert(&self, property: Property) -> Result<Property, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, StoreError>;

    /// Lookup by the unique internal listing code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Property>, StoreError>;

    /// Filtered page, most recently created first.
    async fn search(
        &self,
        filter: &PropertyFilter,
        page: PageParams,
    ) -> Result<Vec<Property>, StoreError>;

    /// Total number of documents matching the filter, ignoring pagination.
    async fn count(&self, filter: &PropertyFilter) -> Result<u64, StoreError>;

    /// Apply the update to an existing property. Returns the updated
    /// document, or `None` if no property has the given id.
    async fn update(
        &self,
        id: &str,
        update: &UpdateProperty,
    ) -> Result<Option<Property>, StoreError>;

    /// Overwrite the price of an existing property.
    async fn set_price(&self, id: &str, price: f64) -> Result<Option<Property>, StoreError>;

    /// Returns `true` if a document was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// Translate a search filter into a BSON filter document.
///
/// Name and address match as case-insensitive substrings; price bounds
/// become a `$gte`/`$lte` range. Empty strings are treated as absent.
pub fn filter_document(filter: &PropertyFilter) -> Document {
    let mut document = Document::new();
    if let Some(name) = filter.name.as_deref().filter(|s| !s.is_empty()) {
        document.insert("name", doc! { "$regex": regex::escape(name), "$options": "i" });
    }
    if let Some(address) = filter.address.as_deref().filter(|s| !s.is_empty()) {
        document.insert(
            "address",
            doc! { "$regex": regex::escape(address), "$options": "i" },
        );
    }
    let mut price = Document::new();
    if let Some(min) = filter.min_price {
        price.insert("$gte", min);
    }
    if let Some(max) = filter.max_price {
        price.insert("$lte", max);
    }
    if !price.is_empty() {
        document.insert("price", price);
    }
    document
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == 11000
    )
}

/// MongoDB-backed property store.
#[derive(Clone)]
pub struct MongoPropertyStore {
    collection: Collection<Property>,
}

impl MongoPropertyStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(Property::COLLECTION),
        }
    }
}

#[async_trait]
impl PropertyStore for MongoPropertyStore {
    async fn insert(&self, property: Property) -> Result<Property, StoreError> {
        match self.collection.insert_one(&property).await {
            Ok(_) => Ok(property),
            Err(err) if is_duplicate_key(&err) => Err(StoreError::Duplicate {
                field: "code_internal",
                value: property.code_internal.clone(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Property>, StoreError> {
        Ok(self
            .collection
            .find_one(doc! { "code_internal": code })
            .await?)
    }

    async fn search(
        &self,
        filter: &PropertyFilter,
        page: PageParams,
    ) -> Result<Vec<Property>, StoreError> {
        let cursor = self
            .collection
            .find(filter_document(filter))
            .sort(doc! { "created_at": -1 })
            .skip(page.offset() as u64)
            .limit(page.limit())
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: &PropertyFilter) -> Result<u64, StoreError> {
        Ok(self
            .collection
            .count_documents(filter_document(filter))
            .await?)
    }

    async fn update(
        &self,
        id: &str,
        update: &UpdateProperty,
    ) -> Result<Option<Property>, StoreError> {
        let mut set = doc! { "updated_at": to_bson(&Utc::now())? };
        if let Some(owner_id) = update.owner_id.as_deref() {
            set.insert("owner_id", owner_id);
        }
        if let Some(name) = update.name.as_deref() {
            set.insert("name", name);
        }
        if let Some(address) = update.address.as_deref() {
            set.insert("address", address);
        }
        if let Some(year) = update.year {
            set.insert("year", year);
        }
        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn set_price(&self, id: &str, price: f64) -> Result<Option<Property>, StoreError> {
        let set = doc! { "price": price, "updated_at": to_bson(&Utc::now())? };
        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
