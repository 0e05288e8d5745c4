//! Owner storage: trait and MongoDB implementation.

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, to_bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use hacienda_core::types::PageParams;

use crate::error::StoreError;
use crate::models::owner::{Owner, UpdateOwner};

/// Storage seam for owner documents.
#[async_trait]
pub trait OwnerStore: Send + Sync {
    async fn insert(&self, owner: Owner) -> Result<Owner, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Owner>, StoreError>;

    /// Most recently created first.
    async fn list(&self, page: PageParams) -> Result<Vec<Owner>, StoreError>;

    /// Apply the update to an existing owner. Returns the updated
    /// document, or `None` if no owner has the given id.
    async fn update(&self, id: &str, update: &UpdateOwner) -> Result<Option<Owner>, StoreError>;

    /// Returns `true` if a document was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// MongoDB-backed owner store.
#[derive(Clone)]
pub struct MongoOwnerStore {
    collection: Collection<Owner>,
}

impl MongoOwnerStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(Owner::COLLECTION),
        }
    }
}

#[async_trait]
impl OwnerStore for MongoOwnerStore {
    async fn insert(&self, owner: Owner) -> Result<Owner, StoreError> {
        self.collection.insert_one(&owner).await?;
        Ok(owner)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Owner>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn list(&self, page: PageParams) -> Result<Vec<Owner>, StoreError> {
        let cursor = self
            .collection
            .find(Document::new())
            .sort(doc! { "created_at": -1 })
            .skip(page.offset() as u64)
            .limit(page.limit())
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update(&self, id: &str, update: &UpdateOwner) -> Result<Option<Owner>, StoreError> {
        let mut set = doc! {
            "name": update.name.as_str(),
            "address": update.address.as_str(),
            "photo": update.photo.as_str(),
            "updated_at": to_bson(&Utc::now())?,
        };
        if let Some(birthdate) = update.birthdate {
            set.insert("birthdate", to_bson(&birthdate)?);
        }
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
