//! Document-store layer: connection helpers, document models, and
//! repositories behind storage traits.

pub mod error;
pub mod models;
pub mod repositories;

use mongodb::bson::doc;
use mongodb::{Client, Database};

pub use error::StoreError;

/// Connect to MongoDB and select the named database.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, StoreError> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(db_name))
}

/// Round-trip a `ping` command to verify the server is reachable.
pub async fn health_check(db: &Database) -> Result<(), StoreError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Which backend the process is running against.
///
/// Health reporting only; request handling goes through the store traits.
#[derive(Clone)]
pub enum StorageBackend {
    Mongo(Database),
    Memory,
}

impl StorageBackend {
    pub async fn health_check(&self) -> Result<(), StoreError> {
        match self {
            StorageBackend::Mongo(db) => health_check(db).await,
            StorageBackend::Memory => Ok(()),
        }
    }
}
