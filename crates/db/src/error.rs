/// Failures surfaced by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A value collided with an existing document on a unique field.
    #[error("duplicate value for {field}: {value}")]
    Duplicate {
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// An in-memory store lock was poisoned by a panicking writer.
    #[error("store lock poisoned during {0}")]
    Poisoned(&'static str),
}
