//! Repository layer.
//!
//! Storage traits with a MongoDB implementation and an in-memory
//! implementation. Everything above this layer depends on the traits
//! only.

pub mod memory;
pub mod owner_repo;
pub mod property_repo;

pub use memory::{InMemoryOwnerStore, InMemoryPropertyStore};
pub use owner_repo::{MongoOwnerStore, OwnerStore};
pub use property_repo::{MongoPropertyStore, PropertyStore};
