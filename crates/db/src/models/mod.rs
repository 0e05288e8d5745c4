//! Document models and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize`/`Deserialize` document struct matching the stored shape
//! - A create DTO for inserts
//! - An update DTO for patches

pub mod owner;
pub mod property;
