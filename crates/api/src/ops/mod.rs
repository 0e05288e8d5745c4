//! Command and query dispatch.
//!
//! Operations are tagged unions per aggregate; the [`Dispatcher`] routes
//! each variant to exactly one handler function. Per-operation pipeline:
//! validate the payload, execute against the store, classify the result
//! into the outcome envelope.

pub mod commands;
pub mod dispatcher;
pub mod queries;
pub mod responses;
pub mod validate;

pub use commands::{OwnerCommand, PropertyCommand};
pub use dispatcher::Dispatcher;
pub use queries::{OwnerQuery, PropertyQuery};
pub use responses::{OwnerData, OwnerResponse, PropertyData, PropertyResponse};
