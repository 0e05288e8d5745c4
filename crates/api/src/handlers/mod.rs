//! Request handlers, one module per resource.

pub mod owner;
pub mod property;
