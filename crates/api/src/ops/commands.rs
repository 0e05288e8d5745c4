//! Command objects for the owner and property aggregates.

use hacienda_db::models::owner::{CreateOwner, UpdateOwner};
use hacienda_db::models::property::{ChangePrice, CreateProperty, UpdateProperty};

/// Mutating operations on owners.
#[derive(Debug, Clone)]
pub enum OwnerCommand {
    Create(CreateOwner),
    Update(UpdateOwner),
    Delete { id: String },
}

/// Mutating operations on properties.
#[derive(Debug, Clone)]
pub enum PropertyCommand {
    Create(CreateProperty),
    Update(UpdateProperty),
    ChangePrice(ChangePrice),
    Delete { id: String },
}
