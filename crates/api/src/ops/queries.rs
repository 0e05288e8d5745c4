//! Query objects for the owner and property aggregates.

use hacienda_core::types::PageParams;
use hacienda_db::models::property::PropertyFilter;

/// Read operations on owners.
#[derive(Debug, Clone)]
pub enum OwnerQuery {
    ById { id: String },
    List(PageParams),
}

/// Read operations on properties.
#[derive(Debug, Clone)]
pub enum PropertyQuery {
    ById { id: String },
    Search {
        filter: PropertyFilter,
        page: PageParams,
    },
}
