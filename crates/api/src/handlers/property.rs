//! Handlers for the `/properties` resource.

use axum::extract::{Path, Query, State};
use axum::Json;

use hacienda_core::types::PageParams;
use hacienda_db::models::property::{ChangePrice, CreateProperty, PropertyFilter, UpdateProperty};

use crate::ops::{PropertyCommand, PropertyData, PropertyQuery, PropertyResponse};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/properties
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProperty>,
) -> ApiResponse<PropertyResponse> {
    state
        .dispatcher
        .property_command(PropertyCommand::Create(input))
        .await
        .into()
}

/// GET /api/v1/properties (filter and pagination ride the query string)
pub async fn search(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
    Query(page): Query<PageParams>,
) -> ApiResponse<PropertyData> {
    state
        .dispatcher
        .property_query(PropertyQuery::Search { filter, page })
        .await
        .into()
}

/// GET /api/v1/properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<PropertyData> {
    state
        .dispatcher
        .property_query(PropertyQuery::ById { id })
        .await
        .into()
}

/// PUT /api/v1/properties (the update DTO carries its own id)
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateProperty>,
) -> ApiResponse<PropertyResponse> {
    state
        .dispatcher
        .property_command(PropertyCommand::Update(input))
        .await
        .into()
}

/// PATCH /api/v1/properties/price
pub async fn change_price(
    State(state): State<AppState>,
    Json(input): Json<ChangePrice>,
) -> ApiResponse<PropertyResponse> {
    state
        .dispatcher
        .property_command(PropertyCommand::ChangePrice(input))
        .await
        .into()
}

/// DELETE /api/v1/properties/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<PropertyResponse> {
    state
        .dispatcher
        .property_command(PropertyCommand::Delete { id })
        .await
        .into()
}
