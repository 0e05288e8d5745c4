//! Handlers for the `/owners` resource.

use axum::extract::{Path, Query, State};
use axum::Json;

use hacienda_core::types::PageParams;
use hacienda_db::models::owner::{CreateOwner, UpdateOwner};

use crate::ops::{OwnerCommand, OwnerData, OwnerQuery, OwnerResponse};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/owners
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOwner>,
) -> ApiResponse<OwnerResponse> {
    state
        .dispatcher
        .owner_command(OwnerCommand::Create(input))
        .await
        .into()
}

/// GET /api/v1/owners
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> ApiResponse<OwnerData> {
    state
        .dispatcher
        .owner_query(OwnerQuery::List(page))
        .await
        .into()
}

/// GET /api/v1/owners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<OwnerData> {
    state
        .dispatcher
        .owner_query(OwnerQuery::ById { id })
        .await
        .into()
}

/// PUT /api/v1/owners (the update DTO carries its own id)
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateOwner>,
) -> ApiResponse<OwnerResponse> {
    state
        .dispatcher
        .owner_command(OwnerCommand::Update(input))
        .await
        .into()
}

/// DELETE /api/v1/owners/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<OwnerResponse> {
    state
        .dispatcher
        .owner_command(OwnerCommand::Delete { id })
        .await
        .into()
}
