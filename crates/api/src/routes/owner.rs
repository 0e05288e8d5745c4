//! Route definitions for the `/owners` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::owner;
use crate::state::AppState;

/// Routes mounted at `/owners`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /        -> update (UpdateOwner carries its own id)
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(owner::list).post(owner::create).put(owner::update),
        )
        .route("/{id}", get(owner::get_by_id).delete(owner::delete))
}
