//! Route definitions for the `/properties` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET    /         -> search (filter + pagination)
/// POST   /         -> create
/// PUT    /         -> update (UpdateProperty carries its own id)
/// PATCH  /price    -> change_price
/// GET    /{id}     -> get_by_id
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(property::search)
                .post(property::create)
                .put(property::update),
        )
        .route("/price", patch(property::change_price))
        .route("/{id}", get(property::get_by_id).delete(property::delete))
}
