pub mod health;
pub mod owner;
pub mod property;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /owners                    list, create, update
/// /owners/{id}               get, delete
///
/// /properties                search, create, update
/// /properties/price          change price (PATCH)
/// /properties/{id}           get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/owners", owner::router())
        .nest("/properties", property::router())
}
