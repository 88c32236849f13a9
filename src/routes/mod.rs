use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod collections;
pub mod dashboard;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod params;
pub mod recipes;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/recipes", recipes::router())
        .nest("/favorites", favorites::router())
        .nest("/collections", collections::router())
        .nest("/dashboard", dashboard::router())
        .nest("/orders", orders::router())
        .nest("/notifications", notifications::router())
}
