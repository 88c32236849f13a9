use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::favorites::{
        AddFavoriteRequest, CollectionRecipeRequest, CreateEmbeddedCollectionRequest,
        EmbeddedCollectionList, FavoriteIds, FavoriteRecipeList,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::EmbeddedCollection,
    response::ApiResponse,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites).post(add_favorite))
        .route("/collections", get(list_collections).post(create_collection))
        .route("/collections/{id}", delete(delete_collection))
        .route("/collections/{id}/recipes", post(add_recipe_to_collection))
        .route(
            "/collections/{id}/recipes/{recipe_id}",
            delete(remove_recipe_from_collection),
        )
        .route("/{recipe_id}", delete(remove_favorite))
}

#[utoipa::path(
    get,
    path = "/api/favorites",
    responses(
        (status = 200, description = "List favorites", body = ApiResponse<FavoriteRecipeList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<FavoriteRecipeList>>> {
    let resp = favorite_service::list_favorites(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<FavoriteIds>),
        (status = 400, description = "Recipe already in favorites"),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddFavoriteRequest>,
) -> AppResult<Json<ApiResponse<FavoriteIds>>> {
    let resp = favorite_service::add_favorite(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/{recipe_id}",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = ApiResponse<FavoriteIds>)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Path(recipe_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<FavoriteIds>>> {
    let resp = favorite_service::remove_favorite(&state, &user, recipe_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/favorites/collections",
    responses(
        (status = 200, description = "Embedded collections with recipes", body = ApiResponse<EmbeddedCollectionList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<EmbeddedCollectionList>>> {
    let resp = favorite_service::list_collections(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/favorites/collections",
    request_body = CreateEmbeddedCollectionRequest,
    responses(
        (status = 200, description = "Collection created", body = ApiResponse<EmbeddedCollection>),
        (status = 400, description = "Name is required")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateEmbeddedCollectionRequest>,
) -> AppResult<Json<ApiResponse<EmbeddedCollection>>> {
    let resp = favorite_service::create_collection(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Embedded collection ID")
    ),
    responses(
        (status = 200, description = "Collection deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Collection not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = favorite_service::delete_collection(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/favorites/collections/{id}/recipes",
    params(
        ("id" = Uuid, Path, description = "Embedded collection ID")
    ),
    request_body = CollectionRecipeRequest,
    responses(
        (status = 200, description = "Recipe added", body = ApiResponse<EmbeddedCollection>),
        (status = 400, description = "Recipe already in collection"),
        (status = 404, description = "Collection or recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn add_recipe_to_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CollectionRecipeRequest>,
) -> AppResult<Json<ApiResponse<EmbeddedCollection>>> {
    let resp = favorite_service::add_recipe_to_collection(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/collections/{id}/recipes/{recipe_id}",
    params(
        ("id" = Uuid, Path, description = "Embedded collection ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe removed", body = ApiResponse<EmbeddedCollection>),
        (status = 404, description = "Collection not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Favorites"
)]
pub async fn remove_recipe_from_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, recipe_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<EmbeddedCollection>>> {
    let resp =
        favorite_service::remove_recipe_from_collection(&state, &user, id, recipe_id).await?;
    Ok(Json(resp))
}
