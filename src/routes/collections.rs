use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        collections::{
            CollectionDetail, CollectionList, CreateCollectionRequest, UpdateCollectionRequest,
        },
        favorites::CollectionRecipeRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Collection,
    response::ApiResponse,
    services::collection_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_mine).post(create_collection))
        .route("/public", get(list_public))
        .route(
            "/{id}",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
        .route("/{id}/recipes", post(add_recipe))
        .route("/{id}/recipes/{recipe_id}", delete(remove_recipe))
}

#[utoipa::path(
    get,
    path = "/api/collections",
    responses(
        (status = 200, description = "Caller's collections, recently updated first", body = ApiResponse<CollectionList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Collections"
)]
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<CollectionList>>> {
    let resp = collection_service::list_mine(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/collections/public",
    responses(
        (status = 200, description = "Newest public collections", body = ApiResponse<CollectionList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Collections"
)]
pub async fn list_public(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<CollectionList>>> {
    let resp = collection_service::list_public(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 200, description = "Collection created", body = ApiResponse<Collection>),
        (status = 400, description = "Name is required")
    ),
    security(("bearer_auth" = [])),
    tag = "Collections"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCollectionRequest>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = collection_service::create_collection(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Collection with recipe details", body = ApiResponse<CollectionDetail>),
        (status = 403, description = "Private collection"),
        (status = 404, description = "Collection not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Collections"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CollectionDetail>>> {
    let resp = collection_service::get_collection(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    request_body = UpdateCollectionRequest,
    responses(
        (status = 200, description = "Collection updated", body = ApiResponse<Collection>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Collection not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Collections"
)]
pub async fn update_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCollectionRequest>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = collection_service::update_collection(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    responses(
        (status = 200, description = "Collection deleted", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Collection not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Collections"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = collection_service::delete_collection(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/collections/{id}/recipes",
    params(
        ("id" = Uuid, Path, description = "Collection ID")
    ),
    request_body = CollectionRecipeRequest,
    responses(
        (status = 200, description = "Recipe added", body = ApiResponse<Collection>),
        (status = 400, description = "Recipe already in collection"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Collection or recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Collections"
)]
pub async fn add_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CollectionRecipeRequest>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = collection_service::add_recipe(&state, &user, id, payload.recipe_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/collections/{id}/recipes/{recipe_id}",
    params(
        ("id" = Uuid, Path, description = "Collection ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe removed", body = ApiResponse<Collection>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Collection not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Collections"
)]
pub async fn remove_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, recipe_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<Collection>>> {
    let resp = collection_service::remove_recipe(&state, &user, id, recipe_id).await?;
    Ok(Json(resp))
}
