use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::recipes::{AddReviewRequest, CreateRecipeRequest, RecipeList, UpdateRecipeRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Recipe,
    response::ApiResponse,
    routes::params::RecipeQuery,
    services::recipe_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route("/random", get(random_recipe))
        .route("/mine", get(list_my_recipes))
        .route(
            "/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/{id}/reviews", post(add_review))
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("search" = Option<String>, Query, description = "Text matched against title and tags"),
        ("tags" = Option<String>, Query, description = "Comma-separated tags, any of"),
        ("cuisine" = Option<String>, Query, description = "Comma-separated cuisines, any of"),
        ("season" = Option<String>, Query, description = "Season"),
        ("mood" = Option<String>, Query, description = "Comma-separated moods, any of"),
        ("sort" = Option<String>, Query, description = "rating, time or createdAt")
    ),
    responses(
        (status = 200, description = "List recipes", body = ApiResponse<RecipeList>)
    ),
    tag = "Recipes"
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<RecipeQuery>,
) -> AppResult<Json<ApiResponse<RecipeList>>> {
    let resp = recipe_service::list_recipes(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/recipes/random",
    responses(
        (status = 200, description = "Random recipe", body = ApiResponse<Recipe>),
        (status = 404, description = "No recipes")
    ),
    tag = "Recipes"
)]
pub async fn random_recipe(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Recipe>>> {
    let resp = recipe_service::random_recipe(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/recipes/mine",
    responses(
        (status = 200, description = "Recipes created by the caller", body = ApiResponse<RecipeList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Recipes"
)]
pub async fn list_my_recipes(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<RecipeList>>> {
    let resp = recipe_service::list_my_recipes(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Get recipe", body = ApiResponse<Recipe>),
        (status = 404, description = "Recipe not found")
    ),
    tag = "Recipes"
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Recipe>>> {
    let resp = recipe_service::get_recipe(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 200, description = "Create recipe", body = ApiResponse<Recipe>),
        (status = 400, description = "Invalid input")
    ),
    security(("bearer_auth" = [])),
    tag = "Recipes"
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateRecipeRequest>,
) -> AppResult<Json<ApiResponse<Recipe>>> {
    let resp = recipe_service::create_recipe(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Update recipe", body = ApiResponse<Recipe>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Recipes"
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRecipeRequest>,
) -> AppResult<Json<ApiResponse<Recipe>>> {
    let resp = recipe_service::update_recipe(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Recipes"
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = recipe_service::delete_recipe(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/reviews",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = AddReviewRequest,
    responses(
        (status = 200, description = "Review added", body = ApiResponse<Recipe>),
        (status = 400, description = "Empty review"),
        (status = 404, description = "Recipe not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Recipes"
)]
pub async fn add_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddReviewRequest>,
) -> AppResult<Json<ApiResponse<Recipe>>> {
    let resp = recipe_service::add_review(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
