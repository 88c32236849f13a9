use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dashboard::DashboardStats,
    dto::dashboard::{ActivityList, BucketCounts, MealPlanList, MealPlanView, SaveMealPlanRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::MealPlanEntry,
    response::ApiResponse,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/recipe-types", get(recipe_types))
        .route("/favorites-by-category", get(favorites_by_category))
        .route("/recent-activity", get(recent_activity))
        .route("/meal-plan", get(meal_plan).post(save_meal_plan))
        .route("/meal-plans", get(meal_plans))
        .route("/meal-plans/{id}", delete(delete_meal_plan))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Dashboard counters", body = ApiResponse<DashboardStats>)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let resp = dashboard_service::stats(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/recipe-types",
    responses(
        (status = 200, description = "Recipe counts per meal type", body = ApiResponse<BucketCounts>)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn recipe_types(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<BucketCounts>>> {
    let resp = dashboard_service::recipe_types(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/favorites-by-category",
    responses(
        (status = 200, description = "Favorite counts per category", body = ApiResponse<BucketCounts>)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn favorites_by_category(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<BucketCounts>>> {
    let resp = dashboard_service::favorites_by_category(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/recent-activity",
    responses(
        (status = 200, description = "Latest created and favorited recipes", body = ApiResponse<ActivityList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn recent_activity(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<ActivityList>>> {
    let resp = dashboard_service::recent_activity(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/meal-plan",
    responses(
        (status = 200, description = "Latest saved or generated weekly plan", body = ApiResponse<MealPlanView>)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn meal_plan(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<MealPlanView>>> {
    let resp = dashboard_service::meal_plan(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/dashboard/meal-plan",
    request_body = SaveMealPlanRequest,
    responses(
        (status = 200, description = "Meal plan saved", body = ApiResponse<MealPlanEntry>)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn save_meal_plan(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SaveMealPlanRequest>,
) -> AppResult<Json<ApiResponse<MealPlanEntry>>> {
    let resp = dashboard_service::save_meal_plan(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/meal-plans",
    responses(
        (status = 200, description = "All saved meal plans", body = ApiResponse<MealPlanList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn meal_plans(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<MealPlanList>>> {
    let resp = dashboard_service::meal_plans(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/dashboard/meal-plans/{id}",
    params(
        ("id" = Uuid, Path, description = "Meal plan ID")
    ),
    responses(
        (status = 200, description = "Meal plan deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Meal plan not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn delete_meal_plan(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = dashboard_service::delete_meal_plan(&state, &user, id).await?;
    Ok(Json(resp))
}
