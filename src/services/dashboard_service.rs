use chrono::Utc;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dashboard::{
        self, DashboardStats, MEAL_SLOTS_PER_WEEK, MealPlanUpsert, RECENT_CREATED_LIMIT,
        RECENT_FAVORITES_LIMIT,
    },
    dto::dashboard::{ActivityList, BucketCounts, MealPlanList, MealPlanView, SaveMealPlanRequest},
    entity::{
        orders::{Column as OrderCol, Entity as Orders},
        recipes::{Column as RecipeCol, Entity as Recipes},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{MealPlanEntry, Recipe, User},
    response::{ApiResponse, Meta},
    services::{
        recipe_service::{default_order, fetch_recipes_in_order},
        user_service::{find_user, lock_user, save_user_documents},
    },
    state::AppState,
};

async fn all_recipes(state: &AppState) -> AppResult<Vec<Recipe>> {
    Ok(Recipes::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Recipe::from)
        .collect())
}

pub async fn stats(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<DashboardStats>> {
    let doc = User::from(find_user(&state.orm, user.user_id).await?);
    let recipes = all_recipes(state).await?;
    let order_count = Orders::find()
        .filter(OrderCol::UserId.eq(user.user_id))
        .count(&state.orm)
        .await?;

    let stats = dashboard::compute_stats(
        &recipes,
        doc.favorites.len() as u64,
        order_count,
        Utc::now(),
    );

    Ok(ApiResponse::success("Dashboard stats", stats, None))
}

pub async fn recipe_types(state: &AppState) -> AppResult<ApiResponse<BucketCounts>> {
    let recipes = all_recipes(state).await?;
    let counts = dashboard::recipe_type_stats(&recipes);

    Ok(ApiResponse::success(
        "Recipe types",
        BucketCounts { counts },
        None,
    ))
}

pub async fn favorites_by_category(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<BucketCounts>> {
    let doc = User::from(find_user(&state.orm, user.user_id).await?);
    let favorites = fetch_recipes_in_order(&state.orm, &doc.favorites).await?;
    let counts = dashboard::favorites_by_category(&favorites);

    Ok(ApiResponse::success(
        "Favorites by category",
        BucketCounts { counts },
        None,
    ))
}

pub async fn recent_activity(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ActivityList>> {
    let doc = User::from(find_user(&state.orm, user.user_id).await?);

    let created: Vec<Recipe> = Recipes::find()
        .filter(RecipeCol::UserId.eq(user.user_id))
        .order_by_desc(RecipeCol::CreatedAt)
        .limit(RECENT_CREATED_LIMIT)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Recipe::from)
        .collect();

    let head: Vec<Uuid> = doc
        .favorites
        .iter()
        .take(RECENT_FAVORITES_LIMIT)
        .copied()
        .collect();
    let favorites = fetch_recipes_in_order(&state.orm, &head).await?;

    let items = dashboard::recent_activity(&created, &favorites, Utc::now());
    Ok(ApiResponse::success(
        "Recent activity",
        ActivityList { items },
        None,
    ))
}

pub async fn meal_plan(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<MealPlanView>> {
    let doc = User::from(find_user(&state.orm, user.user_id).await?);

    if let Some(saved) = dashboard::latest_plan(&doc.meal_plans) {
        return Ok(ApiResponse::success(
            "Meal plan",
            MealPlanView {
                plan: saved.plan.clone(),
                week_start_date: Some(saved.week_start_date),
                saved: true,
            },
            None,
        ));
    }

    let pool: Vec<Recipe> = default_order(Recipes::find())
        .limit(MEAL_SLOTS_PER_WEEK)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Recipe::from)
        .collect();

    Ok(ApiResponse::success(
        "Meal plan",
        MealPlanView {
            plan: dashboard::synthesize_week_plan(&pool),
            week_start_date: None,
            saved: false,
        },
        None,
    ))
}

pub async fn meal_plans(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<MealPlanList>> {
    let doc = User::from(find_user(&state.orm, user.user_id).await?);
    let total = doc.meal_plans.len() as i64;

    Ok(ApiResponse::success(
        "Meal plans",
        MealPlanList {
            items: doc.meal_plans,
        },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn save_meal_plan(
    state: &AppState,
    user: &AuthUser,
    payload: SaveMealPlanRequest,
) -> AppResult<ApiResponse<MealPlanEntry>> {
    let now = Utc::now();
    let week_start = payload.week_start_date.unwrap_or(now);

    let txn = state.orm.begin().await?;
    let model = lock_user(&txn, user.user_id).await?;
    let mut doc = User::from(model.clone());
    let outcome = dashboard::upsert_meal_plan(&mut doc.meal_plans, payload.plan, week_start, now);
    let saved = save_user_documents(&txn, model, &doc).await?;
    txn.commit().await?;

    let (id, message) = match outcome {
        MealPlanUpsert::Updated(id) => (id, "Meal plan updated"),
        MealPlanUpsert::Created(id) => (id, "Meal plan saved"),
    };
    tracing::info!(user_id = %user.user_id, plan_id = %id, ?outcome, "meal plan saved");

    let entry = saved
        .meal_plans
        .into_iter()
        .find(|entry| entry.id == id)
        .ok_or(AppError::NotFound("Meal plan"))?;

    Ok(ApiResponse::success(message, entry, Some(Meta::empty())))
}

pub async fn delete_meal_plan(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = state.orm.begin().await?;
    let model = lock_user(&txn, user.user_id).await?;
    let mut doc = User::from(model.clone());

    let index = doc
        .meal_plans
        .iter()
        .position(|entry| entry.id == id)
        .ok_or(AppError::NotFound("Meal plan"))?;
    doc.meal_plans.remove(index);

    save_user_documents(&txn, model, &doc).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Meal plan deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}
