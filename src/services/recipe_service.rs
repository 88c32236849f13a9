use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use sea_orm::sea_query::{Expr, LockType};
use sea_orm::sea_query::extension::postgres::PgExpr;
use uuid::Uuid;

use crate::{
    audit::{self, AuditAction},
    dto::recipes::{AddReviewRequest, CreateRecipeRequest, RecipeList, UpdateRecipeRequest},
    entity::{
        collections::{ActiveModel as CollectionActive, Entity as Collections},
        json::{IdList, ReviewList, StringList},
        recipes::{ActiveModel, Column, Entity as Recipes, Model as RecipeModel},
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    membership::{CollectionMembership, ensure_owner},
    middleware::auth::AuthUser,
    models::{Collection, Difficulty, NotificationKind, Recipe, Review, Season, User},
    response::{ApiResponse, Meta},
    routes::params::{RecipeQuery, RecipeSort, split_list},
    services::{
        notification_service::{self, NewNotification},
        user_service::{lock_user, save_user_documents},
    },
    state::AppState,
};

/// Builds the conjunctive filter for a recipe search. Every filter is
/// optional; list filters match when any of their values match.
pub fn search_condition(query: &RecipeQuery) -> Condition {
    let mut condition = Condition::all();

    if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", escape_like(search));
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(pattern.clone()))
                .add(Expr::cust_with_values(
                    "EXISTS (SELECT 1 FROM jsonb_array_elements_text(recipes.tags) AS t(tag) \
                     WHERE t.tag ILIKE ?)",
                    [pattern],
                )),
        );
    }

    let tags = split_list(query.tags.as_deref());
    if !tags.is_empty() {
        condition = condition.add(any_json_member("recipes.tags", &tags));
    }

    if let Some(cuisine) = query.cuisine.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        condition = condition.add(any_json_member("recipes.tags", &[cuisine.to_string()]));
    }

    if let Some(season) = query.season {
        condition = condition.add(Column::Season.eq(season));
    }

    let moods = split_list(query.mood.as_deref());
    if !moods.is_empty() {
        condition = condition.add(any_json_member("recipes.mood", &moods));
    }

    condition
}

/// Escapes `\`, `%` and `_` so user text matches literally under LIKE.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn any_json_member(column: &str, values: &[String]) -> Condition {
    values.iter().fold(Condition::any(), |cond, value| {
        cond.add(Expr::cust_with_values(
            format!("{column} @> ?"),
            [serde_json::json!([value])],
        ))
    })
}

pub fn apply_sort(finder: Select<Recipes>, sort: RecipeSort) -> Select<Recipes> {
    let finder = match sort {
        RecipeSort::Rating => finder.order_by_desc(Column::Rating),
        RecipeSort::Time => finder.order_by_asc(Column::Time),
        RecipeSort::CreatedAt => finder.order_by_desc(Column::CreatedAt),
    };
    finder.order_by_asc(Column::Id)
}

/// Store-default ordering: insertion order.
pub fn default_order(finder: Select<Recipes>) -> Select<Recipes> {
    finder
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}

/// Uniform offset in `[0, count)`.
pub fn pick_offset<R: Rng + ?Sized>(rng: &mut R, count: u64) -> Option<u64> {
    (count > 0).then(|| rng.random_range(0..count))
}

pub async fn find_recipe<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<RecipeModel> {
    Recipes::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound("Recipe"))
}

/// Loads a recipe under a share lock, so a concurrent delete waits for the
/// caller's transaction. Take it before locking users or collections.
pub async fn share_recipe<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<RecipeModel> {
    Recipes::find_by_id(id)
        .lock(LockType::Share)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound("Recipe"))
}

/// Resolves references in the order given. Dangling ids are skipped.
pub async fn fetch_recipes_in_order<C: ConnectionTrait>(
    conn: &C,
    ids: &[Uuid],
) -> AppResult<Vec<Recipe>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_id: HashMap<Uuid, Recipe> = Recipes::find()
        .filter(Column::Id.is_in(ids.to_vec()))
        .all(conn)
        .await?
        .into_iter()
        .map(|model| (model.id, Recipe::from(model)))
        .collect();

    Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
}

pub async fn list_recipes(
    state: &AppState,
    query: RecipeQuery,
) -> AppResult<ApiResponse<RecipeList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let condition = search_condition(&query);
    let finder = apply_sort(Recipes::find().filter(condition), query.sort.unwrap_or_default());

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Recipe::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Recipes", RecipeList { items }, Some(meta)))
}

pub async fn get_recipe(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Recipe>> {
    let recipe = find_recipe(&state.orm, id).await?;
    Ok(ApiResponse::success("Recipe", Recipe::from(recipe), None))
}

pub async fn list_my_recipes(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<RecipeList>> {
    let items: Vec<Recipe> = Recipes::find()
        .filter(Column::UserId.eq(user.user_id))
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Recipe::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "My recipes",
        RecipeList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn random_recipe(state: &AppState) -> AppResult<ApiResponse<Recipe>> {
    let count = Recipes::find().count(&state.orm).await?;
    let offset = pick_offset(&mut rand::rng(), count).ok_or(AppError::NotFound("Recipe"))?;

    let recipe = default_order(Recipes::find())
        .offset(offset)
        .limit(1)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Recipe"))?;

    Ok(ApiResponse::success("Random recipe", Recipe::from(recipe), None))
}

pub async fn create_recipe(
    state: &AppState,
    user: &AuthUser,
    payload: CreateRecipeRequest,
) -> AppResult<ApiResponse<Recipe>> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Title is required".into()));
    }
    if payload.time < 0 {
        return Err(AppError::InvalidInput("Time cannot be negative".into()));
    }

    let txn = state.orm.begin().await?;
    let owner_model = lock_user(&txn, user.user_id).await?;
    let chef = payload
        .chef
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| owner_model.name.clone());

    let now = Utc::now();
    let recipe = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        chef: Set(chef),
        user_id: Set(Some(user.user_id)),
        image: Set(payload.image),
        time: Set(payload.time),
        servings: Set(payload.servings.unwrap_or(1).max(1)),
        rating: Set(0.0),
        reviews: Set(ReviewList::default()),
        reviews_count: Set(0),
        ingredients: Set(StringList(payload.ingredients)),
        instructions: Set(StringList(payload.instructions)),
        nutrition: Set(payload.nutrition),
        tags: Set(StringList(payload.tags)),
        season: Set(payload.season.unwrap_or(Season::AllSeasons)),
        mood: Set(StringList(payload.mood)),
        difficulty: Set(payload.difficulty.unwrap_or(Difficulty::Medium)),
        cuisine: Set(payload.cuisine),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&txn)
    .await?;

    let mut owner = User::from(owner_model.clone());
    owner.created_recipes.push(recipe.id);
    save_user_documents(&txn, owner_model, &owner).await?;

    txn.commit().await?;

    tracing::info!(recipe_id = %recipe.id, user_id = %user.user_id, "recipe created");
    audit::record(
        &state.pool,
        user.user_id,
        AuditAction::RecipeCreate,
        serde_json::json!({ "recipe_id": recipe.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Recipe created",
        Recipe::from(recipe),
        Some(Meta::empty()),
    ))
}

pub async fn update_recipe(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateRecipeRequest,
) -> AppResult<ApiResponse<Recipe>> {
    let existing = find_recipe(&state.orm, id).await?;
    ensure_owner(existing.user_id, user.user_id)?;

    let mut active: ActiveModel = existing.into();
    if let Some(title) = payload.title.filter(|t| !t.trim().is_empty()) {
        active.title = Set(title.trim().to_string());
    }
    if let Some(chef) = payload.chef.filter(|c| !c.trim().is_empty()) {
        active.chef = Set(chef);
    }
    if let Some(image) = payload.image.filter(|i| !i.is_empty()) {
        active.image = Set(Some(image));
    }
    if let Some(time) = payload.time {
        if time < 0 {
            return Err(AppError::InvalidInput("Time cannot be negative".into()));
        }
        active.time = Set(time);
    }
    if let Some(servings) = payload.servings {
        active.servings = Set(servings.max(1));
    }
    if let Some(ingredients) = payload.ingredients {
        active.ingredients = Set(StringList(ingredients));
    }
    if let Some(instructions) = payload.instructions {
        active.instructions = Set(StringList(instructions));
    }
    if let Some(nutrition) = payload.nutrition {
        active.nutrition = Set(nutrition);
    }
    if let Some(tags) = payload.tags {
        active.tags = Set(StringList(tags));
    }
    if let Some(season) = payload.season {
        active.season = Set(season);
    }
    if let Some(mood) = payload.mood {
        active.mood = Set(StringList(mood));
    }
    if let Some(difficulty) = payload.difficulty {
        active.difficulty = Set(difficulty);
    }
    if let Some(cuisine) = payload.cuisine {
        active.cuisine = Set(cuisine);
    }
    active.updated_at = Set(Utc::now().into());

    let recipe = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Recipe updated",
        Recipe::from(recipe),
        Some(Meta::empty()),
    ))
}

/// Deletes the recipe and every reference to it in one transaction.
pub async fn delete_recipe(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = state.orm.begin().await?;

    let existing = Recipes::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Recipe"))?;
    ensure_owner(existing.user_id, user.user_id)?;

    Recipes::delete_by_id(id).exec(&txn).await?;

    let reference = serde_json::json!([id]);
    let holders = Users::find()
        .filter(
            Condition::any()
                .add(Expr::cust_with_values("users.favorites @> ?", [reference.clone()]))
                .add(Expr::cust_with_values(
                    "users.created_recipes @> ?",
                    [reference.clone()],
                ))
                .add(Expr::cust_with_values(
                    "users.collections::text LIKE ?",
                    [format!("%{id}%")],
                )),
        )
        .lock(LockType::Update)
        .all(&txn)
        .await?;

    let mut users_touched = 0;
    for model in holders {
        let mut doc = User::from(model.clone());
        if doc.detach_recipe(id) {
            save_user_documents(&txn, model, &doc).await?;
            users_touched += 1;
        }
    }

    let containing = Collections::find()
        .filter(Expr::cust_with_values("collections.recipes @> ?", [reference]))
        .lock(LockType::Update)
        .all(&txn)
        .await?;

    let collections_touched = containing.len();
    for model in containing {
        let mut collection = Collection::from(model.clone());
        collection.remove_recipe(id);
        let mut active: CollectionActive = model.into();
        active.recipes = Set(IdList(collection.recipes));
        active.update(&txn).await?;
    }

    txn.commit().await?;

    tracing::info!(
        recipe_id = %id,
        users_touched,
        collections_touched,
        "recipe deleted"
    );
    audit::record(
        &state.pool,
        user.user_id,
        AuditAction::RecipeDelete,
        serde_json::json!({ "recipe_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Recipe deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn add_review(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: AddReviewRequest,
) -> AppResult<ApiResponse<Recipe>> {
    let comment = payload.comment.trim().to_string();
    if comment.is_empty() {
        return Err(AppError::InvalidInput("Review text is required".into()));
    }

    let txn = state.orm.begin().await?;
    let existing = Recipes::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Recipe"))?;

    let mut recipe = Recipe::from(existing.clone());
    recipe.push_review(Review::new(&user.name, &comment, Some(user.user_id), Utc::now()));

    let mut active: ActiveModel = existing.into();
    active.reviews = Set(ReviewList(recipe.reviews.clone()));
    active.reviews_count = Set(recipe.reviews_count);
    let updated = active.update(&txn).await?;

    txn.commit().await?;

    if let Some(owner_id) = updated.user_id {
        notification_service::dispatch(
            state,
            NewNotification {
                recipient_id: owner_id,
                sender_id: Some(user.user_id),
                kind: NotificationKind::Comment,
                title: "New comment".into(),
                message: format!("{} commented on your recipe \"{}\"", user.name, updated.title),
                recipe_id: Some(updated.id),
                order_id: None,
                action: "View Comment".into(),
                comment: Some(comment),
            },
        )
        .await;
    }

    Ok(ApiResponse::success(
        "Review added",
        Recipe::from(updated),
        Some(Meta::empty()),
    ))
}
