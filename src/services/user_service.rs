use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QuerySelect, Set};
use sea_orm::sea_query::LockType;
use uuid::Uuid;

use crate::{
    dto::auth::UpdateProfileRequest,
    entity::{
        json::{EmbeddedCollectionList, IdList, MealPlanList},
        users::{ActiveModel as UserActive, Entity as Users, Model as UserModel},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn find_user<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<UserModel> {
    Users::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound("User"))
}

/// Loads the user row under `FOR UPDATE`; call inside a transaction.
pub async fn lock_user<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<UserModel> {
    Users::find_by_id(id)
        .lock(LockType::Update)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound("User"))
}

/// Writes the embedded sequences of `user` back onto its row.
pub async fn save_user_documents<C: ConnectionTrait>(
    conn: &C,
    model: UserModel,
    user: &User,
) -> AppResult<User> {
    let mut active: UserActive = model.into();
    active.favorites = Set(IdList(user.favorites.clone()));
    active.collections = Set(EmbeddedCollectionList(user.collections.clone()));
    active.meal_plans = Set(MealPlanList(user.meal_plans.clone()));
    active.created_recipes = Set(IdList(user.created_recipes.clone()));
    let saved = active.update(conn).await?;
    Ok(User::from(saved))
}

pub async fn get_me(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<User>> {
    let model = find_user(&state.orm, user.user_id).await?;
    Ok(ApiResponse::success("Profile", User::from(model), None))
}

pub async fn update_me(
    state: &AppState,
    user: &AuthUser,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<User>> {
    let existing = find_user(&state.orm, user.user_id).await?;

    let mut active: UserActive = existing.into();
    if let Some(name) = payload.name.map(|n| n.trim().to_string()) {
        if name.is_empty() {
            return Err(AppError::InvalidInput("Name cannot be empty".into()));
        }
        active.name = Set(name);
    }
    if let Some(bio) = payload.bio {
        active.bio = Set(Some(bio));
    }
    if let Some(avatar) = payload.avatar.filter(|a| !a.is_empty()) {
        active.avatar = Set(Some(avatar));
    }

    let updated = active.update(&state.orm).await?;
    tracing::debug!(user_id = %updated.id, "profile updated");

    Ok(ApiResponse::success(
        "Profile updated",
        User::from(updated),
        Some(Meta::empty()),
    ))
}
