use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use sea_orm::sea_query::LockType;
use uuid::Uuid;

use crate::{
    audit::{self, AuditAction},
    dto::collections::{
        CollectionDetail, CollectionList, CreateCollectionRequest, UpdateCollectionRequest,
    },
    entity::{
        collections::{ActiveModel, Column, Entity as Collections, Model as CollectionModel},
        json::{IdList, StringList},
    },
    error::{AppError, AppResult},
    membership::{CollectionMembership, ensure_owner},
    middleware::auth::AuthUser,
    models::Collection,
    response::{ApiResponse, Meta},
    services::recipe_service::{fetch_recipes_in_order, share_recipe},
    state::AppState,
};

pub const PUBLIC_LIST_LIMIT: u64 = 20;

/// Private collections are visible to their owner only.
pub fn ensure_visible(collection: &Collection, requester: Uuid) -> AppResult<()> {
    if collection.is_public || collection.user_id == requester {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Partial update: strings are replaced only when present and non-empty,
/// `is_public` only when present.
pub fn apply_update(collection: &mut Collection, update: UpdateCollectionRequest) {
    if let Some(name) = update.name.filter(|n| !n.trim().is_empty()) {
        collection.name = name.trim().to_string();
    }
    if let Some(description) = update.description.filter(|d| !d.is_empty()) {
        collection.description = description;
    }
    if let Some(is_public) = update.is_public {
        collection.is_public = is_public;
    }
    if let Some(cover_image) = update.cover_image.filter(|c| !c.is_empty()) {
        collection.cover_image = Some(cover_image);
    }
    if let Some(tags) = update.tags {
        collection.tags = tags;
    }
}

async fn find_collection(state: &AppState, id: Uuid) -> AppResult<CollectionModel> {
    Collections::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Collection"))
}

pub async fn create_collection(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCollectionRequest,
) -> AppResult<ApiResponse<Collection>> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::InvalidInput("Collection name is required".into()));
    }

    let now = Utc::now();
    let created = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        description: Set(payload.description),
        user_id: Set(user.user_id),
        is_public: Set(payload.is_public.unwrap_or(false)),
        recipes: Set(IdList::default()),
        cover_image: Set(payload.cover_image.filter(|c| !c.is_empty())),
        tags: Set(StringList(payload.tags)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::debug!(collection_id = %created.id, "collection created");

    Ok(ApiResponse::success(
        "Collection created",
        Collection::from(created),
        Some(Meta::empty()),
    ))
}

pub async fn get_collection(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<CollectionDetail>> {
    let collection = Collection::from(find_collection(state, id).await?);
    ensure_visible(&collection, user.user_id)?;

    let recipe_details = fetch_recipes_in_order(&state.orm, &collection.recipes).await?;

    Ok(ApiResponse::success(
        "Collection",
        CollectionDetail {
            collection,
            recipe_details,
        },
        None,
    ))
}

pub async fn update_collection(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCollectionRequest,
) -> AppResult<ApiResponse<Collection>> {
    let existing = find_collection(state, id).await?;
    ensure_owner(Some(existing.user_id), user.user_id)?;

    let mut collection = Collection::from(existing.clone());
    apply_update(&mut collection, payload);

    let mut active: ActiveModel = existing.into();
    active.name = Set(collection.name);
    active.description = Set(collection.description);
    active.is_public = Set(collection.is_public);
    active.cover_image = Set(collection.cover_image);
    active.tags = Set(StringList(collection.tags));
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Collection updated",
        Collection::from(updated),
        Some(Meta::empty()),
    ))
}

pub async fn delete_collection(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let existing = find_collection(state, id).await?;
    ensure_owner(Some(existing.user_id), user.user_id)?;

    Collections::delete_by_id(id).exec(&state.orm).await?;

    audit::record(
        &state.pool,
        user.user_id,
        AuditAction::CollectionDelete,
        serde_json::json!({ "collection_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Collection deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Membership edits lock the row and write only the recipe list. A recipe
/// being added is share-locked first, in the same order `delete_recipe` locks.
async fn edit_members<F>(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    adding: Option<Uuid>,
    edit: F,
) -> AppResult<Collection>
where
    F: FnOnce(&mut Collection) -> AppResult<bool>,
{
    let txn = state.orm.begin().await?;
    if let Some(recipe_id) = adding {
        share_recipe(&txn, recipe_id).await?;
    }
    let existing = Collections::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound("Collection"))?;
    ensure_owner(Some(existing.user_id), user.user_id)?;

    let mut collection = Collection::from(existing.clone());
    if !edit(&mut collection)? {
        return Ok(collection);
    }

    let mut active: ActiveModel = existing.into();
    active.recipes = Set(IdList(collection.recipes));
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(&txn).await?;
    txn.commit().await?;

    Ok(Collection::from(updated))
}

pub async fn add_recipe(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    recipe_id: Uuid,
) -> AppResult<ApiResponse<Collection>> {
    let collection = edit_members(state, user, id, Some(recipe_id), |collection| {
        collection.add_recipe(recipe_id).map(|()| true)
    })
    .await?;

    Ok(ApiResponse::success(
        "Recipe added to collection",
        collection,
        Some(Meta::empty()),
    ))
}

pub async fn remove_recipe(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    recipe_id: Uuid,
) -> AppResult<ApiResponse<Collection>> {
    let collection = edit_members(state, user, id, None, |collection| {
        Ok(collection.remove_recipe(recipe_id))
    })
    .await?;

    Ok(ApiResponse::success(
        "Recipe removed from collection",
        collection,
        Some(Meta::empty()),
    ))
}

pub async fn list_public(state: &AppState) -> AppResult<ApiResponse<CollectionList>> {
    let items: Vec<Collection> = Collections::find()
        .filter(Column::IsPublic.eq(true))
        .order_by_desc(Column::CreatedAt)
        .limit(PUBLIC_LIST_LIMIT)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Collection::from)
        .collect();

    Ok(ApiResponse::success(
        "Public collections",
        CollectionList { items },
        Some(Meta::empty()),
    ))
}

pub async fn list_mine(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<CollectionList>> {
    let items: Vec<Collection> = Collections::find()
        .filter(Column::UserId.eq(user.user_id))
        .order_by_desc(Column::UpdatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Collection::from)
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "My collections",
        CollectionList { items },
        Some(Meta::new(1, total, total)),
    ))
}
