use chrono::Utc;
use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::{
    dto::favorites::{
        AddFavoriteRequest, CollectionRecipeRequest, CreateEmbeddedCollectionRequest,
        EmbeddedCollectionList, EmbeddedCollectionView, FavoriteIds, FavoriteRecipeList,
    },
    error::{AppError, AppResult},
    membership::CollectionMembership,
    middleware::auth::AuthUser,
    models::{EmbeddedCollection, NotificationKind, User},
    response::{ApiResponse, Meta},
    services::{
        notification_service::{self, NewNotification},
        recipe_service::{fetch_recipes_in_order, share_recipe},
        user_service::{find_user, lock_user, save_user_documents},
    },
    state::AppState,
};

pub async fn list_favorites(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<FavoriteRecipeList>> {
    let doc = User::from(find_user(&state.orm, user.user_id).await?);
    let items = fetch_recipes_in_order(&state.orm, &doc.favorites).await?;

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "OK",
        FavoriteRecipeList { items },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn add_favorite(
    state: &AppState,
    user: &AuthUser,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<FavoriteIds>> {
    let txn = state.orm.begin().await?;
    let recipe = share_recipe(&txn, payload.recipe_id).await?;
    let model = lock_user(&txn, user.user_id).await?;
    let mut doc = User::from(model.clone());
    doc.favorites_mut().add_recipe(recipe.id)?;
    let saved = save_user_documents(&txn, model, &doc).await?;
    txn.commit().await?;

    tracing::debug!(user_id = %user.user_id, recipe_id = %recipe.id, "favorite added");

    if let Some(owner_id) = recipe.user_id {
        notification_service::dispatch(
            state,
            NewNotification {
                recipient_id: owner_id,
                sender_id: Some(user.user_id),
                kind: NotificationKind::Like,
                title: "New favorite".into(),
                message: format!("{} saved your recipe \"{}\"", user.name, recipe.title),
                recipe_id: Some(recipe.id),
                order_id: None,
                action: "View Recipe".into(),
                comment: None,
            },
        )
        .await;
    }

    Ok(ApiResponse::success(
        "Added to favorites",
        FavoriteIds {
            favorites: saved.favorites,
        },
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite(
    state: &AppState,
    user: &AuthUser,
    recipe_id: Uuid,
) -> AppResult<ApiResponse<FavoriteIds>> {
    let txn = state.orm.begin().await?;
    let model = lock_user(&txn, user.user_id).await?;
    let mut doc = User::from(model.clone());

    let favorites = if doc.favorites_mut().remove_recipe(recipe_id) {
        save_user_documents(&txn, model, &doc).await?.favorites
    } else {
        doc.favorites
    };
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Removed from favorites",
        FavoriteIds { favorites },
        Some(Meta::empty()),
    ))
}

pub async fn list_collections(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<EmbeddedCollectionList>> {
    let doc = User::from(find_user(&state.orm, user.user_id).await?);

    let all_ids: Vec<Uuid> = doc
        .collections
        .iter()
        .flat_map(|c| c.recipes.iter().copied())
        .collect();
    let resolved = fetch_recipes_in_order(&state.orm, &all_ids).await?;

    let items = doc
        .collections
        .into_iter()
        .map(|collection| EmbeddedCollectionView {
            recipes: collection
                .recipes
                .iter()
                .filter_map(|id| resolved.iter().find(|r| r.id == *id).cloned())
                .collect(),
            id: collection.id,
            name: collection.name,
            created_at: collection.created_at,
        })
        .collect();

    Ok(ApiResponse::success(
        "Collections",
        EmbeddedCollectionList { items },
        Some(Meta::empty()),
    ))
}

pub async fn create_collection(
    state: &AppState,
    user: &AuthUser,
    payload: CreateEmbeddedCollectionRequest,
) -> AppResult<ApiResponse<EmbeddedCollection>> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::InvalidInput("Collection name is required".into()));
    }

    let collection = EmbeddedCollection {
        id: Uuid::new_v4(),
        name,
        recipes: Vec::new(),
        created_at: Utc::now(),
    };

    let txn = state.orm.begin().await?;
    let model = lock_user(&txn, user.user_id).await?;
    let mut doc = User::from(model.clone());
    doc.push_collection(collection.clone());
    save_user_documents(&txn, model, &doc).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Collection created",
        collection,
        Some(Meta::empty()),
    ))
}

pub async fn add_recipe_to_collection(
    state: &AppState,
    user: &AuthUser,
    collection_id: Uuid,
    payload: CollectionRecipeRequest,
) -> AppResult<ApiResponse<EmbeddedCollection>> {
    let txn = state.orm.begin().await?;
    share_recipe(&txn, payload.recipe_id).await?;
    let model = lock_user(&txn, user.user_id).await?;
    let mut doc = User::from(model.clone());
    let collection = doc.find_collection_mut(collection_id)?;
    collection.add_recipe(payload.recipe_id)?;
    let collection = collection.clone();
    save_user_documents(&txn, model, &doc).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Recipe added to collection",
        collection,
        Some(Meta::empty()),
    ))
}

pub async fn remove_recipe_from_collection(
    state: &AppState,
    user: &AuthUser,
    collection_id: Uuid,
    recipe_id: Uuid,
) -> AppResult<ApiResponse<EmbeddedCollection>> {
    let txn = state.orm.begin().await?;
    let model = lock_user(&txn, user.user_id).await?;
    let mut doc = User::from(model.clone());
    let collection = doc.find_collection_mut(collection_id)?;
    let removed = collection.remove_recipe(recipe_id);
    let collection = collection.clone();
    if removed {
        save_user_documents(&txn, model, &doc).await?;
    }
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Recipe removed from collection",
        collection,
        Some(Meta::empty()),
    ))
}

pub async fn delete_collection(
    state: &AppState,
    user: &AuthUser,
    collection_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = state.orm.begin().await?;
    let model = lock_user(&txn, user.user_id).await?;
    let mut doc = User::from(model.clone());
    let removed = doc.remove_collection(collection_id)?;
    save_user_documents(&txn, model, &doc).await?;
    txn.commit().await?;

    tracing::debug!(collection_id = %removed.id, "embedded collection deleted");

    Ok(ApiResponse::success(
        "Collection deleted",
        serde_json::json!({ "id": removed.id }),
        Some(Meta::empty()),
    ))
}
