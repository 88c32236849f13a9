//! Recipe membership rules shared by favorites, embedded collections and
//! standalone collections.
//!
//! Every list of recipe references in the system obeys the same rules: an id
//! appears at most once, adding a duplicate is a conflict, and removing an
//! absent id is a no-op. Ownership checks go through [`ensure_owner`].

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Collection, EmbeddedCollection, User},
};

pub trait CollectionMembership {
    fn members(&self) -> &[Uuid];

    fn members_mut(&mut self) -> &mut Vec<Uuid>;

    /// Message returned when `add_recipe` hits a duplicate.
    fn duplicate_message(&self) -> &'static str {
        "Recipe already in collection"
    }

    fn contains(&self, recipe_id: Uuid) -> bool {
        self.members().contains(&recipe_id)
    }

    fn add_recipe(&mut self, recipe_id: Uuid) -> AppResult<()> {
        if self.contains(recipe_id) {
            return Err(AppError::Conflict(self.duplicate_message().into()));
        }
        self.members_mut().push(recipe_id);
        Ok(())
    }

    /// Returns whether anything was removed.
    fn remove_recipe(&mut self, recipe_id: Uuid) -> bool {
        let members = self.members_mut();
        let before = members.len();
        members.retain(|id| *id != recipe_id);
        members.len() != before
    }
}

/// A user's favorites list.
pub struct Favorites<'a>(pub &'a mut Vec<Uuid>);

impl CollectionMembership for Favorites<'_> {
    fn members(&self) -> &[Uuid] {
        self.0.as_slice()
    }

    fn members_mut(&mut self) -> &mut Vec<Uuid> {
        &mut *self.0
    }

    fn duplicate_message(&self) -> &'static str {
        "Recipe already in favorites"
    }
}

impl CollectionMembership for EmbeddedCollection {
    fn members(&self) -> &[Uuid] {
        &self.recipes
    }

    fn members_mut(&mut self) -> &mut Vec<Uuid> {
        &mut self.recipes
    }
}

impl CollectionMembership for Collection {
    fn members(&self) -> &[Uuid] {
        &self.recipes
    }

    fn members_mut(&mut self) -> &mut Vec<Uuid> {
        &mut self.recipes
    }
}

pub fn ensure_owner(owner_id: Option<Uuid>, requester: Uuid) -> AppResult<()> {
    match owner_id {
        Some(owner) if owner == requester => Ok(()),
        _ => Err(AppError::Forbidden),
    }
}

impl User {
    pub fn favorites_mut(&mut self) -> Favorites<'_> {
        Favorites(&mut self.favorites)
    }

    pub fn find_collection_mut(&mut self, collection_id: Uuid) -> AppResult<&mut EmbeddedCollection> {
        self.collections
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or(AppError::NotFound("Collection"))
    }

    pub fn push_collection(&mut self, collection: EmbeddedCollection) {
        self.collections.push(collection);
    }

    pub fn remove_collection(&mut self, collection_id: Uuid) -> AppResult<EmbeddedCollection> {
        let index = self
            .collections
            .iter()
            .position(|c| c.id == collection_id)
            .ok_or(AppError::NotFound("Collection"))?;
        Ok(self.collections.remove(index))
    }

    /// Drops every reference to `recipe_id` held by this user. Returns whether
    /// the document changed.
    pub fn detach_recipe(&mut self, recipe_id: Uuid) -> bool {
        let mut changed = self.favorites_mut().remove_recipe(recipe_id);

        let before = self.created_recipes.len();
        self.created_recipes.retain(|id| *id != recipe_id);
        changed |= self.created_recipes.len() != before;

        for collection in &mut self.collections {
            changed |= collection.remove_recipe(recipe_id);
        }
        changed
    }
}
