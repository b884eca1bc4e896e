use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{CuisinePage, Recipe, RecipeSummary};
use crate::store::RecipeStore;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Recipe>>;

    async fn set_by_id(
        &self,
        id: &str,
        patch: HashMap<String, String>,
    ) -> AppResult<Option<Recipe>>;

    async fn get_by_cuisine(
        &self,
        cuisine: &str,
        page: u64,
        page_size: usize,
    ) -> AppResult<CuisinePage>;
}

pub struct CsvRecipeRepository {
    store: RecipeStore,
}

impl CsvRecipeRepository {
    pub fn new(store: RecipeStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecipeRepository for CsvRecipeRepository {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        let recipes = self.store.read().await?;
        Ok(recipes.into_iter().find(|recipe| ids_match(&recipe.id, id)))
    }

    // Unserialised read-modify-write: concurrent updates race and the later
    // write wins. No write happens when no record matches.
    async fn set_by_id(
        &self,
        id: &str,
        patch: HashMap<String, String>,
    ) -> AppResult<Option<Recipe>> {
        let mut recipes = self.store.read().await?;
        let Some(index) = recipes
            .iter()
            .position(|recipe| ids_match(&recipe.id, id))
        else {
            return Ok(None);
        };

        apply_patch(&mut recipes[index], patch);
        let updated = recipes[index].clone();
        self.store.write(&recipes).await?;
        Ok(Some(updated))
    }

    async fn get_by_cuisine(
        &self,
        cuisine: &str,
        page: u64,
        page_size: usize,
    ) -> AppResult<CuisinePage> {
        let recipes = self.store.read().await?;
        let filtered: Vec<RecipeSummary> = recipes
            .iter()
            .filter(|recipe| recipe.recipe_cuisine == cuisine)
            .map(RecipeSummary::of)
            .collect();

        let offset = usize::try_from(page.saturating_mul(page_size as u64))
            .unwrap_or(usize::MAX);
        let more = filtered.len() > offset.saturating_add(page_size);
        let items = filtered
            .into_iter()
            .skip(offset)
            .take(page_size)
            .collect();

        Ok(CuisinePage { items, page, more })
    }
}

// Both sides are trimmed; two ids that both parse as unsigned integers
// compare numerically ("01" matches "1"), anything else as an exact string.
fn ids_match(stored: &str, requested: &str) -> bool {
    let stored = stored.trim();
    let requested = requested.trim();
    match (stored.parse::<u64>(), requested.parse::<u64>()) {
        (Ok(lhs), Ok(rhs)) => lhs == rhs,
        _ => stored == requested,
    }
}

// The identifier is immutable; keys outside the fixed column set are dropped.
fn apply_patch(recipe: &mut Recipe, patch: HashMap<String, String>) {
    for (key, value) in patch {
        if key == "id" {
            continue;
        }
        if let Some(slot) = recipe.field_mut(&key) {
            *slot = value;
        }
    }
}
