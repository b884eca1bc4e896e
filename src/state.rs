use std::sync::Arc;

use crate::repository::RecipeRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn RecipeRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn RecipeRepository>) -> Self {
        Self { repo }
    }
}
