use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppResult,
    models::{CuisinePage, CuisineQuery, Recipe},
    repository::DEFAULT_PAGE_SIZE,
    state::AppState,
};

pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let recipe = state.repo.get_by_id(&id).await?;
    Ok(recipe_or_empty(recipe))
}

pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<HashMap<String, String>>>,
) -> AppResult<Response> {
    let patch = payload.map(|Json(patch)| patch).unwrap_or_default();
    let recipe = state.repo.set_by_id(&id, patch).await?;
    Ok(recipe_or_empty(recipe))
}

pub async fn list_recipes_by_cuisine(
    State(state): State<AppState>,
    Path(cuisine): Path<String>,
    Query(query): Query<CuisineQuery>,
) -> AppResult<Json<CuisinePage>> {
    let page = state
        .repo
        .get_by_cuisine(&cuisine, query.page, DEFAULT_PAGE_SIZE)
        .await?;
    Ok(Json(page))
}

// A missing recipe answers 200 with an empty body, not a 404.
fn recipe_or_empty(recipe: Option<Recipe>) -> Response {
    match recipe {
        Some(recipe) => Json(recipe).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
