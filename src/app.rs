use axum::{
    Router,
    http::Method,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{get_recipe, list_recipes_by_cuisine, update_recipe},
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recipes/{id}", get(get_recipe).post(update_recipe))
        .route("/recipes/cuisine/{cuisine}", get(list_recipes_by_cuisine))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
