//! HTTP surface: the `/api/greeting` routes.

use crate::greeting::{GreetingRegistry, LanguageCode};
use crate::response::ServiceResponse;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<GreetingRegistry>,
}

impl AppState {
    pub fn new(registry: GreetingRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let greeting = Router::new()
        .route("/goodMorning", get(good_morning))
        .route("/goodMorning/all", get(all_good_mornings))
        .route("/goodMorning/:lang", get(native_good_morning));

    Router::new()
        .nest("/api/greeting", greeting)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// English and Spanish greetings joined with "; ".
async fn good_morning(State(state): State<AppState>) -> String {
    let registry = &state.registry;
    let english = registry.default_entry().text;
    let spanish = registry
        .get(LanguageCode::Es)
        .map(|e| e.text)
        .unwrap_or(english);

    [english, spanish].join("; ")
}

/// Greeting in the requested language, English if the code is unknown.
async fn native_good_morning(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> &'static str {
    match state.registry.by_language(&lang) {
        Some(text) => {
            debug!(lang = %lang, "Resolved greeting");
            text
        }
        None => {
            debug!(lang = %lang, "Unknown language, falling back to {}", LanguageCode::DEFAULT);
            state.registry.default_entry().text
        }
    }
}

/// Every registered greeting, in registry order.
async fn all_good_mornings(
    State(state): State<AppState>,
) -> Json<ServiceResponse<Vec<&'static str>>> {
    let greetings = state.registry.greetings();
    debug!("Returning {} greetings", greetings.len());
    Json(ServiceResponse::new(greetings))
}
