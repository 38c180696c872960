use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{daily_exchange_rates, exchange_rates, health};
use crate::state::AppState;

/// Path segments the API is served under. Both versions expose the same routes.
pub const API_VERSIONS: [&str; 2] = ["v1", "v2"];

fn api_router() -> Router<AppState> {
    Router::new()
        .merge(exchange_rates::router())
        .merge(daily_exchange_rates::router())
}

pub fn create_app(state: AppState) -> Router {
    let router = API_VERSIONS
        .iter()
        .fold(Router::<AppState>::new(), |router, version| {
            router.nest(&format!("/api/{}", version), api_router())
        });

    router
        .nest("/health", health::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
