use crate::handlers::{
    health::health_check,
    parlays::{create_parlay, delete_parlay, get_parlay, get_parlays, update_parlay},
    players::{create_player, delete_player, get_players},
    reports::report_summary,
    seed::seed_reference_data,
    teams::{create_team, delete_team, get_teams},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Team reference routes
        .route("/api/v1/teams", post(create_team))
        .route("/api/v1/teams", get(get_teams))
        .route("/api/v1/teams/:team_id", delete(delete_team))
        // Player reference routes
        .route("/api/v1/players", post(create_player))
        .route("/api/v1/players", get(get_players))
        .route("/api/v1/players/:player_id", delete(delete_player))
        // Parlay CRUD routes
        .route("/api/v1/parlays", post(create_parlay))
        .route("/api/v1/parlays", get(get_parlays))
        .route("/api/v1/parlays/:parlay_id", get(get_parlay))
        .route("/api/v1/parlays/:parlay_id", put(update_parlay))
        .route("/api/v1/parlays/:parlay_id", delete(delete_parlay))
        // Report routes
        .route("/api/v1/reports/summary", post(report_summary))
        // Seed data
        .route("/api/v1/seed", post(seed_reference_data))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
