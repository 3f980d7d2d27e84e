use common::{LegResult, LegType, ParlayDto, ParlayLegDto, ParlayStatus, ReportFilters, ReportStats};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for report summaries, invalidated on ledger writes
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Report(ReportStats),
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::teams::create_team,
        crate::handlers::teams::get_teams,
        crate::handlers::teams::delete_team,
        crate::handlers::players::create_player,
        crate::handlers::players::get_players,
        crate::handlers::players::delete_player,
        crate::handlers::parlays::create_parlay,
        crate::handlers::parlays::get_parlays,
        crate::handlers::parlays::get_parlay,
        crate::handlers::parlays::update_parlay,
        crate::handlers::parlays::delete_parlay,
        crate::handlers::reports::report_summary,
        crate::handlers::seed::seed_reference_data,
    ),
    components(
        schemas(
            ApiResponse<ParlayDto>,
            ApiResponse<Vec<ParlayDto>>,
            ApiResponse<ReportStats>,
            ErrorResponse,
            HealthResponse,
            ParlayDto,
            ParlayLegDto,
            ParlayStatus,
            LegType,
            LegResult,
            ReportFilters,
            ReportStats,
            crate::handlers::teams::CreateTeamRequest,
            crate::handlers::teams::TeamResponse,
            crate::handlers::players::CreatePlayerRequest,
            crate::handlers::players::PlayerResponse,
            crate::handlers::parlays::CreateParlayRequest,
            crate::handlers::parlays::UpdateParlayRequest,
            crate::handlers::parlays::ParlayLegPayload,
            crate::handlers::parlays::ParlayListQuery,
            crate::handlers::seed::SeedResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "reference", description = "Team and player reference data"),
        (name = "parlays", description = "Parlay ledger CRUD endpoints"),
        (name = "reports", description = "Report summary endpoints"),
        (name = "seed", description = "Seed data endpoints"),
    ),
    info(
        title = "Parlay Tracker API",
        description = "NBA parlay tracking and reporting API",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
