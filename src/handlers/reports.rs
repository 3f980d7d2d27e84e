use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use common::{ReportFilters, ReportStats};
use tracing::{debug, error, info, instrument};

/// Compute a filtered report summary over the parlay ledger
///
/// Results are cached per filter set until the next ledger write.
#[utoipa::path(
    post,
    path = "/api/v1/reports/summary",
    tag = "reports",
    request_body = ReportFilters,
    responses(
        (status = 200, description = "Report computed successfully", body = ApiResponse<ReportStats>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn report_summary(
    State(state): State<AppState>,
    Json(filters): Json<ReportFilters>,
) -> Result<Json<ApiResponse<ReportStats>>, StatusCode> {
    let cache_key = format!("report_{:?}", filters);

    if let Some(CachedData::Report(stats)) = state.cache.get(&cache_key).await {
        debug!("Returning cached report for {}", cache_key);
        let response = ApiResponse {
            data: stats,
            message: "Report computed successfully".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    match compute::summary(&state.db, &filters).await {
        Ok(stats) => {
            state
                .cache
                .insert(cache_key, CachedData::Report(stats.clone()))
                .await;

            info!(
                "Report computed over {} parlays",
                stats.total_parlays
            );
            let response = ApiResponse {
                data: stats,
                message: "Report computed successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(report_error) => {
            error!("Failed to compute report: {}", report_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
