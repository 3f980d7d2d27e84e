use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use common::{LegResult, LegType, ParlayDto, ParlayStatus, ReportFilters};
use compute::report::to_parlay_dto;
use model::entities::{parlay, parlay_leg};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;

/// One leg as supplied by the client when creating or replacing a parlay's
/// leg collection.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ParlayLegPayload {
    pub leg_type: LegType,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    /// Market name, e.g. "Points" or "Moneyline"
    pub market: String,
    /// Selection within the market, e.g. "Over 24.5"
    pub selection: String,
    /// American odds, e.g. -110 or +250
    pub odds: Option<i32>,
    /// Leg outcome (default: pending)
    pub result: Option<LegResult>,
}

/// Request body for creating a new parlay with its legs
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateParlayRequest {
    pub date: NaiveDate,
    pub stake: f64,
    pub potential_payout: Option<f64>,
    pub sportsbook: Option<String>,
    /// Settlement status (default: pending)
    pub status: Option<ParlayStatus>,
    pub notes: Option<String>,
    pub legs: Vec<ParlayLegPayload>,
}

/// Request body for updating a parlay. When `legs` is present the whole
/// leg collection is replaced; there is no per-leg patching.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateParlayRequest {
    pub date: Option<NaiveDate>,
    pub stake: Option<f64>,
    pub potential_payout: Option<f64>,
    pub sportsbook: Option<String>,
    pub status: Option<ParlayStatus>,
    pub notes: Option<String>,
    pub legs: Option<Vec<ParlayLegPayload>>,
}

/// Query parameters for listing parlays
#[derive(Debug, Deserialize, ToSchema)]
pub struct ParlayListQuery {
    /// Inclusive lower bound on the parlay date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the parlay date
    pub end_date: Option<NaiveDate>,
    pub status: Option<ParlayStatus>,
    /// Only parlays with a leg referencing this team
    pub team_id: Option<i32>,
    /// Only parlays with a leg referencing this player
    pub player_id: Option<i32>,
}

/// The leg type determines which reference must be present; the other must
/// be absent. The schema itself keeps both columns nullable, so this is
/// the write-boundary rule that keeps the ledger consistent.
fn validate_legs(legs: &[ParlayLegPayload]) -> Result<(), StatusCode> {
    for leg in legs {
        let valid = match leg.leg_type {
            LegType::Team => leg.team_id.is_some() && leg.player_id.is_none(),
            LegType::Player => leg.player_id.is_some() && leg.team_id.is_none(),
        };
        if !valid {
            warn!(
                "Rejecting {:?} leg with team_id {:?} and player_id {:?}",
                leg.leg_type, leg.team_id, leg.player_id
            );
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    Ok(())
}

async fn insert_legs(
    txn: &DatabaseTransaction,
    parlay_id: i32,
    legs: &[ParlayLegPayload],
) -> Result<(), sea_orm::DbErr> {
    for leg in legs {
        parlay_leg::ActiveModel {
            parlay_id: Set(parlay_id),
            leg_type: Set(leg.leg_type.into()),
            team_id: Set(leg.team_id),
            player_id: Set(leg.player_id),
            market: Set(leg.market.clone()),
            selection: Set(leg.selection.clone()),
            odds: Set(leg.odds),
            result: Set(leg.result.unwrap_or(LegResult::Pending).into()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }
    Ok(())
}

/// Load a parlay with its legs and convert to the wire shape.
async fn load_parlay_dto(state: &AppState, parlay_id: i32) -> Result<ParlayDto, StatusCode> {
    let parlay_model = match parlay::Entity::find_by_id(parlay_id).one(&state.db).await {
        Ok(Some(parlay_model)) => parlay_model,
        Ok(None) => return Err(StatusCode::NOT_FOUND),
        Err(db_error) => {
            error!("Failed to load parlay with ID {}: {}", parlay_id, db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    let legs = match parlay_model.find_related(parlay_leg::Entity).all(&state.db).await {
        Ok(legs) => legs,
        Err(db_error) => {
            error!("Failed to load legs for parlay {}: {}", parlay_id, db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    Ok(to_parlay_dto(parlay_model, legs))
}

/// Create a new parlay with its legs in one transaction
#[utoipa::path(
    post,
    path = "/api/v1/parlays",
    tag = "parlays",
    request_body = CreateParlayRequest,
    responses(
        (status = 201, description = "Parlay created successfully", body = ApiResponse<ParlayDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_parlay(
    State(state): State<AppState>,
    Json(request): Json<CreateParlayRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ParlayDto>>), StatusCode> {
    validate_legs(&request.legs)?;

    let txn = match state.db.begin().await {
        Ok(txn) => txn,
        Err(db_error) => {
            error!("Failed to begin transaction: {}", db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let new_parlay = parlay::ActiveModel {
        date: Set(request.date),
        stake: Set(request.stake),
        potential_payout: Set(request.potential_payout),
        sportsbook: Set(request.sportsbook.clone()),
        status: Set(request.status.unwrap_or(ParlayStatus::Pending).into()),
        notes: Set(request.notes.clone()),
        ..Default::default()
    };

    let parlay_id = match new_parlay.insert(&txn).await {
        Ok(parlay_model) => parlay_model.id,
        Err(db_error) => {
            error!("Failed to create parlay: {}", db_error);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    if let Err(db_error) = insert_legs(&txn, parlay_id, &request.legs).await {
        // Unknown team/player references surface here as FK violations.
        warn!("Failed to create legs for parlay {}: {}", parlay_id, db_error);
        return Err(StatusCode::BAD_REQUEST);
    }

    if let Err(db_error) = txn.commit().await {
        error!("Failed to commit parlay creation: {}", db_error);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    // The ledger changed; cached report summaries are stale.
    state.cache.invalidate_all();

    info!("Parlay created with ID: {}", parlay_id);
    let response = ApiResponse {
        data: load_parlay_dto(&state, parlay_id).await?,
        message: "Parlay created successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// List parlays with optional filters
///
/// Shares the report filter compiler, so leg-level filters de-duplicate
/// and the ordering (date descending, id ascending) matches the reports.
#[utoipa::path(
    get,
    path = "/api/v1/parlays",
    tag = "parlays",
    responses(
        (status = 200, description = "Parlays retrieved successfully", body = ApiResponse<Vec<ParlayDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_parlays(
    Query(query): Query<ParlayListQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ParlayDto>>>, StatusCode> {
    let filters = ReportFilters {
        start_date: query.start_date,
        end_date: query.end_date,
        status: query.status,
        min_stake: None,
        max_stake: None,
        team_ids: query.team_id.map(|id| vec![id]),
        player_ids: query.player_id.map(|id| vec![id]),
    };

    match compute::report::filter::fetch_matching(&state.db, &filters).await {
        Ok(records) => {
            let parlays: Vec<ParlayDto> = records
                .into_iter()
                .map(|(parlay_model, legs)| to_parlay_dto(parlay_model, legs))
                .collect();

            let response = ApiResponse {
                data: parlays,
                message: "Parlays retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(report_error) => {
            error!("Failed to retrieve parlays: {}", report_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get a specific parlay by ID
#[utoipa::path(
    get,
    path = "/api/v1/parlays/{parlay_id}",
    tag = "parlays",
    params(
        ("parlay_id" = i32, Path, description = "Parlay ID"),
    ),
    responses(
        (status = 200, description = "Parlay retrieved successfully", body = ApiResponse<ParlayDto>),
        (status = 404, description = "Parlay not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_parlay(
    Path(parlay_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ParlayDto>>, StatusCode> {
    let response = ApiResponse {
        data: load_parlay_dto(&state, parlay_id).await?,
        message: "Parlay retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Update a parlay
///
/// Scalar fields update in place; a provided `legs` collection replaces
/// the existing one entirely (clear + recreate), so the leg set after the
/// update equals the provided set exactly.
#[utoipa::path(
    put,
    path = "/api/v1/parlays/{parlay_id}",
    tag = "parlays",
    params(
        ("parlay_id" = i32, Path, description = "Parlay ID"),
    ),
    request_body = UpdateParlayRequest,
    responses(
        (status = 200, description = "Parlay updated successfully", body = ApiResponse<ParlayDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Parlay not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_parlay(
    Path(parlay_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateParlayRequest>,
) -> Result<Json<ApiResponse<ParlayDto>>, StatusCode> {
    if let Some(legs) = &request.legs {
        validate_legs(legs)?;
    }

    let existing_parlay = match parlay::Entity::find_by_id(parlay_id).one(&state.db).await {
        Ok(Some(parlay_model)) => parlay_model,
        Ok(None) => {
            warn!("Parlay with ID {} not found for update", parlay_id);
            return Err(StatusCode::NOT_FOUND);
        }
        Err(db_error) => {
            error!("Failed to lookup parlay with ID {}: {}", parlay_id, db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let txn = match state.db.begin().await {
        Ok(txn) => txn,
        Err(db_error) => {
            error!("Failed to begin transaction: {}", db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let mut parlay_active: parlay::ActiveModel = existing_parlay.into();
    if let Some(date) = request.date {
        parlay_active.date = Set(date);
    }
    if let Some(stake) = request.stake {
        parlay_active.stake = Set(stake);
    }
    if let Some(potential_payout) = request.potential_payout {
        parlay_active.potential_payout = Set(Some(potential_payout));
    }
    if let Some(sportsbook) = request.sportsbook.clone() {
        parlay_active.sportsbook = Set(Some(sportsbook));
    }
    if let Some(status) = request.status {
        parlay_active.status = Set(status.into());
    }
    if let Some(notes) = request.notes.clone() {
        parlay_active.notes = Set(Some(notes));
    }

    if let Err(db_error) = parlay_active.update(&txn).await {
        error!("Failed to update parlay with ID {}: {}", parlay_id, db_error);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    if let Some(legs) = &request.legs {
        // Replace the whole leg collection.
        if let Err(db_error) = parlay_leg::Entity::delete_many()
            .filter(parlay_leg::Column::ParlayId.eq(parlay_id))
            .exec(&txn)
            .await
        {
            error!("Failed to clear legs for parlay {}: {}", parlay_id, db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        if let Err(db_error) = insert_legs(&txn, parlay_id, legs).await {
            warn!("Failed to recreate legs for parlay {}: {}", parlay_id, db_error);
            return Err(StatusCode::BAD_REQUEST);
        }
    }

    if let Err(db_error) = txn.commit().await {
        error!("Failed to commit parlay update: {}", db_error);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    state.cache.invalidate_all();

    info!("Parlay with ID {} updated successfully", parlay_id);
    let response = ApiResponse {
        data: load_parlay_dto(&state, parlay_id).await?,
        message: "Parlay updated successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Delete a parlay and all of its legs
#[utoipa::path(
    delete,
    path = "/api/v1/parlays/{parlay_id}",
    tag = "parlays",
    params(
        ("parlay_id" = i32, Path, description = "Parlay ID"),
    ),
    responses(
        (status = 200, description = "Parlay deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Parlay not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_parlay(
    Path(parlay_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, StatusCode> {
    match parlay::Entity::delete_by_id(parlay_id).exec(&state.db).await {
        Ok(delete_result) => {
            if delete_result.rows_affected > 0 {
                state.cache.invalidate_all();
                info!("Parlay with ID {} deleted successfully", parlay_id);
                let response = ApiResponse {
                    data: format!("Parlay {} deleted", parlay_id),
                    message: "Parlay deleted successfully".to_string(),
                    success: true,
                };
                Ok(Json(response))
            } else {
                warn!("Parlay with ID {} not found for deletion", parlay_id);
                Err(StatusCode::NOT_FOUND)
            }
        }
        Err(db_error) => {
            error!("Failed to delete parlay with ID {}: {}", parlay_id, db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
