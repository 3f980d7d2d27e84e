use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::team;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;

/// Request body for creating a new team
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTeamRequest {
    /// Team name, unique
    pub name: String,
    /// Short code like "BOS", unique when present
    pub abbreviation: Option<String>,
}

/// Team response model
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamResponse {
    pub id: i32,
    pub name: String,
    pub abbreviation: Option<String>,
}

impl From<team::Model> for TeamResponse {
    fn from(model: team::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            abbreviation: model.abbreviation,
        }
    }
}

/// Create a new team
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = "reference",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created successfully", body = ApiResponse<TeamResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TeamResponse>>), StatusCode> {
    let new_team = team::ActiveModel {
        name: Set(request.name.clone()),
        abbreviation: Set(request.abbreviation.clone()),
        ..Default::default()
    };

    match new_team.insert(&state.db).await {
        Ok(team_model) => {
            info!("Team created with ID: {}, name: {}", team_model.id, team_model.name);
            let response = ApiResponse {
                data: TeamResponse::from(team_model),
                message: "Team created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            // Unique name/abbreviation collisions land here as well.
            error!("Failed to create team '{}': {}", request.name, db_error);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// Get all teams, ordered by name
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = "reference",
    responses(
        (status = 200, description = "Teams retrieved successfully", body = ApiResponse<Vec<TeamResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_teams(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TeamResponse>>>, StatusCode> {
    match team::Entity::find()
        .order_by_asc(team::Column::Name)
        .all(&state.db)
        .await
    {
        Ok(teams) => {
            let team_responses: Vec<TeamResponse> =
                teams.into_iter().map(TeamResponse::from).collect();

            let response = ApiResponse {
                data: team_responses,
                message: "Teams retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve teams: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Delete a team
///
/// Fails with 400 when the team is still referenced by players or parlay
/// legs; the foreign keys are restrictive so reference data can never be
/// orphaned.
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}",
    tag = "reference",
    params(
        ("team_id" = i32, Path, description = "Team ID"),
    ),
    responses(
        (status = 200, description = "Team deleted successfully", body = ApiResponse<String>),
        (status = 400, description = "Team is still referenced", body = ErrorResponse),
        (status = 404, description = "Team not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn delete_team(
    Path(team_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, StatusCode> {
    let team_model = match team::Entity::find_by_id(team_id).one(&state.db).await {
        Ok(Some(team_model)) => team_model,
        Ok(None) => {
            warn!("Team with ID {} not found for deletion", team_id);
            return Err(StatusCode::NOT_FOUND);
        }
        Err(db_error) => {
            error!("Failed to lookup team with ID {}: {}", team_id, db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match team_model.delete(&state.db).await {
        Ok(_) => {
            info!("Team with ID {} deleted successfully", team_id);
            let response = ApiResponse {
                data: format!("Team {} deleted", team_id),
                message: "Team deleted successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            warn!("Cannot delete team with ID {}: {}", team_id, db_error);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
