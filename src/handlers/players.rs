use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::player;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};
use utoipa::ToSchema;

/// Request body for creating a new player
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePlayerRequest {
    /// Player name
    pub name: String,
    /// Team the player belongs to, if any
    pub team_id: Option<i32>,
}

/// Player response model
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerResponse {
    pub id: i32,
    pub name: String,
    pub team_id: Option<i32>,
}

impl From<player::Model> for PlayerResponse {
    fn from(model: player::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            team_id: model.team_id,
        }
    }
}

/// Create a new player
#[utoipa::path(
    post,
    path = "/api/v1/players",
    tag = "reference",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created successfully", body = ApiResponse<PlayerResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PlayerResponse>>), StatusCode> {
    let new_player = player::ActiveModel {
        name: Set(request.name.clone()),
        team_id: Set(request.team_id),
        ..Default::default()
    };

    match new_player.insert(&state.db).await {
        Ok(player_model) => {
            let response = ApiResponse {
                data: PlayerResponse::from(player_model),
                message: "Player created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to create player '{}': {}", request.name, db_error);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// Get all players, ordered by name
#[utoipa::path(
    get,
    path = "/api/v1/players",
    tag = "reference",
    responses(
        (status = 200, description = "Players retrieved successfully", body = ApiResponse<Vec<PlayerResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_players(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PlayerResponse>>>, StatusCode> {
    match player::Entity::find()
        .order_by_asc(player::Column::Name)
        .all(&state.db)
        .await
    {
        Ok(players) => {
            let player_responses: Vec<PlayerResponse> =
                players.into_iter().map(PlayerResponse::from).collect();

            let response = ApiResponse {
                data: player_responses,
                message: "Players retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve players: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Delete a player
///
/// Fails with 400 when the player is still referenced by parlay legs.
#[utoipa::path(
    delete,
    path = "/api/v1/players/{player_id}",
    tag = "reference",
    params(
        ("player_id" = i32, Path, description = "Player ID"),
    ),
    responses(
        (status = 200, description = "Player deleted successfully", body = ApiResponse<String>),
        (status = 400, description = "Player is still referenced", body = ErrorResponse),
        (status = 404, description = "Player not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn delete_player(
    Path(player_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, StatusCode> {
    let player_model = match player::Entity::find_by_id(player_id).one(&state.db).await {
        Ok(Some(player_model)) => player_model,
        Ok(None) => {
            warn!("Player with ID {} not found for deletion", player_id);
            return Err(StatusCode::NOT_FOUND);
        }
        Err(db_error) => {
            error!("Failed to lookup player with ID {}: {}", player_id, db_error);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match player_model.delete(&state.db).await {
        Ok(_) => {
            let response = ApiResponse {
                data: format!("Player {} deleted", player_id),
                message: "Player deleted successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            warn!("Cannot delete player with ID {}: {}", player_id, db_error);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
