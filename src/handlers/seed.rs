use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::{player, team};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use utoipa::ToSchema;

/// Counts of reference rows inserted by a seed run
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    /// Teams inserted (existing ones are skipped)
    pub teams: u64,
    /// Players inserted (existing ones are skipped)
    pub players: u64,
}

const SEED_TEAMS: &[(&str, &str)] = &[
    ("Boston Celtics", "BOS"),
    ("Los Angeles Lakers", "LAL"),
    ("Golden State Warriors", "GSW"),
    ("Milwaukee Bucks", "MIL"),
    ("Denver Nuggets", "DEN"),
];

const SEED_PLAYERS: &[(&str, &str)] = &[
    ("Jayson Tatum", "BOS"),
    ("LeBron James", "LAL"),
    ("Stephen Curry", "GSW"),
    ("Giannis Antetokounmpo", "MIL"),
    ("Nikola Jokic", "DEN"),
];

/// Seed a small set of NBA teams and players
///
/// Idempotent: rows that already exist (matched by name) are left alone,
/// so repeated calls report zero insertions.
#[utoipa::path(
    post,
    path = "/api/v1/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Reference data seeded successfully", body = ApiResponse<SeedResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn seed_reference_data(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SeedResponse>>, StatusCode> {
    let mut teams_inserted = 0u64;
    for (name, abbreviation) in SEED_TEAMS {
        let existing = team::Entity::find()
            .filter(team::Column::Name.eq(*name))
            .one(&state.db)
            .await
            .map_err(|db_error| {
                error!("Failed to look up team {}: {}", name, db_error);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
        if existing.is_some() {
            continue;
        }

        team::ActiveModel {
            name: Set(name.to_string()),
            abbreviation: Set(Some(abbreviation.to_string())),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|db_error| {
            error!("Failed to seed team {}: {}", name, db_error);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        teams_inserted += 1;
    }

    let mut players_inserted = 0u64;
    for (name, team_abbreviation) in SEED_PLAYERS {
        let existing = player::Entity::find()
            .filter(player::Column::Name.eq(*name))
            .one(&state.db)
            .await
            .map_err(|db_error| {
                error!("Failed to look up player {}: {}", name, db_error);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
        if existing.is_some() {
            continue;
        }

        let team_id = team::Entity::find()
            .filter(team::Column::Abbreviation.eq(*team_abbreviation))
            .one(&state.db)
            .await
            .map_err(|db_error| {
                error!(
                    "Failed to resolve team {} for player {}: {}",
                    team_abbreviation, name, db_error
                );
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .map(|team_model| team_model.id);

        player::ActiveModel {
            name: Set(name.to_string()),
            team_id: Set(team_id),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|db_error| {
            error!("Failed to seed player {}: {}", name, db_error);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        players_inserted += 1;
    }

    info!(
        "Seeded {} teams and {} players",
        teams_inserted, players_inserted
    );
    let response = ApiResponse {
        data: SeedResponse {
            teams: teams_inserted,
            players: players_inserted,
        },
        message: "Reference data seeded successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
