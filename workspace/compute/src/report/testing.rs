//! Shared database fixtures for the report tests.

use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use model::entities::{parlay, parlay_leg, player, team};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");
    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .expect("Failed to enable foreign keys");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Ids of the fixture rows inserted by [`mixed_ledger`].
pub struct MixedLedger {
    pub celtics: i32,
    pub lakers: i32,
    pub lebron: i32,
    pub p1: i32,
    pub p2: i32,
    pub p3: i32,
    pub p4: i32,
    /// Date shared by p2 and p3.
    pub mid_date: NaiveDate,
    /// Date of p4, the most recent parlay.
    pub last_date: NaiveDate,
}

async fn insert_team(db: &DatabaseConnection, name: &str, abbr: &str) -> i32 {
    team::ActiveModel {
        name: Set(name.to_string()),
        abbreviation: Set(Some(abbr.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert team")
    .id
}

async fn insert_player(db: &DatabaseConnection, name: &str, team_id: i32) -> i32 {
    player::ActiveModel {
        name: Set(name.to_string()),
        team_id: Set(Some(team_id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert player")
    .id
}

async fn insert_parlay(
    db: &DatabaseConnection,
    date: NaiveDate,
    stake: f64,
    status: parlay::ParlayStatus,
    potential_payout: Option<f64>,
) -> i32 {
    parlay::ActiveModel {
        date: Set(date),
        stake: Set(stake),
        potential_payout: Set(potential_payout),
        sportsbook: Set(None),
        status: Set(status),
        notes: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert parlay")
    .id
}

async fn insert_team_leg(db: &DatabaseConnection, parlay_id: i32, team_id: i32, market: &str) {
    parlay_leg::ActiveModel {
        parlay_id: Set(parlay_id),
        leg_type: Set(parlay_leg::LegType::Team),
        team_id: Set(Some(team_id)),
        player_id: Set(None),
        market: Set(market.to_string()),
        selection: Set(format!("{market} pick")),
        odds: Set(Some(-110)),
        result: Set(parlay_leg::LegResult::Pending),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert team leg");
}

async fn insert_player_leg(db: &DatabaseConnection, parlay_id: i32, player_id: i32, market: &str) {
    parlay_leg::ActiveModel {
        parlay_id: Set(parlay_id),
        leg_type: Set(parlay_leg::LegType::Player),
        team_id: Set(None),
        player_id: Set(Some(player_id)),
        market: Set(market.to_string()),
        selection: Set(format!("Over {market}")),
        odds: Set(Some(120)),
        result: Set(parlay_leg::LegResult::Pending),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert player leg");
}

/// Four parlays spanning three dates, with leg references arranged so that
/// every filter dimension (and the de-duplication path) has something to
/// bite on. p3 carries two legs on the same team on purpose.
pub async fn mixed_ledger(db: &DatabaseConnection) -> MixedLedger {
    let celtics = insert_team(db, "Boston Celtics", "BOS").await;
    let lakers = insert_team(db, "Los Angeles Lakers", "LAL").await;
    let warriors = insert_team(db, "Golden State Warriors", "GSW").await;
    let tatum = insert_player(db, "Jayson Tatum", celtics).await;
    let lebron = insert_player(db, "LeBron James", lakers).await;

    let first_date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let mid_date = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
    let last_date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

    let p1 = insert_parlay(db, first_date, 10.0, parlay::ParlayStatus::Won, Some(25.0)).await;
    insert_team_leg(db, p1, celtics, "Moneyline").await;

    let p2 = insert_parlay(db, mid_date, 20.0, parlay::ParlayStatus::Lost, Some(60.0)).await;
    insert_team_leg(db, p2, lakers, "Moneyline").await;
    insert_player_leg(db, p2, lebron, "Points").await;

    let p3 = insert_parlay(db, mid_date, 30.0, parlay::ParlayStatus::Pending, None).await;
    insert_team_leg(db, p3, celtics, "Moneyline").await;
    insert_team_leg(db, p3, celtics, "Spread").await;
    insert_player_leg(db, p3, tatum, "Points").await;

    let p4 = insert_parlay(db, last_date, 55.0, parlay::ParlayStatus::Won, Some(120.0)).await;
    insert_team_leg(db, p4, warriors, "Moneyline").await;

    MixedLedger {
        celtics,
        lakers,
        lebron,
        p1,
        p2,
        p3,
        p4,
        mid_date,
        last_date,
    }
}

/// The documented arithmetic scenario: stakes [10, 20, 30], statuses
/// [won, lost, pending], payout 25 recorded on the won parlay. Legless
/// parlays are legal, so no legs are attached.
pub async fn settled_ledger(db: &DatabaseConnection) {
    let date = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
    insert_parlay(db, date, 10.0, parlay::ParlayStatus::Won, Some(25.0)).await;
    insert_parlay(db, date, 20.0, parlay::ParlayStatus::Lost, None).await;
    insert_parlay(db, date, 30.0, parlay::ParlayStatus::Pending, None).await;
}
