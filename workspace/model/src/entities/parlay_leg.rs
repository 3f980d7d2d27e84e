use sea_orm::entity::prelude::*;

/// Kind of proposition the leg carries. Determines which of the team or
/// player references is meaningful; exclusivity is enforced at the write
/// boundary, not by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum LegType {
    #[sea_orm(string_value = "team")]
    Team,
    #[sea_orm(string_value = "player")]
    Player,
}

/// Outcome of a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum LegResult {
    #[sea_orm(string_value = "won")]
    Won,
    #[sea_orm(string_value = "lost")]
    Lost,
    #[sea_orm(string_value = "push")]
    Push,
    #[sea_orm(string_value = "pending")]
    Pending,
}

/// One proposition within a parlay. Belongs to exactly one parlay and is
/// created, replaced, and deleted as part of that parlay's leg collection.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "parlay_legs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub parlay_id: i32,
    pub leg_type: LegType,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    /// e.g. "Points", "Rebounds", "Moneyline".
    pub market: String,
    /// e.g. "Over 24.5", "BOS ML".
    pub selection: String,
    /// American odds, e.g. -110 or +250.
    pub odds: Option<i32>,
    #[sea_orm(default_value = "pending")]
    pub result: LegResult,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parlay::Entity",
        from = "Column::ParlayId",
        to = "super::parlay::Column::Id"
    )]
    Parlay,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
}

impl Related<super::parlay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parlay.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<common::LegType> for LegType {
    fn from(leg_type: common::LegType) -> Self {
        match leg_type {
            common::LegType::Team => Self::Team,
            common::LegType::Player => Self::Player,
        }
    }
}

impl From<LegType> for common::LegType {
    fn from(leg_type: LegType) -> Self {
        match leg_type {
            LegType::Team => Self::Team,
            LegType::Player => Self::Player,
        }
    }
}

impl From<common::LegResult> for LegResult {
    fn from(result: common::LegResult) -> Self {
        match result {
            common::LegResult::Won => Self::Won,
            common::LegResult::Lost => Self::Lost,
            common::LegResult::Push => Self::Push,
            common::LegResult::Pending => Self::Pending,
        }
    }
}

impl From<LegResult> for common::LegResult {
    fn from(result: LegResult) -> Self {
        match result {
            LegResult::Won => Self::Won,
            LegResult::Lost => Self::Lost,
            LegResult::Push => Self::Push,
            LegResult::Pending => Self::Pending,
        }
    }
}
