use sea_orm::entity::prelude::*;

/// Settlement state of a parlay as stored in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ParlayStatus {
    #[sea_orm(string_value = "won")]
    Won,
    #[sea_orm(string_value = "lost")]
    Lost,
    #[sea_orm(string_value = "pending")]
    Pending,
}

/// A single multi-leg wager. Owns its legs; deleting a parlay cascades to
/// them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parlays")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub stake: f64,
    /// Payout if the parlay wins. Absent means the payout was never
    /// recorded and counts as zero in reporting.
    pub potential_payout: Option<f64>,
    pub sportsbook: Option<String>,
    #[sea_orm(default_value = "pending")]
    pub status: ParlayStatus,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::parlay_leg::Entity")]
    ParlayLeg,
}

impl Related<super::parlay_leg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParlayLeg.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<common::ParlayStatus> for ParlayStatus {
    fn from(status: common::ParlayStatus) -> Self {
        match status {
            common::ParlayStatus::Won => Self::Won,
            common::ParlayStatus::Lost => Self::Lost,
            common::ParlayStatus::Pending => Self::Pending,
        }
    }
}

impl From<ParlayStatus> for common::ParlayStatus {
    fn from(status: ParlayStatus) -> Self {
        match status {
            ParlayStatus::Won => Self::Won,
            ParlayStatus::Lost => Self::Lost,
            ParlayStatus::Pending => Self::Pending,
        }
    }
}
