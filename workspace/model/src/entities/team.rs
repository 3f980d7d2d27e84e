use sea_orm::entity::prelude::*;

/// A team that can be referenced by players and by team-type parlay legs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Short code like "BOS" or "LAL".
    #[sea_orm(unique)]
    pub abbreviation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
    #[sea_orm(has_many = "super::parlay_leg::Entity")]
    ParlayLeg,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::parlay_leg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParlayLeg.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
