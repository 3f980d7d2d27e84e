use sea_orm::entity::prelude::*;

/// A player. The team link is optional so unassigned players are legal.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub team_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
    #[sea_orm(has_many = "super::parlay_leg::Entity")]
    ParlayLeg,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::parlay_leg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParlayLeg.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
