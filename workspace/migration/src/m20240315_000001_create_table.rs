use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create teams table
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(pk_auto(Teams::Id))
                    .col(string(Teams::Name).unique_key())
                    .col(string_null(Teams::Abbreviation).unique_key())
                    .to_owned(),
            )
            .await?;

        // Create players table
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(pk_auto(Players::Id))
                    .col(string(Players::Name))
                    .col(integer_null(Players::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team")
                            .from(Players::Table, Players::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create parlays table
        manager
            .create_table(
                Table::create()
                    .table(Parlays::Table)
                    .if_not_exists()
                    .col(pk_auto(Parlays::Id))
                    .col(date(Parlays::Date))
                    .col(double(Parlays::Stake))
                    .col(double_null(Parlays::PotentialPayout))
                    .col(string_null(Parlays::Sportsbook))
                    .col(string(Parlays::Status).default("pending"))
                    .col(text_null(Parlays::Notes))
                    .to_owned(),
            )
            .await?;

        // Create parlay_legs table; legs are owned by their parlay and are
        // removed with it.
        manager
            .create_table(
                Table::create()
                    .table(ParlayLegs::Table)
                    .if_not_exists()
                    .col(pk_auto(ParlayLegs::Id))
                    .col(integer(ParlayLegs::ParlayId))
                    .col(string(ParlayLegs::LegType))
                    .col(integer_null(ParlayLegs::TeamId))
                    .col(integer_null(ParlayLegs::PlayerId))
                    .col(string(ParlayLegs::Market))
                    .col(string(ParlayLegs::Selection))
                    .col(integer_null(ParlayLegs::Odds))
                    .col(string(ParlayLegs::Result).default("pending"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parlay_leg_parlay")
                            .from(ParlayLegs::Table, ParlayLegs::ParlayId)
                            .to(Parlays::Table, Parlays::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parlay_leg_team")
                            .from(ParlayLegs::Table, ParlayLegs::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parlay_leg_player")
                            .from(ParlayLegs::Table, ParlayLegs::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reports filter on date and join legs by parlay/team/player ids.
        manager
            .create_index(
                Index::create()
                    .name("idx_parlays_date")
                    .table(Parlays::Table)
                    .col(Parlays::Date)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_parlay_legs_parlay_id")
                    .table(ParlayLegs::Table)
                    .col(ParlayLegs::ParlayId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_parlay_legs_team_id")
                    .table(ParlayLegs::Table)
                    .col(ParlayLegs::TeamId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_parlay_legs_player_id")
                    .table(ParlayLegs::Table)
                    .col(ParlayLegs::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParlayLegs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Parlays::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    Name,
    Abbreviation,
}

#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
    Name,
    TeamId,
}

#[derive(DeriveIden)]
enum Parlays {
    Table,
    Id,
    Date,
    Stake,
    PotentialPayout,
    Sportsbook,
    Status,
    Notes,
}

#[derive(DeriveIden)]
enum ParlayLegs {
    Table,
    Id,
    ParlayId,
    LegType,
    TeamId,
    PlayerId,
    Market,
    Selection,
    Odds,
    Result,
}
