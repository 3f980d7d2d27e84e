//! This file serves as the root for all SeaORM entity modules.
//! We define the data model for the parlay tracking application here:
//! reference data (teams, players) and the wager ledger (parlays with
//! their legs).

pub mod parlay;
pub mod parlay_leg;
pub mod player;
pub mod team;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::parlay::Entity as Parlay;
    pub use super::parlay_leg::Entity as ParlayLeg;
    pub use super::player::Entity as Player;
    pub use super::team::Entity as Team;
}
