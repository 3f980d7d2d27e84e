pub mod health;
pub mod parlays;
pub mod players;
pub mod reports;
pub mod seed;
pub mod teams;
