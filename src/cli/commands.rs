pub mod initdb;
pub mod serve;

pub use initdb::init_database;
pub use serve::serve;
