//! Local cache persistence: SQLite database holding copies of joined
//! programs.

pub mod database;
pub mod migrations;
pub mod programs;

pub use programs::{CustomProgramStorage, SqliteProgramCache};
