// crates/db/src/queries/mod.rs
// Job and company CRUD operations for the jobly SQLite database.

mod companies;
mod jobs;
pub mod sql;
mod types;

pub use types::*;
