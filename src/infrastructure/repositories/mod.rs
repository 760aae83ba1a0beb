// src/infrastructure/repositories/mod.rs
mod degeneracy;
mod error;
mod sqlite_issue;

pub use degeneracy::SqliteDegeneracyLookup;
pub use error::map_sqlx;
pub use sqlite_issue::SqliteIssueRepository;
