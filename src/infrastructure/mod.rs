pub mod github;
pub mod sqlite;
