pub mod models;
pub mod test_utils;

pub use sea_orm::DbErr;

use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use util::config;

/// Connects to the database named by `DATABASE_PATH`.
///
/// Accepts either a full DSN (`sqlite:`, `postgres://`, `mysql://`) or a bare
/// SQLite file path, in which case the parent directory is created and the
/// file is opened in read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    connect_to(&database_url(&config::database_path())).await
}

pub async fn connect_to(url: &str) -> Result<DatabaseConnection, DbErr> {
    tracing::debug!(url, "Connecting to database");
    Database::connect(url).await
}

fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        return path_or_url.to_owned();
    }

    // SQLite won't create intermediate dirs.
    if let Some(parent) = Path::new(path_or_url).parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(dir = %parent.display(), error = %e, "Could not create database directory");
        }
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}
