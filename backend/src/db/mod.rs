pub mod filter;
pub mod store;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;

pub use store::DbStore;

pub fn sqlite_url(data: &Path) -> String {
    let db_path = data.join("blog.db");
    format!(
        "sqlite://{}?mode=rwc&journal_mode=WAL",
        db_path.to_string_lossy()
    )
}

/// Opens the database and brings its schema up to date.
pub async fn prepare_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(db_url).await?;
    Migrator::up(&db, None).await?;
    log::info!("database ready: {}", db_url);
    Ok(db)
}
