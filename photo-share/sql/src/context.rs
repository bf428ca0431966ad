use {
    photo_share_sql_migration::{Migrator, MigratorTrait},
    sea_orm::{ConnectOptions, Database, DatabaseConnection},
    std::time::Duration,
};

const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct Context {
    pub db: DatabaseConnection,
}

impl Context {
    /// Connect to `database_url`, or to an in-memory SQLite database when
    /// none is given.
    pub async fn new(
        database_url: Option<&str>,
        max_connections: u32,
    ) -> Result<Self, sea_orm::DbErr> {
        let db = match database_url {
            Some(database_url) => Self::connect_db_with_url(database_url, max_connections).await?,
            None => Self::connect_db_with_url(IN_MEMORY_DATABASE_URL, max_connections).await?,
        };

        Ok(Self { db })
    }

    pub async fn migrate_db(&self) -> Result<(), sea_orm::DbErr> {
        Migrator::up(&self.db, None).await
    }

    pub async fn connect_db_with_url(
        database_url: &str,
        max_connections: u32,
    ) -> Result<DatabaseConnection, sea_orm::DbErr> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(max_connections)
            .connect_timeout(CONNECT_TIMEOUT)
            .sqlx_logging(false);

        match Database::connect(opt).await {
            Ok(db) => {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    backend = ?sea_orm::ConnectionTrait::get_database_backend(&db),
                    "Connected to database"
                );

                Ok(db)
            },
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::error!(%error, "Failed to connect to database");

                Err(error)
            },
        }
    }
}
