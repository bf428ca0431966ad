use {
    crate::{
        config::{Config, PhotosConfig},
        error::Error,
        oauth::{GithubClient, OAuthProvider},
        random_user::{ProfileGenerator, RandomUserClient},
    },
    sea_orm::DatabaseConnection,
    std::sync::Arc,
};

/// Schema-wide state shared by every resolver.
#[derive(Clone)]
pub struct Context {
    pub db: DatabaseConnection,
    pub oauth: Arc<dyn OAuthProvider + Send + Sync>,
    pub profiles: Arc<dyn ProfileGenerator + Send + Sync>,
    pub photos: PhotosConfig,
    /// Enables the seeding and login bypass mutations.
    pub development: bool,
}

impl Context {
    pub fn new(
        ctx: photo_share_sql::Context,
        oauth: Arc<dyn OAuthProvider + Send + Sync>,
        profiles: Arc<dyn ProfileGenerator + Send + Sync>,
        photos: PhotosConfig,
        development: bool,
    ) -> Self {
        Self {
            db: ctx.db,
            oauth,
            profiles,
            photos,
            development,
        }
    }

    /// Connect and migrate the database, and build the outbound clients.
    pub async fn from_config(config: &Config) -> Result<Self, Error> {
        let sql_ctx = photo_share_sql::Context::new(
            Some(config.database.url.as_str()),
            config.database.max_connections,
        )
        .await?;

        sql_ctx.migrate_db().await?;

        Ok(Self::new(
            sql_ctx,
            Arc::new(GithubClient::new(&config.github)?),
            Arc::new(RandomUserClient::new(&config.random_user)?),
            config.photos.clone(),
            config.development.enabled,
        ))
    }
}
