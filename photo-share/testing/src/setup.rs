use {
    crate::fakes::{FakeOAuthProvider, FakeProfileGenerator},
    chrono::NaiveDateTime,
    photo_share_httpd::{config::PhotosConfig, context::Context},
    photo_share_sql::entity::{photos, tags, users},
    sea_orm::{DatabaseConnection, EntityTrait, Set},
    std::sync::{Arc, Once},
    tracing_subscriber::{EnvFilter, FmtSubscriber},
    uuid::Uuid,
};

// The tracing subscriber can only be set once. We ensure this by using `Once`.
static TRACING: Once = Once::new();

pub fn setup_tracing_subscriber(level: tracing::Level) {
    TRACING.call_once(|| {
        let filter = EnvFilter::new(level.to_string());

        let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("failed to set global tracing subscriber");
    });
}

pub const PHOTOS_URL_BASE: &str = "http://photos.test/img/photos";

pub struct TestSetup {
    pub context: Context,
    pub oauth: Arc<FakeOAuthProvider>,
    pub profiles: Arc<FakeProfileGenerator>,
}

impl TestSetup {
    pub fn db(&self) -> &DatabaseConnection {
        &self.context.db
    }
}

/// A migrated in-memory database with fake outbound services.
pub async fn create_context(development: bool) -> anyhow::Result<TestSetup> {
    let sql_ctx = photo_share_sql::Context::new(None, 1).await?;
    sql_ctx.migrate_db().await?;

    Ok(build_setup(sql_ctx, development))
}

/// Like [`create_context`] but the database has no tables, so every store
/// query fails.
pub async fn create_context_without_schema() -> anyhow::Result<TestSetup> {
    let sql_ctx = photo_share_sql::Context::new(None, 1).await?;

    Ok(build_setup(sql_ctx, false))
}

fn build_setup(sql_ctx: photo_share_sql::Context, development: bool) -> TestSetup {
    setup_tracing_subscriber(tracing::Level::INFO);

    let oauth = Arc::new(FakeOAuthProvider::default());
    let profiles = Arc::new(FakeProfileGenerator::default());

    let context = Context::new(
        sql_ctx,
        oauth.clone(),
        profiles.clone(),
        PhotosConfig {
            url_base: PHOTOS_URL_BASE.to_string(),
        },
        development,
    );

    TestSetup {
        context,
        oauth,
        profiles,
    }
}

pub async fn seed_user(
    db: &DatabaseConnection,
    github_login: &str,
    github_token: &str,
) -> anyhow::Result<users::Model> {
    Ok(users::upsert(db, users::Model {
        github_login: github_login.to_string(),
        name: Some(format!("{github_login} name")),
        avatar: None,
        github_token: github_token.to_string(),
    })
    .await?)
}

pub async fn seed_photo(
    db: &DatabaseConnection,
    name: &str,
    user_id: &str,
    created: &str,
) -> anyhow::Result<photos::Model> {
    Ok(photos::insert(db, photos::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        category: photos::Category::Portrait,
        user_id: user_id.to_string(),
        created: created.parse::<NaiveDateTime>()?,
    })
    .await?)
}

pub async fn seed_tag(db: &DatabaseConnection, photo_id: Uuid, user_id: &str) -> anyhow::Result<()> {
    tags::Entity::insert(tags::ActiveModel {
        photo_id: Set(photo_id),
        user_id: Set(user_id.to_string()),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}
