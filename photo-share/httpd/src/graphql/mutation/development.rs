use {
    crate::{
        context::Context,
        graphql::types::{auth_payload::AuthPayload, user::User},
    },
    async_graphql::*,
    photo_share_sql::entity::users,
    sea_orm::EntityTrait,
};

#[derive(Default, Debug)]
pub struct DevelopmentMutation {}

/// Fake users and logins bypass GitHub. Only served in development mode.
fn ensure_enabled(app_ctx: &Context) -> Result<()> {
    if !app_ctx.development {
        return Err(Error::new("development mutations are disabled"));
    }

    Ok(())
}

#[Object]
impl DevelopmentMutation {
    /// Create `count` random users
    async fn add_fake_users(
        &self,
        ctx: &async_graphql::Context<'_>,
        #[graphql(default = 1)] count: i32,
    ) -> Result<Vec<User>> {
        let app_ctx = ctx.data::<Context>()?;
        ensure_enabled(app_ctx)?;

        let Ok(count) = u32::try_from(count) else {
            return Ok(vec![]);
        };

        if count == 0 {
            return Ok(vec![]);
        }

        let generated = app_ctx.profiles.generate(count).await?;

        // Logins that already exist are left untouched and not returned.
        let inserted = users::insert_many_new(&app_ctx.db, generated).await?;

        tracing::info!(count = inserted.len(), "Fake users added");

        Ok(inserted.into_iter().map(User::from).collect())
    }

    /// Log in as an existing user without going through GitHub
    async fn fake_user_auth(
        &self,
        ctx: &async_graphql::Context<'_>,
        github_login: ID,
    ) -> Result<AuthPayload> {
        let app_ctx = ctx.data::<Context>()?;
        ensure_enabled(app_ctx)?;

        let Some(user) = users::Entity::find_by_id(github_login.as_str())
            .one(&app_ctx.db)
            .await?
        else {
            return Err(Error::new(format!(
                "Cannot find user with githubLogin {}",
                github_login.as_str()
            )));
        };

        Ok(AuthPayload {
            token: user.github_token.clone(),
            user: user.into(),
        })
    }
}
