use {
    crate::{context::Context, graphql::types::auth_payload::AuthPayload},
    async_graphql::*,
    photo_share_sql::entity::users,
};

#[derive(Default, Debug)]
pub struct AuthMutation {}

#[Object]
impl AuthMutation {
    /// Log in with GitHub. The returned token is what later requests send
    /// in the `authorization` header.
    async fn github_auth(
        &self,
        ctx: &async_graphql::Context<'_>,
        #[graphql(desc = "The code GitHub redirected back with")] code: String,
    ) -> Result<AuthPayload> {
        let app_ctx = ctx.data::<Context>()?;

        let authorization = app_ctx.oauth.authorize(&code).await?;

        let user = users::upsert(&app_ctx.db, users::Model {
            github_login: authorization.login,
            name: authorization.name,
            avatar: authorization.avatar_url,
            github_token: authorization.access_token,
        })
        .await?;

        tracing::info!(login = %user.github_login, "User authorized with GitHub");

        Ok(AuthPayload {
            token: user.github_token.clone(),
            user: user.into(),
        })
    }
}
