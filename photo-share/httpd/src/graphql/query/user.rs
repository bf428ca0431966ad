use {
    crate::{auth::CurrentUser, context::Context, graphql::types::user::User},
    async_graphql::*,
    photo_share_sql::entity::users,
    sea_orm::{EntityTrait, PaginatorTrait, QueryOrder},
};

#[derive(Default, Debug)]
pub struct UserQuery {}

#[Object]
impl UserQuery {
    /// The user sending the request, if authenticated
    async fn me(&self, ctx: &async_graphql::Context<'_>) -> Option<User> {
        ctx.data_opt::<CurrentUser>()
            .and_then(CurrentUser::user)
            .cloned()
            .map(User::from)
    }

    /// Number of known users
    async fn total_users(&self, ctx: &async_graphql::Context<'_>) -> Result<u64> {
        let app_ctx = ctx.data::<Context>()?;

        Ok(users::Entity::find().count(&app_ctx.db).await?)
    }

    /// Every known user, ordered by GitHub login
    async fn all_users(&self, ctx: &async_graphql::Context<'_>) -> Result<Vec<User>> {
        let app_ctx = ctx.data::<Context>()?;

        Ok(users::Entity::find()
            .order_by_asc(users::Column::GithubLogin)
            .all(&app_ctx.db)
            .await?
            .into_iter()
            .map(User::from)
            .collect())
    }
}
