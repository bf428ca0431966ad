use {
    crate::{context::Context, graphql::types::photo::Photo},
    async_graphql::*,
    photo_share_sql::entity::photos,
    sea_orm::{EntityTrait, PaginatorTrait, QueryOrder},
};

#[derive(Default, Debug)]
pub struct PhotoQuery {}

#[Object]
impl PhotoQuery {
    /// Number of posted photos
    async fn total_photos(&self, ctx: &async_graphql::Context<'_>) -> Result<u64> {
        let app_ctx = ctx.data::<Context>()?;

        Ok(photos::Entity::find().count(&app_ctx.db).await?)
    }

    /// Every posted photo, oldest first
    async fn all_photos(&self, ctx: &async_graphql::Context<'_>) -> Result<Vec<Photo>> {
        let app_ctx = ctx.data::<Context>()?;

        Ok(photos::Entity::find()
            .order_by_asc(photos::Column::Created)
            .all(&app_ctx.db)
            .await?
            .into_iter()
            .map(Photo::from)
            .collect())
    }
}
