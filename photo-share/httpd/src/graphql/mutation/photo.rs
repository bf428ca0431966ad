use {
    crate::{
        auth::CurrentUser,
        context::Context,
        graphql::types::photo::{Photo, PostPhotoInput},
    },
    async_graphql::*,
    chrono::Utc,
    photo_share_sql::entity::photos,
    uuid::Uuid,
};

#[derive(Default, Debug)]
pub struct PhotoMutation {}

#[Object]
impl PhotoMutation {
    /// Post a photo as the authenticated user
    async fn post_photo(
        &self,
        ctx: &async_graphql::Context<'_>,
        input: PostPhotoInput,
    ) -> Result<Photo> {
        let Some(user) = ctx.data_opt::<CurrentUser>().and_then(CurrentUser::user) else {
            return Err(Error::new("only an authorized user can post a photo"));
        };

        let app_ctx = ctx.data::<Context>()?;

        let photo = photos::insert(&app_ctx.db, photos::Model {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            category: input.category.into(),
            user_id: user.github_login.clone(),
            created: Utc::now().naive_utc(),
        })
        .await?;

        tracing::debug!(id = %photo.id, user = %photo.user_id, "Photo posted");

        Ok(photo.into())
    }
}
