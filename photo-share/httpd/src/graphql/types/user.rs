use {
    super::photo::Photo,
    crate::context::Context,
    async_graphql::{ComplexObject, Result, SimpleObject, ID},
    photo_share_sql::entity::{photos, tags, users},
    sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect},
};

#[derive(Clone, Debug, SimpleObject, Eq, PartialEq, Hash)]
#[graphql(complex)]
pub struct User {
    pub github_login: ID,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl From<users::Model> for User {
    fn from(item: users::Model) -> Self {
        Self {
            github_login: item.github_login.into(),
            name: item.name,
            avatar: item.avatar,
        }
    }
}

#[ComplexObject]
impl User {
    /// Photos posted by this user
    async fn posted_photos(&self, ctx: &async_graphql::Context<'_>) -> Result<Vec<Photo>> {
        let app_ctx = ctx.data::<Context>()?;

        Ok(photos::Entity::find()
            .filter(photos::Column::UserId.eq(self.github_login.as_str()))
            .order_by_asc(photos::Column::Created)
            .all(&app_ctx.db)
            .await?
            .into_iter()
            .map(Photo::from)
            .collect())
    }

    /// Photos this user is tagged in
    async fn in_photos(&self, ctx: &async_graphql::Context<'_>) -> Result<Vec<Photo>> {
        let app_ctx = ctx.data::<Context>()?;

        Ok(photos::Entity::find()
            .inner_join(tags::Entity)
            .filter(tags::Column::UserId.eq(self.github_login.as_str()))
            .order_by_asc(photos::Column::Created)
            .all(&app_ctx.db)
            .await?
            .into_iter()
            .map(Photo::from)
            .collect())
    }
}
