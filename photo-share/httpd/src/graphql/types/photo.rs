use {
    super::user::User,
    crate::{
        context::Context,
        graphql::{dataloader::user_by_login::UserByLoginDataLoader, scalars::Iso8601DateTime},
    },
    async_graphql::{dataloader::DataLoader, *},
    photo_share_sql::entity::{photos, tags, users},
    sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect},
    uuid::Uuid,
};

#[derive(Enum, Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
#[graphql(name = "PhotoCategory")]
pub enum Category {
    Selfie,
    #[default]
    Portrait,
    Action,
    Landscape,
    Graphic,
}

impl From<photos::Category> for Category {
    fn from(category: photos::Category) -> Category {
        match category {
            photos::Category::Selfie => Category::Selfie,
            photos::Category::Portrait => Category::Portrait,
            photos::Category::Action => Category::Action,
            photos::Category::Landscape => Category::Landscape,
            photos::Category::Graphic => Category::Graphic,
        }
    }
}

impl From<Category> for photos::Category {
    fn from(category: Category) -> photos::Category {
        match category {
            Category::Selfie => photos::Category::Selfie,
            Category::Portrait => photos::Category::Portrait,
            Category::Action => photos::Category::Action,
            Category::Landscape => photos::Category::Landscape,
            Category::Graphic => photos::Category::Graphic,
        }
    }
}

#[derive(InputObject, Debug)]
pub struct PostPhotoInput {
    pub name: String,
    #[graphql(default)]
    pub category: Category,
    pub description: Option<String>,
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(complex)]
pub struct Photo {
    #[graphql(skip)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub created: Iso8601DateTime,
    #[graphql(skip)]
    pub user_id: String,
}

impl From<photos::Model> for Photo {
    fn from(item: photos::Model) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            category: item.category.into(),
            created: item.created.into(),
            user_id: item.user_id,
        }
    }
}

#[ComplexObject]
impl Photo {
    async fn id(&self) -> ID {
        self.id.into()
    }

    /// Where the image is served from
    async fn url(&self, ctx: &async_graphql::Context<'_>) -> Result<String> {
        let app_ctx = ctx.data::<Context>()?;

        Ok(app_ctx.photos.photo_url(self.id))
    }

    /// The user who posted this photo, absent if that user no longer exists
    async fn posted_by(&self, ctx: &async_graphql::Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data_unchecked::<DataLoader<UserByLoginDataLoader>>();

        Ok(loader.load_one(self.user_id.clone()).await?)
    }

    /// Users tagged in this photo
    async fn tagged_users(&self, ctx: &async_graphql::Context<'_>) -> Result<Vec<User>> {
        let app_ctx = ctx.data::<Context>()?;

        Ok(users::Entity::find()
            .inner_join(tags::Entity)
            .filter(tags::Column::PhotoId.eq(self.id))
            .order_by_asc(users::Column::GithubLogin)
            .all(&app_ctx.db)
            .await?
            .into_iter()
            .map(User::from)
            .collect())
    }
}
