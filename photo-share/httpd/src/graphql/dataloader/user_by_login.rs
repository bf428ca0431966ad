use {
    crate::graphql::types::user::User,
    async_graphql::dataloader::*,
    photo_share_sql::entity::users,
    sea_orm::{entity::prelude::*, DatabaseConnection},
    std::{collections::HashMap, sync::Arc},
};

pub struct UserByLoginDataLoader {
    pub db: DatabaseConnection,
}

impl Loader<String> for UserByLoginDataLoader {
    type Error = Arc<sea_orm::DbErr>;
    type Value = User;

    // A single SQL query resolves `postedBy` for every photo in the response.
    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        Ok(users::Entity::find()
            .filter(users::Column::GithubLogin.is_in(keys.iter().cloned()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|user| (user.github_login.clone(), user.into()))
            .collect())
    }
}
