use {async_graphql::MergedObject, photo::PhotoQuery, user::UserQuery};

pub mod photo;
pub mod user;

#[derive(MergedObject, Default)]
pub struct Query(UserQuery, PhotoQuery);
