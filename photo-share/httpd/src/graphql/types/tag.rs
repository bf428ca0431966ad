use async_graphql::{SimpleObject, ID};

/// A user tagged in a photo.
#[derive(Clone, Debug, SimpleObject, Eq, PartialEq)]
pub struct Tag {
    #[graphql(name = "photoID")]
    pub photo_id: ID,
    #[graphql(name = "userID")]
    pub user_id: ID,
}
