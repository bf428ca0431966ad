use {super::user::User, async_graphql::SimpleObject};

/// Result of a login: the bearer token to send as `authorization` and the
/// user it identifies.
#[derive(Clone, Debug, SimpleObject)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}
