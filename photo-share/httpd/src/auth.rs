use {
    actix_web::http::header::{HeaderMap, AUTHORIZATION},
    photo_share_sql::entity::users,
    sea_orm::DatabaseConnection,
};

/// The caller of a GraphQL request. `None` means unauthenticated.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser(pub Option<users::Model>);

impl CurrentUser {
    pub fn user(&self) -> Option<&users::Model> {
        self.0.as_ref()
    }
}

/// Resolve the caller from the raw `authorization` header value.
///
/// The value is an opaque key matched against stored GitHub tokens: nothing
/// is decoded and nothing expires. Every failure, a lookup error included,
/// leaves the request unauthenticated.
pub async fn current_user(db: &DatabaseConnection, headers: &HeaderMap) -> CurrentUser {
    let Some(token) = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty())
    else {
        return CurrentUser(None);
    };

    match users::find_by_token(db, token).await {
        Ok(user) => {
            tracing::debug!(authenticated = user.is_some(), "Resolved caller");

            CurrentUser(user)
        },
        Err(error) => {
            tracing::warn!(%error, "Failed to resolve caller");

            CurrentUser(None)
        },
    }
}
