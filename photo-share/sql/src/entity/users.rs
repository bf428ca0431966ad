use {
    itertools::Itertools,
    sea_orm::{entity::prelude::*, sea_query::OnConflict},
    std::collections::HashSet,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Hash)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub github_login: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    /// Opaque bearer credential, replaced on every successful login.
    pub github_token: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "super::photos::Entity",
        from = "Column::GithubLogin",
        to = "super::photos::Column::UserId"
    )]
    Photos,
    #[sea_orm(
        has_many = "super::tags::Entity",
        from = "Column::GithubLogin",
        to = "super::tags::Column::UserId"
    )]
    Tags,
}

impl Related<super::photos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photos.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Find the user whose stored token equals `github_token`.
pub async fn find_by_token<C>(db: &C, github_token: &str) -> Result<Option<Model>, DbErr>
where
    C: ConnectionTrait,
{
    Entity::find()
        .filter(Column::GithubToken.eq(github_token))
        .one(db)
        .await
}

/// Insert the user, or refresh profile and token when the login exists.
pub async fn upsert<C>(db: &C, user: Model) -> Result<Model, DbErr>
where
    C: ConnectionTrait,
{
    Entity::insert(ActiveModel::from(user.clone()))
        .on_conflict(
            OnConflict::column(Column::GithubLogin)
                .update_columns([Column::Name, Column::Avatar, Column::GithubToken])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(user)
}

/// Insert the users whose login is not stored yet and return exactly those.
///
/// Stored users are never modified. Later duplicates of a login in `users`
/// are dropped.
pub async fn insert_many_new<C>(db: &C, users: Vec<Model>) -> Result<Vec<Model>, DbErr>
where
    C: ConnectionTrait,
{
    let users = users
        .into_iter()
        .unique_by(|user| user.github_login.clone())
        .collect::<Vec<_>>();

    if users.is_empty() {
        return Ok(vec![]);
    }

    let existing = Entity::find()
        .filter(Column::GithubLogin.is_in(users.iter().map(|user| user.github_login.clone())))
        .all(db)
        .await?
        .into_iter()
        .map(|user| user.github_login)
        .collect::<HashSet<_>>();

    let new_users = users
        .into_iter()
        .filter(|user| !existing.contains(&user.github_login))
        .collect::<Vec<_>>();

    if new_users.is_empty() {
        return Ok(vec![]);
    }

    Entity::insert_many(new_users.iter().cloned().map(ActiveModel::from))
        .on_conflict(OnConflict::column(Column::GithubLogin).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

    Ok(new_users)
}
