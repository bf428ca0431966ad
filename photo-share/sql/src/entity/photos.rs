use sea_orm::entity::prelude::*;

#[derive(EnumIter, DeriveActiveEnum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Category {
    #[sea_orm(string_value = "SELFIE")]
    Selfie,
    #[sea_orm(string_value = "PORTRAIT")]
    Portrait,
    #[sea_orm(string_value = "ACTION")]
    Action,
    #[sea_orm(string_value = "LANDSCAPE")]
    Landscape,
    #[sea_orm(string_value = "GRAPHIC")]
    Graphic,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: Category,
    /// `github_login` of the poster.
    pub user_id: String,
    pub created: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::GithubLogin"
    )]
    User,
    #[sea_orm(
        has_many = "super::tags::Entity",
        from = "Column::Id",
        to = "super::tags::Column::PhotoId"
    )]
    Tags,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Persist a new photo in a single write and hand it back unchanged.
pub async fn insert<C>(db: &C, photo: Model) -> Result<Model, DbErr>
where
    C: ConnectionTrait,
{
    Entity::insert(ActiveModel::from(photo.clone()))
        .exec_without_returning(db)
        .await?;

    Ok(photo)
}
