use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    GithubLogin,
    Name,
    Avatar,
    GithubToken,
}

#[derive(DeriveIden)]
pub enum Photo {
    #[sea_orm(iden = "photos")]
    Table,
    Id,
    Name,
    Description,
    Category,
    UserId,
    Created,
}

#[derive(DeriveIden)]
pub enum Tag {
    #[sea_orm(iden = "tags")]
    Table,
    PhotoId,
    UserId,
}
