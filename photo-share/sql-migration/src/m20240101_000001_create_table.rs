use {
    crate::idens::{Photo, User},
    sea_orm_migration::{prelude::*, schema::*},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::GithubLogin)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_null(User::Name))
                    .col(string_null(User::Avatar))
                    .col(string(User::GithubToken))
                    .to_owned(),
            )
            .await?;

        // Every request resolves its caller through this column.
        manager
            .create_index(
                Index::create()
                    .name("users-github_token")
                    .table(User::Table)
                    .col(User::GithubToken)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(pk_uuid(Photo::Id))
                    .col(string(Photo::Name))
                    .col(text_null(Photo::Description))
                    .col(string(Photo::Category))
                    // No foreign key, `postedBy` resolves to null once the owner is gone.
                    .col(string(Photo::UserId))
                    .col(date_time(Photo::Created))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("photos-user_id")
                    .table(Photo::Table)
                    .col(Photo::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}
