pub use sea_orm_migration::prelude::*;
mod idens;

mod m20240101_000001_create_table;
mod m20240102_000001_tags_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_table::Migration),
            Box::new(m20240102_000001_tags_table::Migration),
        ]
    }

    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("photo_share_seaql_migrations").into_iden()
    }
}
