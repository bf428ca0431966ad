use {
    crate::context::Context,
    async_graphql::{dataloader::DataLoader, extensions, EmptySubscription, Schema},
    dataloader::user_by_login::UserByLoginDataLoader,
    mutation::Mutation,
    query::Query,
    types::tag::Tag,
};

pub mod dataloader;
pub mod mutation;
pub mod query;
pub mod scalars;
pub mod types;

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(app_ctx: Context) -> AppSchema {
    let user_by_login_loader = DataLoader::new(
        UserByLoginDataLoader {
            db: app_ctx.db.clone(),
        },
        tokio::spawn,
    );

    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .extension(extensions::Logger)
        // Not reachable from a field yet, exposed for clients generating types.
        .register_output_type::<Tag>()
        .data(app_ctx)
        .data(user_by_login_loader)
        .finish()
}
