use {
    async_graphql::MergedObject, auth::AuthMutation, development::DevelopmentMutation,
    photo::PhotoMutation,
};

pub mod auth;
pub mod development;
pub mod photo;

#[derive(MergedObject, Default)]
pub struct Mutation(AuthMutation, PhotoMutation, DevelopmentMutation);
