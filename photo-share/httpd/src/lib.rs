pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod graphql;
pub mod oauth;
pub mod random_user;
pub mod routes;
pub mod server;
