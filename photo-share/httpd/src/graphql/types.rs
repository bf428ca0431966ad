pub mod auth_payload;
pub mod photo;
pub mod tag;
pub mod user;
