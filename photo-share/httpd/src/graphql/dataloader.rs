pub mod user_by_login;
