pub mod photos;
pub mod tags;
pub mod users;
