mod development;
mod schema;
mod users;
