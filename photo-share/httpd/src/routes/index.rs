use actix_web::{get, Responder};

#[get("/")]
pub async fn index() -> impl Responder {
    "Welcome to the PhotoShare API"
}
