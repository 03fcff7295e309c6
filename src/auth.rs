use actix_web::{web, HttpResponse};
use mongodb::bson::doc;

use crate::core::db::Db;
use crate::core::errors::ApiError;
use crate::core::helpers::verify_password;
use crate::models::models::LoginRequest;

pub async fn login(
    db: web::Data<Db>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = db
        .users()
        .find_one(doc! { "username": &payload.username })
        .await?
        .ok_or(ApiError::UnknownUser)?;

    if !verify_password(&payload.password, &user.password_digest) {
        return Err(ApiError::WrongPassword);
    }

    // No session or token; success is just an acknowledgment.
    Ok(HttpResponse::Ok().body("Logged in"))
}
