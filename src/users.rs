use actix_web::{web, HttpResponse};

use crate::core::db::Db;
use crate::core::errors::ApiError;
use crate::core::helpers::hash_password;
use crate::models::models::{SignupRequest, User};

pub async fn signup(
    db: web::Data<Db>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let password_digest = hash_password(&payload.password)?;

    let user = User {
        id: None,
        username: payload.username,
        email: payload.email,
        password_digest,
        followers: Vec::new(),
        following: Vec::new(),
    };

    // No duplicate-username check; two signups with the same name both insert.
    db.users().insert_one(&user).await?;

    Ok(HttpResponse::Ok().body("User created"))
}
