use std::future::IntoFuture;

use actix_web::{web, HttpResponse};
use mongodb::bson::doc;
use serde_json::json;

use crate::core::db::Db;
use crate::core::errors::ApiError;
use crate::models::models::FollowRequest;

pub async fn follow(
    db: web::Data<Db>,
    path: web::Path<String>,
    payload: web::Json<FollowRequest>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    let follower = payload.into_inner().follower;

    // Two independent updates, no transaction: if one fails the other
    // stands and the request as a whole fails. No existence check on
    // either user, no dedup of repeated follows.
    let users = db.users();
    let add_follower = users
        .update_one(
            doc! { "username": &username },
            doc! { "$push": { "followers": &follower } },
        )
        .into_future();
    let add_following = users
        .update_one(
            doc! { "username": &follower },
            doc! { "$push": { "following": &username } },
        )
        .into_future();

    tokio::try_join!(add_follower, add_following)?;

    Ok(HttpResponse::Ok().body("Followed successfully"))
}

// Mirror of follow with $pull; the same non-transactional caveats apply.
pub async fn unfollow(
    db: web::Data<Db>,
    path: web::Path<String>,
    payload: web::Json<FollowRequest>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    let follower = payload.into_inner().follower;

    let users = db.users();
    let drop_follower = users
        .update_one(
            doc! { "username": &username },
            doc! { "$pull": { "followers": &follower } },
        )
        .into_future();
    let drop_following = users
        .update_one(
            doc! { "username": &follower },
            doc! { "$pull": { "following": &username } },
        )
        .into_future();

    tokio::try_join!(drop_follower, drop_following)?;

    Ok(HttpResponse::Ok().body("Unfollowed successfully"))
}

pub async fn connections(
    db: web::Data<Db>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();

    let user = db
        .users()
        .find_one(doc! { "username": &username })
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "following": user.following,
        "followers": user.followers,
    })))
}
