use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// Usernames are intended to be unique but no index enforces it.
#[derive(Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    #[serde(rename = "passwordDigest")]
    pub password_digest: String,
    pub followers: Vec<String>,
    pub following: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    pub username: String,
    pub likes: i64,
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub username: String,
}

#[derive(Deserialize)]
pub struct FollowRequest {
    pub follower: String,
}
