use actix_web::{web, HttpResponse};
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use serde_json::json;

use crate::core::db::Db;
use crate::core::errors::ApiError;
use crate::core::helpers::parse_object_id;
use crate::models::models::{CreatePostRequest, Post};

pub async fn create_post(
    db: web::Data<Db>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    // The owner username is not checked against the users collection.
    let mut post = Post {
        id: None,
        title: payload.title,
        content: payload.content,
        username: payload.username,
        likes: 0,
    };

    let result = db.posts().insert_one(&post).await?;
    post.id = result.inserted_id.as_object_id();

    Ok(HttpResponse::Created().json(json!({
        "message": "Post created successfully",
        "post": post,
    })))
}

pub async fn list_posts(
    db: web::Data<Db>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();

    let mut cursor = db.posts().find(doc! { "username": &username }).await?;

    let mut posts = Vec::new();
    while cursor.advance().await? {
        posts.push(cursor.deserialize_current()?);
    }

    // "No posts" and "no such user" are indistinguishable here.
    if posts.is_empty() {
        return Err(ApiError::NotFound(
            "No posts found for the specified username".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(posts))
}

pub async fn delete_post(
    db: web::Data<Db>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;

    let result = db.posts().delete_one(doc! { "_id": id }).await?;

    if result.deleted_count == 0 {
        return Err(ApiError::NotFound("Post not found".to_string()));
    }

    Ok(HttpResponse::Ok().body("Post deleted successfully"))
}

pub async fn like_post(
    db: web::Data<Db>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;

    // Single server-side increment; concurrent likes must all count.
    let updated = db
        .posts()
        .find_one_and_update(doc! { "_id": id }, doc! { "$inc": { "likes": 1 } })
        .return_document(ReturnDocument::After)
        .await?;

    if updated.is_none() {
        return Err(ApiError::NotFound("Post not found".to_string()));
    }

    Ok(HttpResponse::Ok().body("Post liked"))
}
