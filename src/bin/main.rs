use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use ripple::core::db::Db;
use ripple::{auth, config, follow, posts, users};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db = Db::connect(&config::database_url(), &config::database_name()).await?;
    tracing::info!("database connected");

    let port = config::listen_port();
    tracing::info!("server running on port {}", port);

    let db = web::Data::new(db);
    HttpServer::new(move || {
        App::new().app_data(db.clone()).service(
            web::scope("/api")
                .route("/signup", web::post().to(users::signup))
                .route("/login", web::post().to(auth::login))
                .route("/post", web::post().to(posts::create_post))
                .route("/post/like/{id}", web::put().to(posts::like_post))
                .route("/post/{username}", web::get().to(posts::list_posts))
                .route("/post/{id}", web::delete().to(posts::delete_post))
                .route("/follow/{username}", web::put().to(follow::follow))
                .route("/unfollow/{username}", web::delete().to(follow::unfollow))
                .route("/connections/{username}", web::get().to(follow::connections)),
        )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
