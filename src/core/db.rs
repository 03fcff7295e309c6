use anyhow::Context;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

use crate::models::models::{Post, User};

/// Handle to the backing document database. Constructed once at startup
/// and shared with every handler through `actix_web::web::Data`.
#[derive(Clone)]
pub struct Db {
    database: Database,
}

impl Db {
    /// Connects to MongoDB and verifies the server is reachable. The
    /// connection string may name a database; `fallback_name` is used when
    /// it does not. The driver connects lazily, so an unreachable server
    /// would otherwise surface on the first request rather than here.
    pub async fn connect(url: &str, fallback_name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .context("invalid MongoDB connection string")?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(fallback_name));

        database
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB is unreachable")?;

        Ok(Self { database })
    }

    pub fn users(&self) -> Collection<User> {
        self.database.collection("users")
    }

    pub fn posts(&self) -> Collection<Post> {
        self.database.collection("posts")
    }
}
