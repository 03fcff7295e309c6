pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string())
}

pub fn database_name() -> String {
    std::env::var("DATABASE_NAME").unwrap_or_else(|_| "social".to_string())
}

pub fn listen_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(3000)
}
