use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Absent means no persistence backend is configured; signups are then
    /// logged instead of stored and the endpoint still reports success.
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:3001".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let cors_origin: HeaderValue = env::var("CORS_ORIGIN")
            .unwrap_or("http://localhost:3000".to_string())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        Self {
            bind_addr,
            cors_origin,
            database_url,
        }
    }
}
