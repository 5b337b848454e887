use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct QuipuConfig {
    pub database_url: String,
    pub listen_addr: String,
    pub max_connections: u32,
    pub static_dir: PathBuf,
}

impl QuipuConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("Failed to determine DATABASE_URL from environment variables");

        let listen_addr = std::env::var("LISTEN_ADDR")
            .expect("Failed to determine LISTEN_ADDR from environment variables");

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()));

        Self {
            database_url,
            listen_addr,
            max_connections,
            static_dir,
        }
    }
}
