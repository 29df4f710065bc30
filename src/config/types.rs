//! Server configuration.

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cars.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_PATH: &str = "/cars";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite connection URL.
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Mount point of the car routes; always starts with `/`.
    pub base_path: String,
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.into(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}
