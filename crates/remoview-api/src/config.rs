use std::env;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("REMOVIEW_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origin = env::var("REMOVIEW_CORS_ORIGIN")
            .ok()
            .filter(|origin| !origin.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        Self { port, cors_origin }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ApiConfig { port: 8080, ..ApiConfig::default() };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(ApiConfig::default().cors_origin, "http://localhost:3000");
    }
}
