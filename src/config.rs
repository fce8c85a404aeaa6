/// Server configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server listen port.
    pub port: u16,
    /// Server bind host.
    pub host: String,
    /// Square notation used when a move request does not name one.
    pub default_notation: String,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            host: std::env::var("HOST").unwrap_or(defaults.host),
            default_notation: std::env::var("CHESS_NOTATION")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.default_notation),
        }
    }

    /// Socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: 8082,
            host: "0.0.0.0".to_string(),
            default_notation: "index".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8082);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.default_notation, "index");
        assert_eq!(config.bind_addr(), "0.0.0.0:8082");
    }

    #[test]
    fn custom_bind_addr() {
        let config = AppConfig {
            port: 9000,
            host: "127.0.0.1".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }
}
