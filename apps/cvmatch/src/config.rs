use anyhow::{Context, Result};

/// Core configuration loaded from environment variables.
/// Every variable has a default; the core never refuses to start over
/// missing configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default page size handed to table controllers that do not carry a
    /// preset of their own.
    pub default_page_size: usize,
    /// Login entry point the guard redirects unauthenticated sessions to.
    pub login_path: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_page_size = std::env::var("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<usize>()
            .context("DEFAULT_PAGE_SIZE must be a positive integer")?;

        Ok(Config {
            // Zero would make every derived view empty; clamp like the
            // table controls do.
            default_page_size: default_page_size.max(1),
            login_path: std::env::var("LOGIN_PATH").unwrap_or_else(|_| "/login".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_page_size: 10,
            login_path: "/login".to_string(),
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_page_size() {
        let config = Config::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.login_path, "/login");
    }
}
