use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub graphql: GraphQlConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream API exposing the `generateDocument` mutation
#[derive(Debug, Deserialize, Clone)]
pub struct GraphQlConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl GraphQlConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[graphql]
url = "http://localhost:8080/graphql"
timeout_secs = 30
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to the embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.graphql.url.trim().is_empty() {
        anyhow::bail!("[graphql] url must not be empty");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.graphql.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_defaults_when_omitted() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8081

            [graphql]
            url = "https://api.example.com/graphql"
            "#,
        )
        .unwrap();
        assert_eq!(config.graphql.timeout_secs, 30);
    }

    #[test]
    fn test_empty_graphql_url_is_rejected() {
        let err = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8081

            [graphql]
            url = " "
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("url"));
    }
}
