use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use crate::shared::error::TrackerError;
use crate::shared::result::Result;

/// 应用配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub github: GithubConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub sqlite_path: PathBuf,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            sqlite_path: PathBuf::from("starboard.db"),
            max_connections: 10,
        }
    }
}

/// GitHub API 配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            timeout_secs: 5,
            user_agent: concat!("starboard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// 命令行覆盖项
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub db_path: Option<PathBuf>,
    pub bind_address: Option<SocketAddr>,
    pub github_api_url: Option<String>,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TrackerError::Config(e.to_string()))
    }

    /// 从命令行参数和文件加载配置
    ///
    /// 配置文件不存在时使用默认值；文件存在但无法解析则报错。
    pub fn from_args_and_file(path: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            Config::default()
        };

        // 命令行参数覆盖配置文件
        if let Some(db_path) = overrides.db_path {
            config.database.sqlite_path = db_path;
        }
        if let Some(bind_address) = overrides.bind_address {
            config.server.bind_address = bind_address;
        }
        if let Some(api_url) = overrides.github_api_url {
            config.github.api_base_url = api_url;
        }

        if config.github.timeout_secs == 0 {
            return Err(TrackerError::Config(
                "github.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.server.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.github.api_base_url, "https://api.github.com");
        assert_eq!(config.github.timeout_secs, 5);
        assert!(config.github.user_agent.starts_with("starboard/"));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [github]
            timeout_secs = 2

            [database]
            sqlite_path = "/tmp/stars.db"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.github.timeout_secs, 2);
        assert_eq!(config.github.api_base_url, "https://api.github.com");
        assert_eq!(config.database.sqlite_path, PathBuf::from("/tmp/stars.db"));
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = Config::from_toml("[server\nbind_address = 1").unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn missing_file_falls_back_and_overrides_apply() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::from_args_and_file(
            &dir.path().join("absent.toml"),
            Overrides {
                db_path: Some(PathBuf::from("other.db")),
                bind_address: Some(SocketAddr::from(([0, 0, 0, 0], 9000))),
                github_api_url: Some("http://127.0.0.1:1".to_string()),
            },
        )
        .expect("defaults");

        assert_eq!(config.database.sqlite_path, PathBuf::from("other.db"));
        assert_eq!(config.server.bind_address.port(), 9000);
        assert_eq!(config.github.api_base_url, "http://127.0.0.1:1");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[github]\ntimeout_secs = 0\n").expect("write config");

        let err = Config::from_args_and_file(&path, Overrides::default()).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
