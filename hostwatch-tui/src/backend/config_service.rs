//! 配置服务
//!
//! 配置文件为 TOML，位于 `<config dir>/hostwatch/config.toml`。
//! 文件不存在时使用默认配置；设置页面修改的主题与语言会写回该文件。

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use hostwatch_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::model::Theme;

/// 配置读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API 服务地址（不含 `/api` 前缀）
    pub api_url: String,
    /// 预先获取的会话 Cookie（`name=value`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
    /// 请求超时（秒），未设置时不超时
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// 主题代码（`dark` / `light`）
    pub theme: String,
    /// 语言代码（`en-US` / `pl-PL`）
    pub language: String,
    /// 日志目录
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            session_cookie: None,
            request_timeout_secs: None,
            theme: Theme::default().code().to_string(),
            language: Language::default().code().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// 解析主题，未知代码回退到默认主题
    pub fn theme(&self) -> Theme {
        Theme::from_code(&self.theme).unwrap_or_else(|| {
            log::warn!("Unknown theme '{}', using default", self.theme);
            Theme::default()
        })
    }

    /// 解析语言，未知代码回退到英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', using default", self.language);
            Language::default()
        })
    }

    /// 更新外观设置
    pub fn set_appearance(&mut self, theme: Theme, language: Language) {
        self.theme = theme.code().to_string();
        self.language = language.code().to_string();
    }

    /// 生成 API 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            session_cookie: self.session_cookie.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// 日志目录，未配置时使用 `<data dir>/hostwatch/logs`
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("hostwatch")
                .join("logs")
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hostwatch")
        .join("config.toml")
}

/// 基于 TOML 文件的配置服务
#[derive(Debug, Clone)]
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FileConfigService {
    fn default() -> Self {
        Self::new(default_config_path())
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::info!(
                "No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hostwatch-config-{}-{name}", std::process::id()))
    }

    /// 写入一份配置文件，返回其路径
    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        fs::create_dir_all(dir).unwrap_or_else(|e| panic!("create {}: {e}", dir.display()));
        fs::write(&path, content).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let service = FileConfigService::new(temp_dir("missing").join("config.toml"));
        let config = service.load().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert_eq!(config.client_config().timeout, None);
    }

    #[test]
    fn save_then_load_keeps_appearance() {
        let dir = temp_dir("roundtrip");
        let service = FileConfigService::new(dir.join("config.toml"));

        let mut config = AppConfig {
            session_cookie: Some("session=abc".into()),
            request_timeout_secs: Some(15),
            ..AppConfig::default()
        };
        config.set_appearance(Theme::Light, Language::PlPl);
        service.save(&config).unwrap_or_else(|e| panic!("{e}"));

        let loaded = service.load().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(loaded.theme(), Theme::Light);
        assert_eq!(loaded.language(), Language::PlPl);
        assert_eq!(
            loaded.client_config().timeout,
            Some(Duration::from_secs(15))
        );
        assert_eq!(loaded.session_cookie.as_deref(), Some("session=abc"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = temp_dir("partial");
        let path = write_config(&dir, "api_url = \"http://hostwatch.lan:8080\"\n");

        let config = FileConfigService::new(&path)
            .load()
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config.api_url, "http://hostwatch.lan:8080");
        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.language(), Language::EnUs);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = temp_dir("malformed");
        let path = write_config(&dir, "api_url = [");

        let result = FileConfigService::new(&path).load();
        assert!(matches!(result, Err(ConfigError::Parse { .. })), "{result:?}");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_codes_fall_back() {
        let config = AppConfig {
            theme: "neon".into(),
            language: "xx".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.language(), Language::EnUs);
    }
}
