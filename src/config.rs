//! HTTP設定・認証プロバイダー・接続設定

use crate::error::{JiraError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "jplug-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 環境変数を取得（空白のみの値は未設定として扱う）
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// 認証情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// ユーザー名 + APIトークン（Basic認証）
    Basic { username: String, token: String },
    /// パーソナルアクセストークン（Bearer）
    Bearer(String),
}

/// 認証プロバイダー
///
/// 未設定なら匿名でアクセスする。
#[derive(Debug, Clone, Default)]
pub struct AuthProvider {
    credentials: Option<Credentials>,
}

impl AuthProvider {
    /// 新しいAuthProviderを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// Basic認証を設定
    pub fn with_basic(mut self, username: impl Into<String>, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Basic {
            username: username.into(),
            token: token.into(),
        });
        self
    }

    /// Bearerトークンを設定
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Bearer(token.into()));
        self
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.credentials.is_none()
    }
}

/// 設定ファイル（~/.jplug/config.toml）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub pat: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// ファイルから読み込む（存在しなければ空の設定）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            JiraError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

/// コマンドライン引数による上書き
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub config_path: Option<PathBuf>,
}

/// Jira 接続設定
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub http: HttpConfig,
    pub auth: AuthProvider,
}

impl JiraConfig {
    /// 匿名・デフォルトHTTP設定で作成
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: HttpConfig::default(),
            auth: AuthProvider::new(),
        }
    }

    pub fn with_auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    /// 設定ファイルのデフォルトパス
    ///
    /// 優先順位:
    /// 1. 環境変数 JPLUG_CONFIG
    /// 2. ~/.jplug/config.toml
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = env_var("JPLUG_CONFIG") {
            return Some(PathBuf::from(path));
        }
        env_var("HOME").map(|home| PathBuf::from(home).join(".jplug").join("config.toml"))
    }

    /// 引数・環境変数・設定ファイルから設定を解決
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let file = match overrides.config_path.clone().or_else(Self::default_path) {
            Some(path) => ConfigFile::load_from(&path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file, overrides)
    }

    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn resolve(file: ConfigFile, overrides: &ConfigOverrides) -> Result<Self> {
        let base_url = overrides
            .url
            .clone()
            .or_else(|| env_var("JIRA_URL"))
            .or(file.url)
            .ok_or_else(|| {
                JiraError::Config(
                    "Jira URL is not set. Use --url, JIRA_URL or the config file".to_string(),
                )
            })?;

        let username = overrides
            .username
            .clone()
            .or_else(|| env_var("JIRA_USERNAME"))
            .or(file.username);
        let token = overrides
            .token
            .clone()
            .or_else(|| env_var("JIRA_API_TOKEN"))
            .or(file.token);
        let pat = env_var("JIRA_PAT").or(file.pat);

        let auth = match (username, token, pat) {
            (Some(username), Some(token), _) => AuthProvider::new().with_basic(username, token),
            (_, None, Some(pat)) => AuthProvider::new().with_bearer(pat),
            (None, Some(_), _) => {
                return Err(JiraError::Config(
                    "An API token requires a username (--username or JIRA_USERNAME)".to_string(),
                ))
            }
            _ => AuthProvider::new(),
        };

        let mut http = HttpConfig::default();
        if let Some(secs) = file.timeout_secs {
            http.timeout = Some(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url,
            http,
            auth,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
