//! Jira 共有クライアント
//!
//! リクエストの組み立てと送信・JSONデコードを担当する。
//! 各エンドポイントのサービスはこのクライアントを借用して動作する。

use crate::config::JiraConfig;
use crate::error::{JiraError, RequestFailure, Result, TransportError};
use crate::plugins::PluginService;
use crate::transport::{HttpTransport, Request, Response, Transport};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Jira クライアント
#[derive(Clone)]
pub struct JiraClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl JiraClient {
    /// 新しいJiraClientを作成
    ///
    /// 相対パスがベースURL配下に解決されるよう、パス末尾に `/` を補う。
    /// クエリやフラグメントを含むURLは解決時に失われるため受け付けない。
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        let invalid = |reason: String| JiraError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;

        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid(
                "base URL must not contain a query or fragment".to_string(),
            ));
        }

        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        Ok(Self {
            base_url: parsed,
            transport,
        })
    }

    /// 設定から reqwest トランスポート付きで作成
    pub fn from_config(config: &JiraConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.http, &config.auth);
        Self::new(&config.base_url, Arc::new(transport))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// プラグイン管理API
    pub fn plugins(&self) -> PluginService<'_> {
        PluginService::new(self)
    }

    /// リクエストを組み立てる
    ///
    /// 先頭の `/` は無視してベースURLからの相対パスとして扱う。
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Request> {
        let relative = path.trim_start_matches('/');
        let url = self
            .base_url
            .join(relative)
            .map_err(|e| JiraError::InvalidRequest(format!("{}: {}", path, e)))?;

        let body = body
            .map(|value| serde_json::to_vec(&value))
            .transpose()
            .map_err(|e| JiraError::InvalidRequest(format!("Failed to encode body: {}", e)))?;

        Ok(Request {
            method,
            path: relative.to_string(),
            url,
            body,
        })
    }

    /// リクエストを送信し、本文を `T` としてデコードする
    ///
    /// 2xx 以外のステータスとデコード失敗は、受信したレスポンスを添えて失敗とする。
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
        cancel: &CancellationToken,
    ) -> std::result::Result<(T, Response), RequestFailure> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("request cancelled");
                return Err(RequestFailure::new(None, TransportError::Cancelled));
            }
            result = self.transport.send(request) => {
                result.map_err(|e| RequestFailure::new(None, e))?
            }
        };

        if !response.is_success() {
            warn!(status = response.status(), "request failed");
            let status = response.status();
            return Err(RequestFailure::new(
                Some(response),
                TransportError::Status { status },
            ));
        }

        match serde_json::from_slice::<T>(response.body()) {
            Ok(value) => Ok((value, response)),
            Err(e) => Err(RequestFailure::new(Some(response), TransportError::Decode(e))),
        }
    }
}

#[cfg(test)]
#[path = "jira_test.rs"]
mod tests;
