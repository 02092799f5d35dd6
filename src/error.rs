use crate::transport::Response;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// トランスポート層の失敗
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}")]
    Status { status: u16 },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,
}

/// 共有クライアントが返す失敗
///
/// レスポンスを受け取れていれば `response` に保持する。
#[derive(Debug)]
pub struct RequestFailure {
    pub response: Option<Response>,
    pub cause: TransportError,
}

impl RequestFailure {
    pub fn new(response: Option<Response>, cause: TransportError) -> Self {
        Self { response, cause }
    }
}

/// jplug 統一エラー型
#[derive(Debug, Error)]
pub enum JiraError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{message}")]
    Api {
        message: String,
        response: Option<Response>,
        #[source]
        source: TransportError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JiraError>;

impl JiraError {
    /// レスポンスを返す（取得できた場合のみ）
    pub fn response(&self) -> Option<&Response> {
        match self {
            JiraError::Api { response, .. } => response.as_ref(),
            _ => None,
        }
    }

    /// HTTPステータスコード
    pub fn status(&self) -> Option<u16> {
        self.response().map(Response::status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Jira のエラーレスポンス本文
///
/// `{"errorMessages": [...], "errors": {"field": "message"}}`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ErrorEnvelope {
    error_messages: Vec<String>,
    errors: BTreeMap<String, String>,
}

impl ErrorEnvelope {
    fn headline(&self) -> Option<String> {
        if let Some(first) = self.error_messages.first() {
            return Some(first.clone());
        }
        self.errors
            .iter()
            .next()
            .map(|(field, message)| format!("{} - {}", field, message))
    }
}

impl From<RequestFailure> for JiraError {
    fn from(failure: RequestFailure) -> Self {
        let RequestFailure { response, cause } = failure;
        let message = describe(response.as_ref(), &cause);
        JiraError::Api {
            message,
            response,
            source: cause,
        }
    }
}

/// 失敗内容からエラーメッセージを組み立てる
///
/// JSON本文ならエラーエンベロープの先頭メッセージ、それ以外はステータスと本文を添える。
fn describe(response: Option<&Response>, cause: &TransportError) -> String {
    let Some(response) = response else {
        return format!("No response returned: {}", cause);
    };

    if matches!(cause, TransportError::Decode(_)) {
        return format!("Could not decode response (status {}): {}", response.status(), cause);
    }

    if response.body().is_empty() {
        return cause.to_string();
    }

    if response.is_json() {
        return match serde_json::from_slice::<ErrorEnvelope>(response.body()) {
            Ok(envelope) => match envelope.headline() {
                Some(headline) => format!("{}: {}", headline, cause),
                None => cause.to_string(),
            },
            Err(e) => format!("Could not parse JSON error body ({}): {}", e, cause),
        };
    }

    format!("{}: {}", cause, response.text().trim())
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
