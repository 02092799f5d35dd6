//! HTTPトランスポート
//!
//! Jira への送受信を抽象化するレイヤー。
//! テスト時に MockTransport を注入して通信をモック化できる。

use crate::config::{AuthProvider, Credentials, HttpConfig};
use crate::error::TransportError;
use reqwest::{Client, Method, Url};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// 送信前のリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// ベースURLからの相対パス
    pub path: String,
    /// 解決済みの絶対URL
    pub url: Url,
    /// JSONエンコード済みの本文
    pub body: Option<Vec<u8>>,
}

/// 受信したレスポンス
///
/// ステータスに関わらず本文まで読み切った状態で保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// `application/json` のレスポンスを作成
    pub fn json(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, Some("application/json;charset=UTF-8".to_string()), body)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// 2xx かどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// メディアタイプが `application/json` か（大文字小文字・パラメータは無視）
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| {
            let essence = ct.split(';').next().unwrap_or_default().trim();
            essence.eq_ignore_ascii_case("application/json")
        })
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// 本文を文字列として返す（不正なUTF-8は置換）
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// トランスポート trait
///
/// ネットワークレベルの失敗のみをエラーとし、HTTPステータスは問わず `Response` を返す。
pub trait Transport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = Result<Response, TransportError>> + Send + 'a>>;
}

/// reqwest ベースのトランスポート
pub struct HttpTransport {
    http: Client,
    auth: AuthProvider,
}

impl HttpTransport {
    /// 新しいHttpTransportを作成
    pub fn new(config: &HttpConfig, auth: &AuthProvider) -> Self {
        Self {
            http: config.build_client(),
            auth: auth.clone(),
        }
    }
}

impl Transport for HttpTransport {
    fn send<'a>(
        &'a self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = Result<Response, TransportError>> + Send + 'a>> {
        Box::pin(async move {
            let Request {
                method, url, body, ..
            } = request;

            let mut req = self
                .http
                .request(method, url)
                .header("Accept", "application/json");

            if let Some(body) = body {
                req = req.header("Content-Type", "application/json").body(body);
            }

            req = match self.auth.credentials() {
                Some(Credentials::Basic { username, token }) => {
                    req.basic_auth(username, Some(token))
                }
                Some(Credentials::Bearer(token)) => req.bearer_auth(token),
                None => req,
            };

            let response = req.send().await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.bytes().await?;

            debug!(status, bytes = body.len(), "received response");
            Ok(Response::new(status, content_type, body.to_vec()))
        })
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;
