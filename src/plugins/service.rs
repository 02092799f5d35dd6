//! プラグイン管理APIの問い合わせ
//!
//! 各操作はキャンセル可能な `*_with_cancel` と、キャンセルされないトークンを使う既定版を持つ。

use super::{PluginCollection, PluginDetail, PluginLicense};
use crate::error::Result;
use crate::jira::JiraClient;
use crate::transport::Response;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// プラグイン一覧のパス
pub fn plugins_path() -> &'static str {
    "rest/plugins/latest/"
}

/// プラグイン詳細のパス
///
/// キーはエスケープせずそのまま埋め込み、`-key` を付与する。
pub fn plugin_details_path(plugin_key: &str) -> String {
    format!("rest/plugins/latest/{}-key", plugin_key)
}

/// ライセンス詳細のパス
pub fn plugin_license_path(plugin_key: &str) -> String {
    format!("rest/plugins/latest/{}-key/license", plugin_key)
}

/// プラグイン管理APIサービス
#[derive(Debug, Clone, Copy)]
pub struct PluginService<'a> {
    client: &'a JiraClient,
}

impl<'a> PluginService<'a> {
    pub fn new(client: &'a JiraClient) -> Self {
        Self { client }
    }

    /// インストール済みプラグイン一覧を取得
    pub async fn list_plugins_with_cancel(
        self,
        cancel: &CancellationToken,
    ) -> Result<(PluginCollection, Response)> {
        self.get(plugins_path(), cancel).await
    }

    pub async fn list_plugins(self) -> Result<(PluginCollection, Response)> {
        self.list_plugins_with_cancel(&CancellationToken::new())
            .await
    }

    /// プラグイン詳細（モジュール一覧を含む）を取得
    pub async fn get_plugin_details_with_cancel(
        self,
        plugin_key: &str,
        cancel: &CancellationToken,
    ) -> Result<(PluginDetail, Response)> {
        self.get(&plugin_details_path(plugin_key), cancel).await
    }

    pub async fn get_plugin_details(self, plugin_key: &str) -> Result<(PluginDetail, Response)> {
        self.get_plugin_details_with_cancel(plugin_key, &CancellationToken::new())
            .await
    }

    /// プラグインのライセンス情報を取得
    pub async fn get_plugin_license_details_with_cancel(
        self,
        plugin_key: &str,
        cancel: &CancellationToken,
    ) -> Result<(PluginLicense, Response)> {
        self.get(&plugin_license_path(plugin_key), cancel).await
    }

    pub async fn get_plugin_license_details(
        self,
        plugin_key: &str,
    ) -> Result<(PluginLicense, Response)> {
        self.get_plugin_license_details_with_cancel(plugin_key, &CancellationToken::new())
            .await
    }

    async fn get<T: DeserializeOwned>(
        self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<(T, Response)> {
        let request = self.client.new_request(Method::GET, path, None)?;
        let decoded = self.client.execute(request, cancel).await?;
        Ok(decoded)
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
