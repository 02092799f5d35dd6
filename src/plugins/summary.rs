//! プラグイン一覧のレスポンス型

use serde::{Deserialize, Serialize};

/// プラグイン単位のリンク
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PluginLinks {
    #[serde(rename = "self")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub self_link: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub plugin_summary: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub modify: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub plugin_icon: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub plugin_logo: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub manage: String,
}

/// ベンダー情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vendor {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub marketplace_link: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub link: String,
}

/// 一覧に含まれるプラグイン1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginSummary {
    #[serde(deserialize_with = "super::null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub links: PluginLinks,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_installed: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub optional: bool,
    #[serde(rename = "static")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_static: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub unloadable: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uses_licensing: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub remotable: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub vendor: Vendor,
}

/// プラグインリポジトリ全体のナビゲーションリンク
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RepositoryLinks {
    #[serde(rename = "self")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub self_link: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub marketplace: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub notifications: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub requests: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub categories: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub banners: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub featured: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub highest_rated: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub top_grossing: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub popular: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub trending: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub atlassian: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub available: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub top_vendor: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub enter_safe_mode: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub osgi_bundles: String,
}

/// `rest/plugins/latest/` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginCollection {
    #[serde(deserialize_with = "super::null_as_default")]
    pub plugins: Vec<PluginSummary>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub links: RepositoryLinks,
}

impl PluginCollection {
    /// ユーザーがインストールしたプラグインのみ
    pub fn user_installed(&self) -> impl Iterator<Item = &PluginSummary> {
        self.plugins.iter().filter(|p| p.user_installed)
    }

    /// キーで検索
    pub fn find(&self, key: &str) -> Option<&PluginSummary> {
        self.plugins.iter().find(|p| p.key == key)
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
