//! プラグイン詳細のレスポンス型

use super::summary::{PluginLinks, Vendor};
use serde::{Deserialize, Serialize};

/// モジュール単位のリンク
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleLinks {
    #[serde(rename = "self")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub self_link: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub modify: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub plugin: String,
}

/// プラグインが登録するモジュール
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleDescriptor {
    #[serde(deserialize_with = "super::null_as_default")]
    pub key: String,
    /// `plugin.key:module.key` 形式
    #[serde(deserialize_with = "super::null_as_default")]
    pub complete_key: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub links: ModuleLinks,
    #[serde(deserialize_with = "super::null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub optional: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub recognisable_type: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub broken: bool,
}

/// `rest/plugins/latest/{key}-key` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginDetail {
    #[serde(deserialize_with = "super::null_as_default")]
    pub links: PluginLinks,
    #[serde(deserialize_with = "super::null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub enabled_by_default: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub modules: Vec<ModuleDescriptor>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_installed: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub optional: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub unrecognised_module_types: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub unloadable: bool,
    #[serde(rename = "static")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_static: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uses_licensing: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub remotable: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub vendor: Vendor,
}

impl PluginDetail {
    pub fn enabled_modules(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter().filter(|m| m.enabled)
    }

    pub fn broken_modules(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter().filter(|m| m.broken)
    }
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
