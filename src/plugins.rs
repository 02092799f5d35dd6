//! Jira プラグイン管理API
//!
//! インストール済みプラグイン一覧・詳細・ライセンス情報の取得。

mod detail;
mod license;
mod service;
mod summary;

pub use detail::{ModuleDescriptor, ModuleLinks, PluginDetail};
pub use license::{LicenseLinks, PluginLicense};
pub use service::{plugin_details_path, plugin_license_path, plugins_path, PluginService};
pub use summary::{PluginCollection, PluginLinks, PluginSummary, RepositoryLinks, Vendor};

use serde::{Deserialize, Deserializer};

/// `null` を欠損と同じくデフォルト値として読む
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
