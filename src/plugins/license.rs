//! プラグインライセンスのレスポンス型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ライセンス管理操作のリンク
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LicenseLinks {
    #[serde(rename = "self")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub self_link: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub alternate: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub license: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub update_license: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub validate_downgrade: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub license_callback: String,
}

/// `rest/plugins/latest/{key}-key/license` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginLicense {
    #[serde(deserialize_with = "super::null_as_default")]
    pub links: LicenseLinks,
    #[serde(deserialize_with = "super::null_as_default")]
    pub plugin_key: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub valid: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub evaluation: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub nearly_expired: bool,
    /// 無制限の場合は負数
    #[serde(deserialize_with = "super::null_as_default")]
    pub maximum_number_of_users: i64,
    /// エポックミリ秒
    #[serde(deserialize_with = "super::null_as_default")]
    pub maintenance_expiry_date: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub maintenance_expired: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub license_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub license_type_description_key: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub creation_date_string: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub raw_license: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub renewable: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub maintenance_expiry_date_string: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub organization_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub contact_email: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub enterprise: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub data_center: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub subscription: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub auto_renewal: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub upgradable: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub crossgradeable: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub purchase_past_server_cutoff_date: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub type_i18n_singular: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub type_i18n_plural: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub support_entitlement_number: String,
}

impl PluginLicense {
    /// 保守期限（未設定なら None）
    pub fn maintenance_expiry(&self) -> Option<DateTime<Utc>> {
        if self.maintenance_expiry_date <= 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.maintenance_expiry_date)
    }

    /// ユーザー数上限（無制限なら None）
    pub fn user_limit(&self) -> Option<u64> {
        u64::try_from(self.maximum_number_of_users).ok()
    }
}

#[cfg(test)]
#[path = "license_test.rs"]
mod tests;
