//! jplug license コマンド
//!
//! プラグインのライセンス状態を表示する。

use crate::output::{or_dash, print_json, print_yaml, yes_no, OutputFormat};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use jplug::plugins::PluginLicense;
use jplug::JiraClient;
use owo_colors::OwoColorize;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Parser)]
pub struct Args {
    /// Plugin key (e.g. com.atlassian.jira.jira-core)
    pub key: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

pub async fn run(
    args: Args,
    client: &JiraClient,
    cancel: &CancellationToken,
) -> Result<(), String> {
    let (license, _) = client
        .plugins()
        .get_plugin_license_details_with_cancel(&args.key, cancel)
        .await
        .map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Table => {
            print_table(&license);
            Ok(())
        }
        OutputFormat::Json => print_json(&license),
        OutputFormat::Yaml => print_yaml(&license),
    }
}

fn print_table(license: &PluginLicense) {
    println!("License");
    println!("=======");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Plugin Key".to_string(), license.plugin_key.clone()]);
    table.add_row(vec!["State".to_string(), license_state(license)]);
    table.add_row(vec![
        "Type".to_string(),
        or_dash(&license.license_type).to_string(),
    ]);
    table.add_row(vec!["Users".to_string(), format_user_limit(license)]);
    table.add_row(vec![
        "Maintenance Expiry".to_string(),
        format_maintenance_expiry(license),
    ]);
    table.add_row(vec![
        "Organization".to_string(),
        or_dash(&license.organization_name).to_string(),
    ]);
    table.add_row(vec![
        "Contact".to_string(),
        or_dash(&license.contact_email).to_string(),
    ]);
    table.add_row(vec![
        "SEN".to_string(),
        or_dash(&license.support_entitlement_number).to_string(),
    ]);
    table.add_row(vec!["Tier".to_string(), format_tier(license)]);
    table.add_row(vec![
        "Renewable".to_string(),
        yes_no(license.renewable).to_string(),
    ]);
    table.add_row(vec![
        "Upgradable".to_string(),
        yes_no(license.upgradable).to_string(),
    ]);

    println!("{table}");
}

/// ライセンス状態の要約
fn license_state(license: &PluginLicense) -> String {
    if !license.valid {
        return "invalid".red().to_string();
    }
    if license.maintenance_expired {
        return "maintenance expired".yellow().to_string();
    }
    if license.evaluation {
        return "evaluation".yellow().to_string();
    }
    if license.nearly_expired {
        return "nearly expired".yellow().to_string();
    }
    "valid".green().to_string()
}

fn format_user_limit(license: &PluginLicense) -> String {
    match license.user_limit() {
        Some(limit) => limit.to_string(),
        None => "Unlimited".to_string(),
    }
}

/// 保守期限を日付で表示（取得できなければサーバーの表示文字列）
fn format_maintenance_expiry(license: &PluginLicense) -> String {
    match license.maintenance_expiry() {
        Some(expiry) => expiry.format("%Y-%m-%d").to_string(),
        None => or_dash(&license.maintenance_expiry_date_string).to_string(),
    }
}

fn format_tier(license: &PluginLicense) -> String {
    let tiers: Vec<&str> = [
        ("Enterprise", license.enterprise),
        ("Data Center", license.data_center),
        ("Subscription", license.subscription),
    ]
    .into_iter()
    .filter(|(_, set)| *set)
    .map(|(name, _)| name)
    .collect();

    if tiers.is_empty() {
        "-".to_string()
    } else {
        tiers.join(", ")
    }
}

#[cfg(test)]
#[path = "license_test.rs"]
mod tests;
