//! jplug info コマンド
//!
//! プラグインの詳細情報とモジュール一覧を表示する。

use crate::output::{or_dash, print_json, print_yaml, status_mark, yes_no, OutputFormat};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use jplug::plugins::PluginDetail;
use jplug::JiraClient;
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
    let (detail, _) = client
        .plugins()
        .get_plugin_details_with_cancel(&args.key, cancel)
        .await
        .map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Table => {
            print_table(&detail);
            Ok(())
        }
        OutputFormat::Json => print_json(&detail),
        OutputFormat::Yaml => print_yaml(&detail),
    }
}

fn print_table(detail: &PluginDetail) {
    println!("Plugin Information");
    println!("==================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Key".to_string(), detail.key.clone()]);
    table.add_row(vec!["Name".to_string(), detail.name.clone()]);
    table.add_row(vec!["Version".to_string(), detail.version.clone()]);
    table.add_row(vec![
        "Description".to_string(),
        or_dash(&detail.description).to_string(),
    ]);
    table.add_row(vec!["Status".to_string(), status_mark(detail.enabled)]);
    table.add_row(vec![
        "Vendor".to_string(),
        or_dash(&detail.vendor.name).to_string(),
    ]);
    for (field, value) in plugin_flags(detail) {
        table.add_row(vec![field.to_string(), yes_no(value).to_string()]);
    }

    println!("{table}");
    println!();

    println!("Modules");
    println!("-------");

    if detail.modules.is_empty() {
        println!("none");
        return;
    }

    let mut modules = Table::new();
    modules.load_preset(UTF8_FULL);
    modules.set_header(vec!["Key", "Name", "Status", "Broken"]);

    for module in &detail.modules {
        modules.add_row(vec![
            module.key.clone(),
            or_dash(&module.name).to_string(),
            status_mark(module.enabled),
            yes_no(module.broken).to_string(),
        ]);
    }

    println!("{modules}");

    let broken = detail.broken_modules().count();
    if broken > 0 {
        println!("{} broken module(s)", broken);
    }
}

/// 表に出す状態フラグ
fn plugin_flags(detail: &PluginDetail) -> [(&'static str, bool); 7] {
    [
        ("User Installed", detail.user_installed),
        ("Enabled By Default", detail.enabled_by_default),
        ("Optional", detail.optional),
        ("System (static)", detail.is_static),
        ("Unloadable", detail.unloadable),
        ("Uses Licensing", detail.uses_licensing),
        ("Unrecognised Module Types", detail.unrecognised_module_types),
    ]
}
