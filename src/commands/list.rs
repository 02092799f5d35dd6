//! jplug list コマンド
//!
//! インストール済みプラグインの一覧を表示する。

use crate::output::{or_dash, print_json, status_mark};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use jplug::plugins::PluginSummary;
use jplug::JiraClient;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Parser)]
pub struct Args {
    /// Show only user-installed plugins
    #[arg(long)]
    pub user_installed: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only plugin keys
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(
    args: Args,
    client: &JiraClient,
    cancel: &CancellationToken,
) -> Result<(), String> {
    let (collection, _) = client
        .plugins()
        .list_plugins_with_cancel(cancel)
        .await
        .map_err(|e| e.to_string())?;

    let total_count = collection.plugins.len();
    let mut plugins = filter_plugins(collection.plugins, &args);
    plugins.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    if args.json {
        print_json(&plugins)
    } else if args.simple {
        print_simple(&plugins, total_count);
        Ok(())
    } else {
        print_table(&plugins, total_count);
        Ok(())
    }
}

fn filter_plugins(plugins: Vec<PluginSummary>, args: &Args) -> Vec<PluginSummary> {
    plugins
        .into_iter()
        .filter(|p| !args.user_installed || p.user_installed)
        .collect()
}

fn empty_message(total_count: usize) -> &'static str {
    if total_count == 0 {
        "No plugins installed"
    } else {
        "No plugins matched"
    }
}

fn print_table(plugins: &[PluginSummary], total_count: usize) {
    if plugins.is_empty() {
        println!("{}", empty_message(total_count));
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Name", "Version", "Status", "Vendor"]);

    for plugin in plugins {
        table.add_row(vec![
            plugin.key.clone(),
            plugin.name.clone(),
            plugin.version.clone(),
            status_mark(plugin.enabled),
            or_dash(&plugin.vendor.name).to_string(),
        ]);
    }

    println!("{table}");
    println!("{} of {} plugin(s)", plugins.len(), total_count);
}

fn print_simple(plugins: &[PluginSummary], total_count: usize) {
    if plugins.is_empty() {
        println!("{}", empty_message(total_count));
        return;
    }
    for plugin in plugins {
        println!("{}", plugin.key);
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
