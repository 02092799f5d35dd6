use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// 有効/無効の表示
pub fn status_mark(enabled: bool) -> String {
    if enabled {
        format!("{} enabled", "✓".green())
    } else {
        format!("{} disabled", "✗".red())
    }
}

/// 真偽値を yes/no で表示
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// 空文字列は "-" で表示
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    serde_json::to_string_pretty(value)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize to JSON: {}", e))
}

pub fn print_yaml<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    serde_yaml::to_string(value)
        .map(|yaml| print!("{yaml}"))
        .map_err(|e| format!("Failed to serialize to YAML: {}", e))
}
