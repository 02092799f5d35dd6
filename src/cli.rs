use clap::{Parser, Subcommand};
use jplug::config::ConfigOverrides;
use std::path::PathBuf;

use crate::commands::{info, license, list};

#[derive(Debug, Parser)]
#[command(name = "jplug")]
#[command(about = "Jira plugin query CLI", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 接続設定（環境変数・設定ファイルより優先）
#[derive(Debug, clap::Args)]
pub struct ConnectionArgs {
    /// Jira base URL (overrides JIRA_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Username for API token authentication (overrides JIRA_USERNAME)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// API token (overrides JIRA_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Config file path (default: ~/.jplug/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl ConnectionArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            username: self.username.clone(),
            token: self.token.clone(),
            config_path: self.config.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List installed plugins
    List(list::Args),

    /// Show plugin details and modules
    Info(info::Args),

    /// Show plugin license details
    License(license::Args),
}
