use crate::cli::{Cli, Command};
use jplug::config::JiraConfig;
use jplug::JiraClient;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub mod info;
pub mod license;
pub mod list;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let config = JiraConfig::load(&cli.connection.overrides()).map_err(|e| e.to_string())?;
    debug!(base_url = %config.base_url, anonymous = config.auth.is_anonymous(), "resolved config");

    let client = JiraClient::from_config(&config).map_err(|e| e.to_string())?;
    let cancel = cancel_on_interrupt();

    match cli.command {
        Command::List(args) => list::run(args, &client, &cancel).await,
        Command::Info(args) => info::run(args, &client, &cancel).await,
        Command::License(args) => license::run(args, &client, &cancel).await,
    }
}

/// Ctrl-C で実行中のリクエストをキャンセルする
fn cancel_on_interrupt() -> CancellationToken {
    let cancel = CancellationToken::new();

    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl-C, cancelling request...");
                cancel.cancel();
            }
        }
    });

    cancel
}
