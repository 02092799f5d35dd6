//! Jira プラグイン管理REST APIの型付きクライアント
//!
//! ```no_run
//! # async fn example() -> jplug::Result<()> {
//! use jplug::config::{AuthProvider, JiraConfig};
//! use jplug::JiraClient;
//!
//! let config = JiraConfig::new("https://jira.example.com")
//!     .with_auth(AuthProvider::new().with_basic("admin", "api-token"));
//! let client = JiraClient::from_config(&config)?;
//!
//! let (collection, _response) = client.plugins().list_plugins().await?;
//! for plugin in collection.user_installed() {
//!     println!("{} {}", plugin.key, plugin.version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod jira;
pub mod plugins;
pub mod transport;

pub use error::{JiraError, Result};
pub use jira::JiraClient;
pub use transport::{Request, Response, Transport};
