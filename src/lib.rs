//! UniFi guest authorization client
//!
//! A small client for a UniFi network controller's session-based HTTP/JSON
//! API. It logs in once (the controller answers with a session cookie kept in
//! the client's cookie jar) and then issues the `authorize-guest` command,
//! granting a device timed, rate-limited network access.
//!
//! # Example
//!
//! ```rust,no_run
//! use unifi_guest::{GuestDescriptor, UnifiClient};
//!
//! # async fn example() -> unifi_guest::Result<()> {
//! let mut client = UnifiClient::new(
//!     "admin",
//!     "secret",
//!     "https://192.168.1.1:8443",
//!     "default",
//!     "5.12.22",
//!     true,
//! );
//! client.login().await?;
//!
//! let guest = GuestDescriptor::new("aa:bb:cc:dd:ee:ff", 60)
//!     .with_up(1024)
//!     .with_down(2048)
//!     .with_data(10240);
//! client.authorize_guest(&guest).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Calls are not retried and no timeout is applied; wrap them in
//! `tokio::time::timeout` for a deadline.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use client::UnifiClient;
pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use types::{CommandEnvelope, GuestDescriptor};
