//! Controller client
//!
//! Session establishment (`session`), the guest authorization command
//! (`guest`), and the HTTP transport setup they share (`network`).

pub mod guest;
pub mod network;
pub mod session;

pub use network::TransportSpec;
pub use session::UnifiClient;
