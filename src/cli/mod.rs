//! Command-line front end
//!
//! Argument types and entry points used by the `unifi-guest` binary.

pub mod authorize;
pub mod context;

pub use authorize::{AuthorizeArgs, run_authorize, run_login};
pub use context::{ControllerArgs, init_logging};
