//! Login and authorize subcommands

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    cli::context::{ControllerArgs, init_logging},
    config::GuestSettings,
    types::GuestDescriptor,
    utils::version,
};

/// Arguments for `authorize`
#[derive(Debug)]
pub struct AuthorizeArgs {
    pub mac: String,
    pub minutes: Option<u32>,
    pub up: Option<u32>,
    pub down: Option<u32>,
    pub data: Option<u32>,
}

impl AuthorizeArgs {
    /// Build the guest descriptor, filling gaps from configured defaults
    pub fn descriptor(&self, defaults: &GuestSettings) -> GuestDescriptor {
        GuestDescriptor::new(self.mac.as_str(), self.minutes.unwrap_or(defaults.minutes))
            .with_up(self.up.unwrap_or(defaults.up))
            .with_down(self.down.unwrap_or(defaults.down))
            .with_data(self.data.unwrap_or(defaults.data))
    }
}

/// Log in and report success
pub async fn run_login(controller: ControllerArgs) -> Result<()> {
    let settings = controller.resolve_settings()?;
    init_logging(controller.verbose, &settings);
    debug!("unifi-guest v{}", version::get_version());

    let mut client = controller.connect(&settings)?;
    client
        .login()
        .await
        .with_context(|| format!("Login to {} failed", client.base_url()))?;

    println!("Logged in to {} as {}", client.base_url(), client.username());
    Ok(())
}

/// Log in, then authorize one guest
pub async fn run_authorize(controller: ControllerArgs, args: AuthorizeArgs) -> Result<()> {
    let settings = controller.resolve_settings()?;
    init_logging(controller.verbose, &settings);
    debug!("unifi-guest v{}", version::get_version());

    let guest = args.descriptor(&settings.guest);
    guest.validate()?;

    let mut client = controller.connect(&settings)?;
    client
        .login()
        .await
        .with_context(|| format!("Login to {} failed", client.base_url()))?;
    client
        .authorize_guest(&guest)
        .await
        .with_context(|| format!("Authorizing guest {} failed", guest.mac))?;

    info!("Guest {} authorized", guest.mac);
    println!(
        "Authorized {} for {} minutes on site {}",
        guest.mac,
        guest.minutes,
        client.site()
    );
    Ok(())
}
