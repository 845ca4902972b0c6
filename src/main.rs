//! Command-line client for UniFi guest authorization
//!
//! # Usage
//!
//! ## Check credentials
//! ```bash
//! unifi-guest --url https://192.168.1.1:8443 -u admin -p secret --insecure login
//! ```
//!
//! ## Authorize a guest
//! ```bash
//! unifi-guest authorize --mac aa:bb:cc:dd:ee:ff --minutes 60 --down 2048
//! ```
//!
//! Connection settings may also come from `UNIFI_*` environment variables or
//! a TOML config file (`--config`, `UNIFI_GUEST_CONFIG`, or the platform
//! config directory).

use clap::{Parser, Subcommand};

use unifi_guest::{
    Error,
    cli::{AuthorizeArgs, ControllerArgs, run_authorize, run_login},
    error::{format_error, format_error_for_logging},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "unifi-guest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    controller: ControllerArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to the controller and exit
    Login,

    /// Grant a guest device network access
    Authorize {
        /// Device MAC address (aa:bb:cc:dd:ee:ff)
        #[arg(short, long, value_name = "MAC")]
        mac: String,

        /// Minutes until access is removed
        #[arg(long)]
        minutes: Option<u32>,

        /// Upload limit in Kibit/s
        #[arg(long)]
        up: Option<u32>,

        /// Download limit in Kibit/s
        #[arg(long)]
        down: Option<u32>,

        /// Data cap in MiB
        #[arg(long)]
        data: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Login => run_login(cli.controller).await,
        Commands::Authorize {
            mac,
            minutes,
            up,
            down,
            data,
        } => {
            let args = AuthorizeArgs {
                mac,
                minutes,
                up,
                down,
                data,
            };
            run_authorize(cli.controller, args).await
        }
    };

    if let Err(e) = result {
        if let Some(inner) = e.downcast_ref::<Error>() {
            tracing::debug!("command failed: {}", format_error_for_logging(inner));
        }
        let message = match e.downcast_ref::<Error>() {
            Some(inner) if e.chain().count() > 1 => format!("{}: {}", e, format_error(inner)),
            Some(inner) => format_error(inner),
            None => format!("{:#}", e),
        };
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }

    Ok(())
}
