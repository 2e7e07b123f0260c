//! # mcsm-cli
//!
//! Command line front end for [`mcsm_c0re_lib`]. The binary is `mcsm`.

use clap::Parser;

pub mod commands;

pub use commands::{BootstrapCommands, handle_bootstrap_command};

#[derive(Debug, Parser)]
#[clap(
    name = "mcsm",
    version = mcsm_c0re_lib::version::VERSION,
    about = "Install and launch a local Minecraft server"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: BootstrapCommands,
}
