use clap::Parser;
use mcsm_cli::{Cli, handle_bootstrap_command};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = handle_bootstrap_command(cli.command) {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}
