pub mod bootstrap;

pub use bootstrap::{BootstrapCommands, TargetArgs, handle_bootstrap_command};
