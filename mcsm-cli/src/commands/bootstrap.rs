//! Bootstrap commands for the mcsm front end
//!
//! - `run`: install if needed, then launch the server
//! - `status`: report the installation state without touching it
//! - `profile`: print a built-in server profile as TOML

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use mcsm_c0re_lib::{DuctLauncher, Orchestrator, ServerProfile, ServerVariant};
use std::path::PathBuf;

/// Which installation to work on and how to treat it
#[derive(Debug, Args, Clone)]
pub struct TargetArgs {
    /// Working root holding `server_files/` and `resources/`
    #[clap(long, env = "MCSM_ROOT", default_value = ".")]
    pub root: String,

    /// Built-in server variant (spigot, craftbukkit, forge)
    #[clap(long, default_value = "spigot")]
    pub variant: ServerVariant,

    /// TOML profile overriding the variant (`run` creates it from defaults if missing)
    #[clap(long)]
    pub profile: Option<PathBuf>,
}

impl TargetArgs {
    fn root_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.root).as_ref())
    }

    fn server_profile(&self) -> Result<ServerProfile> {
        match &self.profile {
            Some(path) => ServerProfile::load(path)
                .with_context(|| format!("Failed to load profile {}", path.display())),
            None => Ok(self.variant.profile()),
        }
    }

    /// Profile for read-only commands; a missing profile file is an error
    fn existing_profile(&self) -> Result<ServerProfile> {
        match &self.profile {
            Some(path) => ServerProfile::load_existing(path)
                .with_context(|| format!("Failed to load profile {}", path.display())),
            None => Ok(self.variant.profile()),
        }
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum BootstrapCommands {
    /// Install the server if needed, then launch it
    #[clap(alias = "start")]
    Run(TargetArgs),

    /// Show the installation state
    Status(TargetArgs),

    /// Print a built-in profile as TOML
    Profile {
        #[clap(long, default_value = "spigot")]
        variant: ServerVariant,
    },
}

/// Handle bootstrap commands
pub fn handle_bootstrap_command(cmd: BootstrapCommands) -> Result<()> {
    match cmd {
        BootstrapCommands::Run(target) => run_server(&target),
        BootstrapCommands::Status(target) => show_status(&target),
        BootstrapCommands::Profile { variant } => print_profile(variant),
    }
}

fn run_server(target: &TargetArgs) -> Result<()> {
    let profile = target.server_profile()?;
    let root = target.root_path();
    tracing::info!(
        "starting {} {} in {}",
        profile.display_name,
        profile.version,
        root.display()
    );

    let mut orchestrator = Orchestrator::new(profile, root, DuctLauncher);
    orchestrator.run().context("Server bootstrap failed")?;

    println!("✅ Server stopped");
    Ok(())
}

fn show_status(target: &TargetArgs) -> Result<()> {
    let profile = target.existing_profile()?;
    let root = target.root_path();
    let orchestrator = Orchestrator::new(profile, root, DuctLauncher);
    let state = orchestrator
        .state()
        .context("Failed to inspect installation")?;

    let profile = orchestrator.profile();
    println!("🥾 mcsm status");
    println!("Server:  {} {}", profile.display_name, profile.version);
    println!("Install: {}", orchestrator.install_dir().display());
    println!("Staging: {}", orchestrator.staging_dir().display());
    println!("State:   {state}");

    Ok(())
}

fn print_profile(variant: ServerVariant) -> Result<()> {
    let toml = toml::to_string_pretty(&variant.profile())
        .with_context(|| format!("Failed to serialize {variant} profile"))?;
    print!("{toml}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn target(root: &str, profile: Option<PathBuf>) -> TargetArgs {
        TargetArgs {
            root: root.to_string(),
            variant: ServerVariant::Forge,
            profile,
        }
    }

    #[test]
    fn test_variant_profile_without_file() {
        let profile = target(".", None).server_profile().unwrap();
        assert_eq!(profile, ServerProfile::forge());
    }

    #[test]
    fn test_profile_file_wins_over_variant() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(&path, "display_name = \"Paper\"\n").unwrap();

        let profile = target(".", Some(path)).server_profile().unwrap();
        assert_eq!(profile.display_name, "Paper");
        assert_eq!(profile.binary, ServerProfile::spigot().binary);
    }

    #[test]
    fn test_status_does_not_create_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let root = dir.path().to_string_lossy().into_owned();

        let err = show_status(&target(&root, Some(path.clone()))).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load profile"));
        assert!(!path.exists());
        assert!(!dir.path().join("server_files").exists());
    }

    #[test]
    fn test_status_with_existing_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(&path, "display_name = \"Paper\"\n").unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        show_status(&target(&root, Some(path))).unwrap();
    }

    #[test]
    fn test_root_tilde_expands() {
        let root = target("~/servers", None).root_path();
        assert!(!root.to_string_lossy().starts_with('~'));
        assert!(root.ends_with("servers"));
    }

    #[test]
    fn test_profile_toml_round_trips() {
        let toml = toml::to_string_pretty(&ServerProfile::forge()).unwrap();
        let parsed: ServerProfile = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, ServerProfile::forge());
    }
}
