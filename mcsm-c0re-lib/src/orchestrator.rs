//! Bootstrap orchestrator - install on first run, launch on every run
//!
//! ```text
//! Uninstalled -> Provisioned -> LicensePending -> Ready -> (running)
//! ```
//!
//! The starting state is read off the installation directory, so a run that
//! died half way resumes where it stopped. The launch sequence (port probe,
//! RAM, banner, server process) runs on every invocation, including the
//! first.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::bootstrap::{
    BootstrapState, LaunchSummary, create_skeleton, detect_state, list_addons, print_banner,
    provision,
};
use crate::config::{EULA_FILE_NAME, RAM_CONFIG_FILE_NAME, accept_eula, resolve_memory_mb};
use crate::creator_log::{CreatorLog, Topic};
use crate::error::Result;
use crate::launcher::Launcher;
use crate::port::{PortAllocator, PortProbe, TcpProbe, local_ip};
use crate::profile::ServerProfile;

/// Drives one installation from whatever state it is in to a running server
pub struct Orchestrator<L, P = TcpProbe> {
    profile: ServerProfile,
    root: PathBuf,
    launcher: L,
    probe: P,
    /// Address to probe on; the LAN address is looked up at launch when unset
    ip: Option<IpAddr>,
}

impl<L: Launcher> Orchestrator<L, TcpProbe> {
    /// Orchestrator for the installation under `root`, probing ports on the
    /// machine's LAN address once a launch begins
    pub fn new(profile: ServerProfile, root: impl Into<PathBuf>, launcher: L) -> Self {
        Self {
            profile,
            root: root.into(),
            launcher,
            probe: TcpProbe,
            ip: None,
        }
    }
}

impl<L: Launcher, P: PortProbe> Orchestrator<L, P> {
    /// Swap the port probe and the address it probes on
    pub fn with_probe<Q: PortProbe>(self, probe: Q, ip: IpAddr) -> Orchestrator<L, Q> {
        Orchestrator {
            profile: self.profile,
            root: self.root,
            launcher: self.launcher,
            probe,
            ip: Some(ip),
        }
    }

    pub fn profile(&self) -> &ServerProfile {
        &self.profile
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn install_dir(&self) -> PathBuf {
        self.profile.install_path(&self.root)
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.profile.staging_path(&self.root)
    }

    /// Current state, without touching anything
    pub fn state(&self) -> Result<BootstrapState> {
        detect_state(&self.install_dir(), &self.profile)
    }

    /// Bootstrap if needed, then launch and block until the server exits
    pub fn run(&mut self) -> Result<LaunchSummary> {
        let install = self.install_dir();
        let result = self.prepare().and_then(|_| self.launch());

        if let Err(e) = &result {
            CreatorLog::new(&install).record(Topic::Error, format!("Program closed: {e}"));
        }
        result
    }

    /// Walk the state machine up to `Ready`
    pub fn prepare(&mut self) -> Result<BootstrapState> {
        let install = self.install_dir();
        create_skeleton([&install])?;

        let log = CreatorLog::new(&install);
        log.record(Topic::General, "Preparing server...");

        let mut state = detect_state(&install, &self.profile)?;
        while state != BootstrapState::Ready {
            tracing::debug!("bootstrap state: {state}");
            state = self.step(state, &install, &log)?;
        }

        log.record(Topic::General, "Server prepared.");
        Ok(state)
    }

    fn step(
        &mut self,
        state: BootstrapState,
        install: &Path,
        log: &CreatorLog,
    ) -> Result<BootstrapState> {
        match state {
            BootstrapState::Uninstalled => {
                log.record(
                    Topic::General,
                    format!("Checking for resources to be sent to ({}).", install.display()),
                );
                create_skeleton([install.join(&self.profile.libraries_dir)])?;
                provision(
                    &self.staging_dir(),
                    install,
                    &self.profile.artifacts(),
                    log,
                )?;
                log.record(
                    Topic::General,
                    format!("Successfully sent resources to ({}).", install.display()),
                );
                Ok(BootstrapState::Provisioned)
            }
            BootstrapState::Provisioned => {
                log.record(Topic::Server, "Generating server files...");
                let argv = self.profile.launch_argv(self.profile.default_memory_mb);
                self.launcher.launch(install, &argv)?;
                log.record(Topic::Server, "Files generated.");
                Ok(BootstrapState::LicensePending)
            }
            BootstrapState::LicensePending => {
                log.record(Topic::Eula, "Agreeing to the Eula...");
                accept_eula(&install.join(EULA_FILE_NAME))?;
                log.record(Topic::Eula, "Successfully agreed to the Eula.");
                Ok(BootstrapState::Ready)
            }
            BootstrapState::Ready => Ok(BootstrapState::Ready),
        }
    }

    /// The launch sequence: claim a port, resolve RAM, print the banner,
    /// run the server until it exits
    pub fn launch(&mut self) -> Result<LaunchSummary> {
        let install = self.install_dir();
        let log = CreatorLog::new(&install);
        log.record(Topic::Server, "Initialising Server");

        let allocator = PortAllocator::new(
            &self.probe,
            self.ip.unwrap_or_else(local_ip),
            self.profile.port_range(),
        );
        let address = allocator.claim_free_port(&install, &log)?;

        let memory_mb = resolve_memory_mb(&install, self.profile.default_memory_mb, &log)?;
        let addons = list_addons(&install, &self.profile.addon_dir, &log)?;

        let summary = LaunchSummary {
            address,
            display_name: self.profile.display_name.clone(),
            version: self.profile.version.clone(),
            memory_mb,
            addons,
            ram_config: install.join(RAM_CONFIG_FILE_NAME),
        };
        print_banner(&summary);

        log.record(Topic::Server, "Running server");
        self.launcher
            .launch(&install, &self.profile.launch_argv(memory_mb))?;

        Ok(summary)
    }
}
