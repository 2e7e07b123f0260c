//! # mcsm-c0re-lib
//!
//! Core of mcsm: turns an empty working directory plus a staging area of
//! server artifacts into a running Minecraft server.
//!
//! On the first run the orchestrator provisions `server_files/` from
//! `resources/`, lets the server generate its defaults once, and accepts the
//! EULA. On every run it probes for a free port, resolves the configured
//! RAM, prints a connection banner and hands the terminal to the server.
//!
//! ```no_run
//! use mcsm_c0re_lib::{DuctLauncher, Orchestrator, ServerVariant};
//!
//! let mut orchestrator = Orchestrator::new(ServerVariant::Spigot.profile(), ".", DuctLauncher);
//! orchestrator.run()?;
//! # Ok::<(), mcsm_c0re_lib::BootstrapError>(())
//! ```

pub mod bootstrap;
pub mod config;
pub mod creator_log;
pub mod error;
pub mod launcher;
pub mod orchestrator;
pub mod port;
pub mod profile;
pub mod version;

pub use bootstrap::{BootstrapState, LaunchSummary};
pub use creator_log::{CreatorLog, Topic};
pub use error::{BootstrapError, Result};
pub use launcher::{DuctLauncher, Launcher};
pub use orchestrator::Orchestrator;
pub use port::{PortAllocator, PortClaim, PortProbe, TcpProbe};
pub use profile::{Artifact, ArtifactKind, ServerProfile, ServerVariant};
