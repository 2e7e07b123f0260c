//! Bootstrap building blocks for a fresh or existing installation
//!
//! - State detection from filesystem facts
//! - Skeleton generation (`server_files/`, `libraries/`)
//! - All-or-nothing resource provisioning from the staging area
//! - Addon inventory and the launch banner

pub mod addons;
pub mod provisioner;
pub mod report;
pub mod skeleton;
pub mod state;

pub use addons::list_addons;
pub use provisioner::provision;
pub use report::{LaunchSummary, memory_warning, print_banner, render_banner};
pub use skeleton::{create_directory, create_skeleton};
pub use state::{BootstrapState, detect_state};
