//! Launch banner printed before the server takes over the terminal

use std::path::PathBuf;

use crate::port::PortClaim;

const RULE: &str = "----------------------------------------------------";

/// Threshold at or below which the operator is warned about low memory
pub const LOW_MEMORY_MB: u32 = 1024;

/// Everything the banner shows about the run about to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSummary {
    pub address: PortClaim,
    pub display_name: String,
    pub version: String,
    pub memory_mb: u32,
    pub addons: Vec<String>,
    pub ram_config: PathBuf,
}

/// Render the connection banner
pub fn render_banner(summary: &LaunchSummary) -> String {
    let mut out = String::new();
    let gb = f64::from(summary.memory_mb) / 1024.0;

    out.push('\n');
    out.push_str(&format!("{RULE}\n"));
    out.push_str(&format!("Server IP: {}\n", summary.address));
    out.push_str(&format!(
        "Version: {} {}\n",
        summary.display_name, summary.version
    ));
    out.push_str(&format!(
        "Allocated RAM: {}MB ({gb}GB)\n",
        summary.memory_mb
    ));
    out.push_str("- REQUIRES LAN CONNECTION -\n");
    out.push_str(&format!("{RULE}\n"));
    out.push_str("Server Plugins:\n");
    if summary.addons.is_empty() {
        out.push_str("No plugins found.\n");
    } else {
        for addon in &summary.addons {
            out.push_str(&format!("- {addon}\n"));
        }
    }
    out.push_str(&format!("{RULE}\n"));

    out
}

/// Warning shown when the configured memory is likely too small
pub fn memory_warning(summary: &LaunchSummary) -> Option<String> {
    (summary.memory_mb <= LOW_MEMORY_MB).then(|| {
        format!(
            "⚠️  WARNING - You have allocated {}MB of RAM to your server. That might not be enough. \
             If you wish to change it, go to the ram_config.msf ({}) file and adjust the value.",
            summary.memory_mb,
            summary.ram_config.display()
        )
    })
}

/// Print the banner and, when needed, the memory warning to stdout
pub fn print_banner(summary: &LaunchSummary) {
    print!("{}", render_banner(summary));
    if let Some(warning) = memory_warning(summary) {
        println!("{warning}");
    }
}
