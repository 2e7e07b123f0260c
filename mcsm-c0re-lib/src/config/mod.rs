//! Config files owned by the installation
//!
//! - `server.properties`: key based patching ([`patcher`])
//! - `eula.txt`: positional license acceptance ([`eula`])
//! - `ram_config.msf`: self-healing RAM setting ([`memory`])

pub mod eula;
pub mod memory;
pub mod patcher;

pub use eula::{EULA_FILE_NAME, accept_eula, is_eula_accepted};
pub use memory::{RAM_CONFIG_FILE_NAME, resolve_memory_mb};
pub use patcher::{patch_line, patch_property, read_lines, write_lines};

/// File name of the server's network/gameplay config
pub const PROPERTIES_FILE_NAME: &str = "server.properties";

/// Key holding the listening port in `server.properties`
pub const PORT_KEY: &str = "server-port";
