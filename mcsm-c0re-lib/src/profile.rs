//! Server profiles
//!
//! A [`ServerProfile`] carries everything that differs between server
//! variants: which jar to run, which flags to pass, which artifacts the
//! staging area must supply, and where addons live. One bootstrap
//! implementation serves every variant by taking a profile as input.
//!
//! Profiles can be stored as TOML and loaded with [`ServerProfile::load`]:
//!
//! ```toml
//! display_name = "Spigot"
//! version = "1.16.3"
//! binary = "spigot-{version}.jar"
//! extra_flags = ["-DIReallyKnowWhatIAmDoingISwear=true"]
//!
//! [[resources]]
//! name = "server.properties"
//!
//! [[resources]]
//! name = "spigot-{version}.jar"
//! ```

use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{IoSnafu, ProfileSnafu, Result};

/// Placeholder substituted with the profile version in file name templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// First port probed when claiming a port
pub const DEFAULT_PORT: u16 = 25565;

/// Exclusive upper bound of the probed port range
pub const PORT_RANGE_END: u16 = 65535;

/// Lowest port a profile may start probing from
pub const MIN_PORT: u16 = 1024;

/// Megabytes handed to the server when nothing else is configured
pub const DEFAULT_MEMORY_MB: u32 = 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    #[default]
    File,
    /// Directory tree, copied recursively
    Dir,
}

/// One entry of the resource set a fresh installation needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    #[serde(default)]
    pub kind: ArtifactKind,
}

impl Artifact {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ArtifactKind::File,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ArtifactKind::Dir,
        }
    }
}

/// Built-in server variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServerVariant {
    #[default]
    Spigot,
    CraftBukkit,
    Forge,
}

impl ServerVariant {
    pub const ALL: [ServerVariant; 3] = [
        ServerVariant::Spigot,
        ServerVariant::CraftBukkit,
        ServerVariant::Forge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServerVariant::Spigot => "spigot",
            ServerVariant::CraftBukkit => "craftbukkit",
            ServerVariant::Forge => "forge",
        }
    }

    /// The preset profile for this variant
    pub fn profile(self) -> ServerProfile {
        match self {
            ServerVariant::Spigot => ServerProfile::spigot(),
            ServerVariant::CraftBukkit => ServerProfile::craftbukkit(),
            ServerVariant::Forge => ServerProfile::forge(),
        }
    }
}

impl fmt::Display for ServerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spigot" => Ok(ServerVariant::Spigot),
            "craftbukkit" | "bukkit" => Ok(ServerVariant::CraftBukkit),
            "forge" => Ok(ServerVariant::Forge),
            other => Err(format!(
                "unknown server variant '{other}' (expected one of: spigot, craftbukkit, forge)"
            )),
        }
    }
}

/// Everything the bootstrap needs to know about one kind of server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerProfile {
    /// Human name shown in the banner, e.g. "Spigot"
    pub display_name: String,
    pub version: String,
    /// Jar file name template; `{version}` is substituted
    pub binary: String,
    /// Program that runs the jar
    pub runtime: String,
    /// Flags placed between the memory flags and `-jar`
    pub extra_flags: Vec<String>,
    pub default_memory_mb: u32,
    pub port_start: u16,
    /// Exclusive
    pub port_end: u16,
    /// Artifacts copied from the staging area on a fresh install
    pub resources: Vec<Artifact>,
    /// Addon directory inside the installation, e.g. "plugins"
    pub addon_dir: String,
    pub install_dir: String,
    pub staging_dir: String,
    pub libraries_dir: String,
}

impl Default for ServerProfile {
    fn default() -> Self {
        Self::spigot()
    }
}

impl ServerProfile {
    fn base(display_name: &str, version: &str, binary: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            version: version.to_string(),
            binary: binary.to_string(),
            runtime: "java".to_string(),
            extra_flags: Vec::new(),
            default_memory_mb: DEFAULT_MEMORY_MB,
            port_start: DEFAULT_PORT,
            port_end: PORT_RANGE_END,
            resources: Vec::new(),
            addon_dir: "plugins".to_string(),
            install_dir: "server_files".to_string(),
            staging_dir: "resources".to_string(),
            libraries_dir: "libraries".to_string(),
        }
    }

    pub fn spigot() -> Self {
        Self {
            extra_flags: vec!["-DIReallyKnowWhatIAmDoingISwear=true".to_string()],
            resources: vec![
                Artifact::file("server.properties"),
                Artifact::file("spigot-{version}.jar"),
            ],
            ..Self::base("Spigot", "1.16.3", "spigot-{version}.jar")
        }
    }

    pub fn craftbukkit() -> Self {
        Self {
            extra_flags: vec!["-DIReallyKnowWhatIAmDoingISwear=true".to_string()],
            resources: vec![
                Artifact::file("server.properties"),
                Artifact::file("craftbukkit-{version}.jar"),
            ],
            ..Self::base("CraftBukkit", "1.8.9", "craftbukkit-{version}.jar")
        }
    }

    pub fn forge() -> Self {
        Self {
            resources: vec![
                Artifact::dir("libraries"),
                Artifact::file("forge-{version}-10.13.4.1614-{version}-universal.jar"),
                Artifact::file("minecraft_server.{version}.jar"),
            ],
            addon_dir: "mods".to_string(),
            ..Self::base(
                "Forge",
                "1.7.10",
                "forge-{version}-10.13.4.1614-{version}-universal.jar",
            )
        }
    }

    /// Load a profile from a TOML file. Keys missing from the file fall back
    /// to the Spigot preset; a missing file is created with that preset.
    pub fn load(path: &Path) -> Result<Self> {
        confy::load_path(path).context(ProfileSnafu { path })
    }

    /// Like [`ServerProfile::load`], but never writes: a missing file is a
    /// `NotFound` error instead of a fresh preset on disk
    pub fn load_existing(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(io::Error::from(io::ErrorKind::NotFound)).context(IoSnafu { path });
        }
        Self::load(path)
    }

    /// Substitute the version into a file name template
    pub fn expand(&self, template: &str) -> String {
        template.replace(VERSION_PLACEHOLDER, &self.version)
    }

    /// File name of the server jar, which doubles as the installed marker
    pub fn binary_file_name(&self) -> String {
        self.expand(&self.binary)
    }

    /// The resource set with every name expanded
    pub fn artifacts(&self) -> Vec<Artifact> {
        self.resources
            .iter()
            .map(|a| Artifact {
                name: self.expand(&a.name),
                kind: a.kind,
            })
            .collect()
    }

    pub fn install_path(&self, root: &Path) -> PathBuf {
        root.join(&self.install_dir)
    }

    pub fn staging_path(&self, root: &Path) -> PathBuf {
        root.join(&self.staging_dir)
    }

    /// Probed port range, clamped to `[1024, 65535)`
    pub fn port_range(&self) -> std::ops::Range<u16> {
        let start = self.port_start.max(MIN_PORT);
        let end = self.port_end.min(PORT_RANGE_END);
        start..end
    }

    /// Full argument vector for the server process
    ///
    /// `<runtime> -Xmx<ram>M -Xms<ram>M [extra-flags] -jar <binary> nogui`
    pub fn launch_argv(&self, memory_mb: u32) -> Vec<String> {
        let mut argv = vec![
            self.runtime.clone(),
            format!("-Xmx{memory_mb}M"),
            format!("-Xms{memory_mb}M"),
        ];
        argv.extend(self.extra_flags.iter().cloned());
        argv.push("-jar".to_string());
        argv.push(self.binary_file_name());
        argv.push("nogui".to_string());
        argv
    }
}
