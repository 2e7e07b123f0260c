//! Free port discovery by sequential trial-bind
//!
//! Starting at the profile's first port, each candidate is bound on the
//! machine's local address and released straight away. The first port that
//! binds is written into `server.properties`. A busy port is an ordinary
//! outcome of [`PortProbe::try_bind`], not an error.
//!
//! The probe and the later bind by the server process are not atomic; a
//! port can be taken in between. That window is accepted.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener, ToSocketAddrs};
use std::ops::Range;
use std::path::Path;

use crate::config::{PORT_KEY, PROPERTIES_FILE_NAME, patch_property};
use crate::creator_log::{CreatorLog, Topic};
use crate::error::{BootstrapError, Result};

/// Something that can tell whether an address is free to bind
pub trait PortProbe {
    /// Bind `addr` and release it again. `true` when the bind succeeded.
    fn try_bind(&self, addr: SocketAddr) -> bool;
}

impl<T: PortProbe + ?Sized> PortProbe for &T {
    fn try_bind(&self, addr: SocketAddr) -> bool {
        (**self).try_bind(addr)
    }
}

/// Probes with a real TCP listener
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProbe;

impl PortProbe for TcpProbe {
    fn try_bind(&self, addr: SocketAddr) -> bool {
        match TcpListener::bind(addr) {
            Ok(listener) => {
                drop(listener);
                true
            }
            Err(e) => {
                tracing::debug!("bind {addr} refused: {e}");
                false
            }
        }
    }
}

/// Address of this machine as other LAN hosts would see it.
///
/// Resolves the host name to its first IPv4 address that can actually be
/// bound here, and falls back to loopback otherwise.
pub fn local_ip() -> IpAddr {
    let resolved = whoami::fallible::hostname().ok().and_then(|host| {
        (host.as_str(), 0)
            .to_socket_addrs()
            .ok()?
            .map(|addr| addr.ip())
            .filter(IpAddr::is_ipv4)
            .find(|ip| TcpProbe.try_bind(SocketAddr::new(*ip, 0)))
    });

    resolved.unwrap_or_else(|| {
        tracing::warn!("could not resolve local host name, using loopback");
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    })
}

/// A port believed free at probe time, already written to the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortClaim {
    pub ip: IpAddr,
    pub port: u16,
}

impl fmt::Display for PortClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

pub struct PortAllocator<P = TcpProbe> {
    probe: P,
    ip: IpAddr,
    range: Range<u16>,
}

impl<P: PortProbe> PortAllocator<P> {
    pub fn new(probe: P, ip: IpAddr, range: Range<u16>) -> Self {
        Self { probe, ip, range }
    }

    /// Find the first bindable port in range and persist it as
    /// `server-port=<port>` in the installation's `server.properties`.
    ///
    /// A config without a `server-port` line fails with `MissingProperty`
    /// even though a free port was found.
    pub fn claim_free_port(&self, install_dir: &Path, log: &CreatorLog) -> Result<PortClaim> {
        for port in self.range.clone() {
            log.record(Topic::Server, format!("Checking port \"{port}\""));

            if !self.probe.try_bind(SocketAddr::new(self.ip, port)) {
                log.record(
                    Topic::Server,
                    format!(
                        "Port already in use. Jumping to next port - {}",
                        u32::from(port) + 1
                    ),
                );
                continue;
            }

            log.record(Topic::Server, "Port is free. Claiming port...");
            write_port(install_dir, port, log)?;
            return Ok(PortClaim { ip: self.ip, port });
        }

        let err = BootstrapError::NoFreePort {
            start: self.range.start,
            end: self.range.end,
        };
        log.record(Topic::Error, err.to_string());
        Err(err)
    }
}

fn write_port(install_dir: &Path, port: u16, log: &CreatorLog) -> Result<()> {
    let properties = install_dir.join(PROPERTIES_FILE_NAME);
    log.record(Topic::Server, "Updating server port");

    match patch_property(&properties, PORT_KEY, &port.to_string()) {
        Ok(_) => {
            log.record(Topic::Server, format!("Changed server port to \"{port}\""));
            Ok(())
        }
        Err(e) => {
            log.record(Topic::Error, e.to_string());
            Err(e)
        }
    }
}
