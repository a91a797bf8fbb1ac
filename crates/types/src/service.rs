//! Service and port metadata exposed by packages

use serde::{Deserialize, Serialize};

/// One service shipped by a package, as reported by the daemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    #[serde(default)]
    pub ports: Vec<ServicePort>,
}

impl ServiceDescriptor {
    /// The first port this service exposes to the outside, if any.
    ///
    /// An external port is how a package advertises an embedded web UI.
    #[must_use]
    pub fn external_port(&self) -> Option<u16> {
        self.ports.iter().find(|p| p.external).map(|p| p.port)
    }
}

/// A single port binding of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePort {
    pub name: String,
    pub port: u16,
    /// Reachable from outside the host, not just loopback.
    #[serde(default)]
    pub external: bool,
}
