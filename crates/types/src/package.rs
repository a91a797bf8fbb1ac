//! Package-related type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a package
///
/// The canonical text form is `<name>.<origin>`; origins never contain a
/// dot, so parsing splits on the last one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId {
    pub name: String,
    pub origin: String,
}

impl PackageId {
    /// Create a new package ID
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.origin)
    }
}

impl FromStr for PackageId {
    type Err = pkgdash_errors::PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('.') {
            Some((name, origin)) if !name.is_empty() && !origin.is_empty() => {
                Ok(Self::new(name, origin))
            }
            _ => Err(pkgdash_errors::PackageError::InvalidId {
                input: s.to_string(),
            }),
        }
    }
}

/// Package type as reported by the daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    App,
    Gadget,
    Os,
    Kernel,
    Framework,
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App => write!(f, "app"),
            Self::Gadget => write!(f, "gadget"),
            Self::Os => write!(f, "os"),
            Self::Kernel => write!(f, "kernel"),
            Self::Framework => write!(f, "framework"),
        }
    }
}

/// Package status surfaced to the dashboard
///
/// `Installing` and `Removing` are only ever produced by merging an
/// in-flight operation record over the daemon's own status; the daemon
/// reports the remaining values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    NotInstalled,
    Installed,
    Installing,
    Removing,
    Active,
    Error,
}

impl PackageStatus {
    /// Whether this status counts as "present on the system".
    #[must_use]
    pub fn is_installed(self) -> bool {
        matches!(self, Self::Installed | Self::Active)
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInstalled => write!(f, "notinstalled"),
            Self::Installed => write!(f, "installed"),
            Self::Installing => write!(f, "installing"),
            Self::Removing => write!(f, "removing"),
            Self::Active => write!(f, "active"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Immutable package snapshot sourced from the daemon client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    pub name: String,
    pub origin: String,
    pub version: String,
    pub package_type: PackageType,
    pub description: String,
    pub icon: String,
    pub download_size: u64,
    pub installed_size: u64,
    pub status: PackageStatus,
}

impl PackageDescriptor {
    /// Identity of this package
    #[must_use]
    pub fn id(&self) -> PackageId {
        PackageId::new(self.name.clone(), self.origin.clone())
    }
}

/// Filter for package listings, passed through to the client verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFilter {
    /// Restrict results to these types; empty means all types.
    #[serde(default)]
    pub types: Vec<PackageType>,
    /// Substring match against name and description.
    #[serde(default)]
    pub query: Option<String>,
    /// Only packages present on the system.
    #[serde(default)]
    pub installed_only: bool,
}

impl PackageFilter {
    /// Whether a descriptor passes this filter.
    #[must_use]
    pub fn matches(&self, descriptor: &PackageDescriptor) -> bool {
        if !self.types.is_empty() && !self.types.contains(&descriptor.package_type) {
            return false;
        }

        if self.installed_only && !descriptor.status.is_installed() {
            return false;
        }

        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            return descriptor.name.to_lowercase().contains(&query)
                || descriptor.description.to_lowercase().contains(&query);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, package_type: PackageType, status: PackageStatus) -> PackageDescriptor {
        PackageDescriptor {
            name: name.to_string(),
            origin: "canonical".to_string(),
            version: "1.0".to_string(),
            package_type,
            description: "A test package".to_string(),
            icon: String::new(),
            download_size: 0,
            installed_size: 0,
            status,
        }
    }

    #[test]
    fn test_package_id_display() {
        let id = PackageId::new("chatroom", "ogra");
        assert_eq!(id.to_string(), "chatroom.ogra");
    }

    #[test]
    fn test_package_id_parse_roundtrip() {
        let id: PackageId = "chatroom.ogra".parse().unwrap();
        assert_eq!(id.name, "chatroom");
        assert_eq!(id.origin, "ogra");
        assert_eq!(id.to_string().parse::<PackageId>().unwrap(), id);

        // Names may contain dots; the origin never does.
        let id: PackageId = "go1.5.mwhudson".parse().unwrap();
        assert_eq!(id.name, "go1.5");
        assert_eq!(id.origin, "mwhudson");
    }

    #[test]
    fn test_package_id_parse_rejects_bare_name() {
        assert!("chatroom".parse::<PackageId>().is_err());
        assert!(".ogra".parse::<PackageId>().is_err());
        assert!("chatroom.".parse::<PackageId>().is_err());
    }

    #[test]
    fn test_filter_default_matches_everything() {
        let filter = PackageFilter::default();
        assert!(filter.matches(&descriptor("a", PackageType::App, PackageStatus::NotInstalled)));
        assert!(filter.matches(&descriptor("b", PackageType::Gadget, PackageStatus::Active)));
    }

    #[test]
    fn test_filter_by_type_and_installed() {
        let filter = PackageFilter {
            types: vec![PackageType::App],
            installed_only: true,
            ..PackageFilter::default()
        };
        assert!(filter.matches(&descriptor("a", PackageType::App, PackageStatus::Installed)));
        assert!(!filter.matches(&descriptor("a", PackageType::App, PackageStatus::NotInstalled)));
        assert!(!filter.matches(&descriptor("a", PackageType::Os, PackageStatus::Installed)));
    }

    #[test]
    fn test_filter_query_matches_name_and_description() {
        let filter = PackageFilter {
            query: Some("chat".to_string()),
            ..PackageFilter::default()
        };
        assert!(filter.matches(&descriptor("chatroom", PackageType::App, PackageStatus::Installed)));
        assert!(!filter.matches(&descriptor("editor", PackageType::App, PackageStatus::Installed)));
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&PackageStatus::Installing).unwrap();
        assert_eq!(json, "\"installing\"");
    }
}
