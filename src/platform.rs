//! Target platform as seen by the patcher

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Other,
}

impl Platform {
    /// Resolve an OS name or platform tag such as `linux`, `x86_64-linux` or
    /// `x86_64-unknown-linux-gnu`. Anything unrecognized maps to `Other`.
    pub fn from_identifier(id: &str) -> Self {
        if id.to_ascii_lowercase().contains("linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    /// Platform of the running binary.
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    pub fn injects_probe_object(&self) -> bool {
        matches!(self, Platform::Linux)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => f.write_str("linux"),
            Platform::Other => f.write_str("other"),
        }
    }
}
