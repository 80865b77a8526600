//! Execution context the option string is evaluated against.

use serde::{Deserialize, Serialize};

use crate::collectors::GarbageCollector;

/// Operating system the JVM runs on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Os {
    Linux,
    Solaris,
    Windows,
    #[default]
    Unidentified,
}

/// Pointer width of the JVM binary. 64 bit unless known otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bit {
    Bit32,
    #[default]
    Bit64,
    Unknown,
}

/// What is known about the JVM and its host beyond the option string.
///
/// Everything here is optional knowledge: the zero value of each field
/// means "unidentified" and rules that need the field stay quiet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JvmContext {
    /// Major JDK version (8, 11, 17...). `None` when unidentified.
    pub major_version: Option<u32>,
    /// Update number within the major release. Zero when unidentified.
    pub minor_version: u32,
    pub os: Os,
    pub bit: Bit,
    /// True when the JVM runs inside a container.
    pub container: bool,
    /// Physical memory in bytes. Zero when unknown.
    pub memory: u64,
    /// Collectors known to be running from evidence outside the options
    /// (e.g. a GC log). Ground truth that overrides flag inference.
    pub garbage_collectors: Vec<GarbageCollector>,
}

impl JvmContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the major version is known and at least `version`.
    pub fn major_at_least(&self, version: u32) -> bool {
        self.major_version.unwrap_or(0) >= version
    }

    /// True when the major version is at most `version`. An unidentified
    /// version counts as zero, so it passes.
    pub fn major_at_most(&self, version: u32) -> bool {
        self.major_version.unwrap_or(0) <= version
    }

    pub fn major_is(&self, version: u32) -> bool {
        self.major_version == Some(version)
    }
}
