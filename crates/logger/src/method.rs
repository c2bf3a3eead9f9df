//! Canonical log methods and the allow-list over them

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The canonical methods every produced logger exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Plain output
    Log,
    /// Informational output
    Info,
    /// Warning output
    Warn,
    /// Diagnostic output
    Debug,
    /// Error output
    Error,
}

impl Method {
    /// Every canonical method, in declaration order
    pub const ALL: [Method; 5] = [
        Method::Log,
        Method::Info,
        Method::Warn,
        Method::Debug,
        Method::Error,
    ];

    /// The lowercase name of this method
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Log => "log",
            Method::Info => "info",
            Method::Warn => "warn",
            Method::Debug => "debug",
            Method::Error => "error",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| s.eq_ignore_ascii_case(method.as_str()))
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

/// A set of canonical methods, used as the allow-list for produced loggers
///
/// Methods outside the set stay present on every logger view but are bound to
/// no-ops, so callers can always invoke any canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSet(u8);

impl MethodSet {
    /// The set containing no methods
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set containing every canonical method
    pub const fn all() -> Self {
        Self(0b0001_1111)
    }

    /// Whether `method` is in the set
    pub const fn contains(self, method: Method) -> bool {
        self.0 & method.bit() != 0
    }

    /// Add `method` to the set
    pub fn insert(&mut self, method: Method) {
        self.0 |= method.bit();
    }

    /// Number of methods in the set
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the methods in the set
    pub fn iter(self) -> impl Iterator<Item = Method> {
        Method::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        let mut set = Self::empty();
        for method in iter {
            set.insert(method);
        }
        set
    }
}
