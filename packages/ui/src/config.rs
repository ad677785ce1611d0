//! # Dialog configuration — `size_limit.toml`
//!
//! ```toml
//! [limits]
//! max_duration_secs = 120   # longest upload the free tool accepts
//! ```
//!
//! Every section is defaulted, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DURATION_SECS: u32 = 120;

/// Top-level configuration stored in `size_limit.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum media duration, in seconds, shown in the dialog subtitle.
    #[serde(default = "default_max_duration")]
    pub max_duration_secs: u32,
}

fn default_max_duration() -> u32 {
    DEFAULT_MAX_DURATION_SECS
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_duration_secs: default_max_duration(),
        }
    }
}

impl DialogConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "size_limit.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    #[cfg(test)]
    pub(crate) fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Human-readable duration limit: whole minutes when possible, seconds otherwise.
pub fn format_duration_limit(secs: u32) -> String {
    fn plural(n: u32, unit: &str) -> String {
        if n == 1 {
            format!("{n} {unit}")
        } else {
            format!("{n} {unit}s")
        }
    }

    if secs >= 60 && secs % 60 == 0 {
        plural(secs / 60, "minute")
    } else {
        plural(secs, "second")
    }
}
