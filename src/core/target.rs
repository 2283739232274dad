//! Build target identifiers and their platform families
//!
//! Targets are a fixed enumeration defined by the host engine. Each target
//! belongs to exactly one [`TargetGroup`], which is what the host uses for
//! capability queries and active-target switching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One buildable platform/configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetId {
    Windows64,
    #[serde(rename = "MacOS")]
    MacOs,
    Linux64,
    EmbeddedLinux,
    Android,
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "tvOS")]
    TvOs,
    #[serde(rename = "WebGL")]
    WebGl,
    XboxOne,
    XboxSeries,
    #[serde(rename = "PS4")]
    Ps4,
    #[serde(rename = "PS5")]
    Ps5,
    Switch,
    #[serde(rename = "WSA")]
    Wsa,
}

/// Family classification of a target, used for host capability queries
/// and active-target switching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetGroup {
    Standalone,
    EmbeddedLinux,
    Android,
    Ios,
    TvOs,
    WebGl,
    XboxOne,
    GameCoreXboxSeries,
    Ps4,
    Ps5,
    Switch,
    Wsa,
    /// Sentinel for targets with no known family
    Unknown,
}

impl TargetId {
    /// Canonical enumeration order. This order, filtered by host support,
    /// determines build order for multi-target runs.
    pub const ALL: [TargetId; 14] = [
        TargetId::Windows64,
        TargetId::MacOs,
        TargetId::Linux64,
        TargetId::EmbeddedLinux,
        TargetId::Android,
        TargetId::Ios,
        TargetId::TvOs,
        TargetId::WebGl,
        TargetId::XboxOne,
        TargetId::XboxSeries,
        TargetId::Ps4,
        TargetId::Ps5,
        TargetId::Switch,
        TargetId::Wsa,
    ];

    /// Canonical name, used in CLI arguments, config files and output paths
    pub fn as_str(self) -> &'static str {
        match self {
            TargetId::Windows64 => "Windows64",
            TargetId::MacOs => "MacOS",
            TargetId::Linux64 => "Linux64",
            TargetId::EmbeddedLinux => "EmbeddedLinux",
            TargetId::Android => "Android",
            TargetId::Ios => "iOS",
            TargetId::TvOs => "tvOS",
            TargetId::WebGl => "WebGL",
            TargetId::XboxOne => "XboxOne",
            TargetId::XboxSeries => "XboxSeries",
            TargetId::Ps4 => "PS4",
            TargetId::Ps5 => "PS5",
            TargetId::Switch => "Switch",
            TargetId::Wsa => "WSA",
        }
    }

    /// Map this target to its platform family. Total: every target resolves,
    /// unmapped values fall back to [`TargetGroup::Unknown`].
    pub fn group(self) -> TargetGroup {
        match self {
            TargetId::Windows64 | TargetId::MacOs | TargetId::Linux64 => TargetGroup::Standalone,
            TargetId::EmbeddedLinux => TargetGroup::EmbeddedLinux,
            TargetId::Android => TargetGroup::Android,
            TargetId::Ios => TargetGroup::Ios,
            TargetId::TvOs => TargetGroup::TvOs,
            TargetId::WebGl => TargetGroup::WebGl,
            TargetId::XboxOne => TargetGroup::XboxOne,
            TargetId::XboxSeries => TargetGroup::GameCoreXboxSeries,
            TargetId::Ps4 => TargetGroup::Ps4,
            TargetId::Ps5 => TargetGroup::Ps5,
            TargetId::Switch => TargetGroup::Switch,
            TargetId::Wsa => TargetGroup::Wsa,
        }
    }

    /// Platform-specific executable extension for the built player.
    ///
    /// A policy table rather than control flow: the Android family produces
    /// `.apk` packages, desktop Windows and Linux players carry their native
    /// executable extensions, everything else is a bare name (often a
    /// directory or bundle managed by the engine itself).
    pub fn executable_extension(self) -> Option<&'static str> {
        match self {
            TargetId::Android => Some(".apk"),
            TargetId::Windows64 => Some(".exe"),
            TargetId::Linux64 => Some(".x86_64"),
            _ => None,
        }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetId {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetId::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownTarget {
                name: s.to_string(),
            })
    }
}

/// Parse error for target names not in the enumeration
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown build target '{name}'")]
pub struct UnknownTarget {
    pub name: String,
}

impl fmt::Display for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetGroup::Standalone => "Standalone",
            TargetGroup::EmbeddedLinux => "EmbeddedLinux",
            TargetGroup::Android => "Android",
            TargetGroup::Ios => "iOS",
            TargetGroup::TvOs => "tvOS",
            TargetGroup::WebGl => "WebGL",
            TargetGroup::XboxOne => "XboxOne",
            TargetGroup::GameCoreXboxSeries => "GameCoreXboxSeries",
            TargetGroup::Ps4 => "PS4",
            TargetGroup::Ps5 => "PS5",
            TargetGroup::Switch => "Switch",
            TargetGroup::Wsa => "WSA",
            TargetGroup::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_target_has_a_group() {
        for target in TargetId::ALL {
            assert_ne!(target.group(), TargetGroup::Unknown, "{target}");
        }
    }

    #[test]
    fn test_family_mapping() {
        assert_eq!(TargetId::Windows64.group(), TargetGroup::Standalone);
        assert_eq!(TargetId::MacOs.group(), TargetGroup::Standalone);
        assert_eq!(TargetId::Linux64.group(), TargetGroup::Standalone);
        assert_eq!(TargetId::Android.group(), TargetGroup::Android);
        assert_eq!(TargetId::XboxSeries.group(), TargetGroup::GameCoreXboxSeries);
    }

    #[test]
    fn test_name_round_trip() {
        for target in TargetId::ALL {
            let parsed: TargetId = target.as_str().parse().expect("canonical name parses");
            assert_eq!(parsed, target);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("windows64".parse::<TargetId>().unwrap(), TargetId::Windows64);
        assert_eq!("ANDROID".parse::<TargetId>().unwrap(), TargetId::Android);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert!("Amiga500".parse::<TargetId>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&TargetId::Ios).unwrap();
        assert_eq!(json, "\"iOS\"");
        let back: TargetId = serde_json::from_str("\"WebGL\"").unwrap();
        assert_eq!(back, TargetId::WebGl);
    }

    #[test]
    fn test_extension_policy() {
        assert_eq!(TargetId::Android.executable_extension(), Some(".apk"));
        assert_eq!(TargetId::Windows64.executable_extension(), Some(".exe"));
        assert_eq!(TargetId::Linux64.executable_extension(), Some(".x86_64"));
        assert_eq!(TargetId::WebGl.executable_extension(), None);
        assert_eq!(TargetId::MacOs.executable_extension(), None);
    }
}
