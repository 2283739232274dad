//! Manifest (multibuild.toml) parsing and validation
//!
//! The manifest is the main configuration file for a multibuild project:
//! the product being built, where artifacts land, which engine command the
//! process backend invokes and which targets the host can build.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::request::ProductSettings;
use super::target::TargetId;
use crate::config::defaults;
use crate::error::ManifestError;

/// The main project manifest (multibuild.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Product configuration
    pub product: ProductConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Engine command configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Host capability configuration
    #[serde(default)]
    pub host: HostConfig,
}

/// Product-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductConfig {
    /// Product name, used as the artifact filename stem
    pub name: String,

    /// Ordered scene list handed to the backend
    #[serde(default)]
    pub scenes: Vec<String>,
}

/// Where build artifacts land
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Artifact root directory, relative to the project
    #[serde(default = "default_output_root")]
    pub root: PathBuf,
}

/// The engine CLI invoked once per target by the process backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Engine command to run
    #[serde(default = "default_engine_command")]
    pub command: String,

    /// Arguments, with `{target}`, `{group}`, `{product}`, `{output}` and
    /// `{scenes}` placeholders substituted per target
    #[serde(default)]
    pub args: Vec<String>,
}

/// Which targets the host reports as buildable
///
/// The original enumerates targets by querying installed engine toolchains;
/// here the capability-checked list is injected through config, defaulting
/// to the full enumeration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    /// Buildable targets on this machine
    #[serde(default = "all_targets")]
    pub targets: Vec<TargetId>,
}

fn default_output_root() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_OUTPUT_ROOT)
}

fn default_engine_command() -> String {
    defaults::DEFAULT_ENGINE_COMMAND.to_string()
}

fn all_targets() -> Vec<TargetId> {
    TargetId::ALL.to_vec()
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            scenes: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: default_engine_command(),
            args: Vec::new(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            targets: all_targets(),
        }
    }
}

impl Manifest {
    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load the manifest from a project directory
    pub fn load(project_dir: &Path) -> Result<Self, ManifestError> {
        let path = project_dir.join(defaults::MANIFEST_FILE);
        if !path.exists() {
            return Err(ManifestError::NotFound { path });
        }
        let content = fs::read_to_string(&path).map_err(|e| ManifestError::Io {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Ok(Self::from_toml(&content)?)
    }

    /// Product settings derived from the manifest, with the output root
    /// anchored at the project directory
    pub fn product_settings(&self, project_dir: &Path) -> ProductSettings {
        ProductSettings {
            product_name: self.product.name.clone(),
            scenes: self.product.scenes.clone(),
            output_root: project_dir.join(&self.output.root),
        }
    }
}
