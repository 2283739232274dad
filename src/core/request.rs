//! Per-target build request construction
//!
//! A [`BuildRequest`] is derived from a target plus the project's product
//! settings at orchestration time. It is immutable and never persisted.

use std::path::PathBuf;

use super::backend::Host;
use super::target::{TargetGroup, TargetId};

/// Global product settings shared by every target in a run
#[derive(Debug, Clone)]
pub struct ProductSettings {
    /// Product name, used as the output filename stem
    pub product_name: String,
    /// Ordered scene list handed to the backend
    pub scenes: Vec<String>,
    /// Root directory for build artifacts
    pub output_root: PathBuf,
}

/// Fully specified request for building one target
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub target: TargetId,
    pub group: TargetGroup,
    /// Product name, the output filename stem
    pub product_name: String,
    /// Ordered scene paths to include
    pub scenes: Vec<String>,
    /// Where the built player lands
    pub output_path: PathBuf,
    /// Incrementally append to the existing output instead of replacing it
    pub allow_append: bool,
}

impl BuildRequest {
    /// Construct the request for one target from the product settings.
    ///
    /// The output path is `<root>/<TargetId>/<ProductName><ext>`, with the
    /// extension drawn from the target's policy table. Append mode is a
    /// pass-through of what the host reports for the computed path.
    pub fn for_target(target: TargetId, settings: &ProductSettings, host: &dyn Host) -> Self {
        let output_path = output_path_for(target, settings);
        let allow_append = host.can_append(target, &output_path);
        Self {
            target,
            group: target.group(),
            product_name: settings.product_name.clone(),
            scenes: settings.scenes.clone(),
            output_path,
            allow_append,
        }
    }
}

/// Compute the artifact path for a target without consulting the host
pub fn output_path_for(target: TargetId, settings: &ProductSettings) -> PathBuf {
    let file_name = match target.executable_extension() {
        Some(ext) => format!("{}{ext}", settings.product_name),
        None => settings.product_name.clone(),
    };
    settings.output_root.join(target.as_str()).join(file_name)
}
