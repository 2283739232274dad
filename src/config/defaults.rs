//! Default configuration values

/// Project manifest file name
pub const MANIFEST_FILE: &str = "multibuild.toml";

/// Session state directory, relative to the project
pub const STATE_DIR: &str = ".multibuild";

/// Session state file name inside [`STATE_DIR`]
pub const STATE_FILE: &str = "state.json";

/// Default artifact root directory
pub const DEFAULT_OUTPUT_ROOT: &str = "Builds";

/// Default engine command invoked by the process backend
pub const DEFAULT_ENGINE_COMMAND: &str = "engine-builder";

/// How many trailing stderr lines the process backend keeps as the
/// diagnostic message for a failed build
pub const STDERR_TAIL_LINES: usize = 10;
