use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::YangInjectError;
use crate::YangInjectResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"yang-inject.toml",
	".yang-inject.toml",
	".config/yang-inject.toml",
];

/// Program used to render `YANG-TREE` directives.
pub const DEFAULT_TREE_COMMAND: &str = "pyang";

/// Arguments passed to the tree program ahead of the module path.
pub const DEFAULT_TREE_ARGS: [&str; 4] = ["--format", "tree", "--path", "modules:."];

/// Configuration loaded from a `yang-inject.toml` file.
///
/// ```toml
/// [tree]
/// command = "pyang"
/// args = ["--format", "tree", "--path", "modules:."]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct YangInjectConfig {
	/// How `YANG-TREE` directives are rendered.
	#[serde(default)]
	pub tree: TreeConfig,
}

/// The external tree formatter invocation. The module path is always
/// appended as the last argument.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct TreeConfig {
	#[serde(default = "default_tree_command")]
	pub command: String,
	#[serde(default = "default_tree_args")]
	pub args: Vec<String>,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			command: default_tree_command(),
			args: default_tree_args(),
		}
	}
}

fn default_tree_command() -> String {
	DEFAULT_TREE_COMMAND.to_string()
}

fn default_tree_args() -> Vec<String> {
	DEFAULT_TREE_ARGS.iter().map(ToString::to_string).collect()
}

impl YangInjectConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> YangInjectResult<Option<YangInjectConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: YangInjectConfig =
			toml::from_str(&content).map_err(|e| YangInjectError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Like [`YangInjectConfig::load`], falling back to defaults when no
	/// config file exists.
	pub fn load_or_default(root: &Path) -> YangInjectResult<YangInjectConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}
}
