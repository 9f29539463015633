use std::path::Path;
use std::process::Command;

use crate::YangInjectError;
use crate::YangInjectResult;
use crate::config::TreeConfig;

/// Renders a YANG module as a tree diagram.
pub trait TreeFormatter {
	/// Return the rendered tree for `module_file` as text.
	fn format_tree(&self, module_file: &Path) -> YangInjectResult<String>;
}

/// Runs an external program, `pyang` by default, and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandTreeFormatter {
	program: String,
	args: Vec<String>,
}

impl CommandTreeFormatter {
	pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
		Self {
			program: program.into(),
			args,
		}
	}

	pub fn from_config(config: &TreeConfig) -> Self {
		Self::new(config.command.clone(), config.args.clone())
	}

	pub fn program(&self) -> &str {
		&self.program
	}

	pub fn args(&self) -> &[String] {
		&self.args
	}
}

impl Default for CommandTreeFormatter {
	fn default() -> Self {
		Self::from_config(&TreeConfig::default())
	}
}

impl TreeFormatter for CommandTreeFormatter {
	fn format_tree(&self, module_file: &Path) -> YangInjectResult<String> {
		let module = module_file.display().to_string();
		tracing::debug!(program = %self.program, args = ?self.args, %module, "running tree formatter");

		let output = Command::new(&self.program)
			.args(&self.args)
			.arg(module_file)
			.output()
			.map_err(|e| {
				YangInjectError::TreeFormatter {
					module: module.clone(),
					reason: format!("could not run `{}`: {e}", self.program),
				}
			})?;

		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
			let reason = if stderr.is_empty() {
				format!(
					"command exited with status {}",
					output
						.status
						.code()
						.map_or_else(|| "unknown".to_string(), |code| code.to_string())
				)
			} else {
				stderr
			};

			return Err(YangInjectError::TreeFormatter { module, reason });
		}

		Ok(String::from_utf8_lossy(&output.stdout).to_string())
	}
}

impl<T: TreeFormatter + ?Sized> TreeFormatter for &T {
	fn format_tree(&self, module_file: &Path) -> YangInjectResult<String> {
		(**self).format_tree(module_file)
	}
}
