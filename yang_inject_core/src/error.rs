use miette::Diagnostic;
use thiserror::Error;

/// Exit code for a command line with the wrong number of arguments.
pub const EXIT_USAGE: i32 = -1;
/// Exit code for a `YANG-DATA` directive without a data file argument.
pub const EXIT_MISSING_DATA_FILE: i32 = -4;
/// Exit code for every other fatal error.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum YangInjectError {
	#[error(transparent)]
	#[diagnostic(code(yang_inject::io_error))]
	Io(#[from] std::io::Error),

	#[error("no input data file on line {line}")]
	#[diagnostic(
		code(yang_inject::missing_data_file),
		help("`YANG-DATA` takes a module placeholder followed by the data file: `YANG-DATA <module> <data-file>`")
	)]
	MissingDataFile { line: usize },

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(code(yang_inject::read_file))]
	ReadFile { path: String, reason: String },

	#[error("failed to run tree formatter for `{module}`: {reason}")]
	#[diagnostic(
		code(yang_inject::tree_formatter),
		help("make sure `pyang` is installed and on your PATH, or set `[tree] command` in yang-inject.toml")
	)]
	TreeFormatter { module: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(yang_inject::config_parse),
		help("check that yang-inject.toml is valid TOML with an optional [tree] section")
	)]
	ConfigParse(String),
}

impl YangInjectError {
	/// The process exit code this error should terminate the run with.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::MissingDataFile { .. } => EXIT_MISSING_DATA_FILE,
			_ => EXIT_FAILURE,
		}
	}
}

pub type YangInjectResult<T> = Result<T, YangInjectError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
