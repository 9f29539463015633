use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::Clock;
use crate::CommandTreeFormatter;
use crate::Directive;
use crate::ParsedLine;
use crate::SystemClock;
use crate::TreeFormatter;
use crate::YangInjectConfig;
use crate::YangInjectError;
use crate::YangInjectResult;
use crate::module_display_name;
use crate::parse_line;

/// Suffix appended to the draft path to name the assembled document.
pub const OUTPUT_SUFFIX: &str = ".withyang";
/// Printed to the console before the tree output is echoed.
pub const TREE_STATUS_LINE: &str = "running tree dump";
/// Opening marker written in front of an embedded module.
pub const CODE_BEGINS: &str = "<CODE BEGINS>";
/// Closing marker written after an embedded module.
pub const CODE_ENDS: &str = "<CODE ENDS>";

/// Counts collected during a single pass over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
	/// Number of input lines read.
	pub lines: usize,
	/// `YANG-DATA` directives substituted.
	pub data: usize,
	/// `YANG-MODULE` directives substituted.
	pub modules: usize,
	/// `YANG-TREE` directives substituted.
	pub trees: usize,
}

impl ProcessSummary {
	/// Total number of directives that were replaced.
	pub fn directives(&self) -> usize {
		self.data + self.modules + self.trees
	}
}

/// Result of processing a draft file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
	/// Where the assembled document was written.
	pub output_path: PathBuf,
	pub summary: ProcessSummary,
}

/// The path of the assembled document for `input`: the input path with
/// [`OUTPUT_SUFFIX`] appended.
pub fn output_path_for(input: &Path) -> PathBuf {
	let mut path = OsString::from(input.as_os_str());
	path.push(OUTPUT_SUFFIX);
	PathBuf::from(path)
}

/// Replaces directive lines in a draft with the content they reference.
#[derive(Debug, Clone, Default)]
pub struct Processor<C = SystemClock, T = CommandTreeFormatter> {
	clock: C,
	tree_formatter: T,
}

impl Processor {
	/// A processor using the local date and the tree command from `config`.
	pub fn from_config(config: &YangInjectConfig) -> Self {
		Self::new(
			SystemClock,
			CommandTreeFormatter::from_config(&config.tree),
		)
	}
}

impl<C: Clock, T: TreeFormatter> Processor<C, T> {
	pub fn new(clock: C, tree_formatter: T) -> Self {
		Self {
			clock,
			tree_formatter,
		}
	}

	/// Process the draft at `input`, writing the result next to it with the
	/// [`OUTPUT_SUFFIX`]. Tree output is echoed to `console`.
	///
	/// On error the output file keeps whatever was written before the
	/// failing line.
	pub fn process_file(
		&self,
		input: &Path,
		console: &mut impl Write,
	) -> YangInjectResult<ProcessOutcome> {
		let output_path = output_path_for(input);
		let reader = BufReader::new(File::open(input)?);
		let mut writer = BufWriter::new(File::create(&output_path)?);

		tracing::debug!(input = %input.display(), output = %output_path.display(), "processing draft");

		let summary = self.process(reader, &mut writer, console)?;
		writer.flush()?;

		tracing::info!(
			output = %output_path.display(),
			lines = summary.lines,
			directives = summary.directives(),
			"wrote assembled draft"
		);

		Ok(ProcessOutcome {
			output_path,
			summary,
		})
	}

	/// Process every line of `reader` into `output`. Stops at the first
	/// error.
	///
	/// `\n`, `\r\n` and a lone `\r` all end a line.
	pub fn process(
		&self,
		reader: impl BufRead,
		output: &mut impl Write,
		console: &mut impl Write,
	) -> YangInjectResult<ProcessSummary> {
		let mut summary = ProcessSummary::default();

		for chunk in reader.split(b'\n') {
			let chunk = chunk?;
			let chunk = chunk.strip_suffix(b"\r").unwrap_or(&chunk[..]);
			let chunk = std::str::from_utf8(chunk)
				.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

			for line in chunk.split('\r') {
				summary.lines += 1;
				self.process_line(line, &mut summary, output, console)?;
			}
		}

		Ok(summary)
	}

	fn process_line(
		&self,
		line: &str,
		summary: &mut ProcessSummary,
		output: &mut impl Write,
		console: &mut impl Write,
	) -> YangInjectResult<()> {
		let line_number = summary.lines;

		let directive = match parse_line(line) {
			ParsedLine::Text => {
				writeln!(output, "{}", line.trim_end())?;
				return Ok(());
			}
			ParsedLine::Unknown { kind } => {
				tracing::warn!(line = line_number, %kind, "unknown directive type `YANG-{kind}`, copying line unchanged");
				writeln!(output, "{}", line.trim_end())?;
				return Ok(());
			}
			ParsedLine::Directive(directive) => directive,
		};

		tracing::debug!(line = line_number, kind = %directive.kind(), "substituting directive");

		match directive {
			Directive::Data { data_file } => {
				let Some(data_file) = data_file else {
					return Err(YangInjectError::MissingDataFile { line: line_number });
				};
				output.write_all(&read_referenced_file(&data_file)?)?;
				summary.data += 1;
			}
			Directive::Module { module_file } => {
				let contents = read_referenced_file(&module_file)?;
				let display_name = module_display_name(&module_file, self.clock.today());
				writeln!(output, "{CODE_BEGINS} file {display_name}")?;
				output.write_all(&contents)?;
				writeln!(output, "{CODE_ENDS}")?;
				summary.modules += 1;
			}
			Directive::Tree { module_file } => {
				let tree = self.tree_formatter.format_tree(Path::new(&module_file))?;
				writeln!(console, "{TREE_STATUS_LINE}")?;

				for tree_line in tree.split('\n') {
					writeln!(console, "{tree_line}")?;
					writeln!(output, "{tree_line}")?;
				}
				summary.trees += 1;
			}
		}

		Ok(())
	}
}

/// Process `input` with the config discovered in the working directory, the
/// local date and the configured tree command. Tree output is echoed to
/// stdout.
pub fn process(input: &Path) -> YangInjectResult<ProcessOutcome> {
	let config = YangInjectConfig::load_or_default(&std::env::current_dir()?)?;
	let processor = Processor::from_config(&config);
	let mut stdout = std::io::stdout().lock();
	processor.process_file(input, &mut stdout)
}

fn read_referenced_file(path: &str) -> YangInjectResult<Vec<u8>> {
	std::fs::read(path).map_err(|e| {
		YangInjectError::ReadFile {
			path: path.to_string(),
			reason: e.to_string(),
		}
	})
}
