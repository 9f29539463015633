use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a directive line after trailing whitespace has been removed.
///
/// `kind` is the uppercase word after `YANG-`, `primary` the first argument
/// and `secondary` the optional second argument (empty when absent).
static DIRECTIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^ *YANG-(?P<kind>[A-Z]+) +(?P<primary>[^ ]+) *(?P<secondary>[^ ]*)$")
		.expect("directive pattern is valid")
});

/// The directive types understood by the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
	/// `YANG-DATA <module> <data-file>`
	Data,
	/// `YANG-MODULE <module-file>`
	Module,
	/// `YANG-TREE <module-file>`
	Tree,
}

impl fmt::Display for DirectiveKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Self::Data => "DATA",
			Self::Module => "MODULE",
			Self::Tree => "TREE",
		};
		write!(f, "{s}")
	}
}

impl FromStr for DirectiveKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"DATA" => Ok(Self::Data),
			"MODULE" => Ok(Self::Module),
			"TREE" => Ok(Self::Tree),
			other => Err(other.to_string()),
		}
	}
}

/// A single directive line, parsed before any substitution happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
	/// Replace the line with the contents of `data_file`. The module
	/// placeholder in front of it is not used. `None` when the line only
	/// carries the placeholder.
	Data { data_file: Option<String> },
	/// Replace the line with `module_file` wrapped in code markers.
	Module { module_file: String },
	/// Replace the line with the tree rendering of `module_file`.
	Tree { module_file: String },
}

/// Result of matching a line against the directive grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
	/// Plain document text.
	Text,
	/// A recognized directive.
	Directive(Directive),
	/// Looks like a directive but the type is not one we handle.
	Unknown { kind: String },
}

impl Directive {
	/// Parse a line into a directive. Returns `None` for anything that is not
	/// a recognized directive, including lines with an unknown `YANG-*` type.
	pub fn parse(line: &str) -> Option<Directive> {
		match parse_line(line) {
			ParsedLine::Directive(directive) => Some(directive),
			ParsedLine::Text | ParsedLine::Unknown { .. } => None,
		}
	}

	pub fn kind(&self) -> DirectiveKind {
		match self {
			Self::Data { .. } => DirectiveKind::Data,
			Self::Module { .. } => DirectiveKind::Module,
			Self::Tree { .. } => DirectiveKind::Tree,
		}
	}
}

/// Classify a single document line. Trailing whitespace is ignored.
pub fn parse_line(line: &str) -> ParsedLine {
	let Some(captures) = DIRECTIVE_PATTERN.captures(line.trim_end()) else {
		return ParsedLine::Text;
	};

	let kind = &captures["kind"];
	let primary = captures["primary"].to_string();
	let secondary = captures
		.name("secondary")
		.map(|secondary| secondary.as_str())
		.filter(|s| !s.is_empty())
		.map(str::to_string);

	match kind.parse::<DirectiveKind>() {
		Ok(DirectiveKind::Data) => {
			ParsedLine::Directive(Directive::Data {
				data_file: secondary,
			})
		}
		Ok(DirectiveKind::Module) => {
			ParsedLine::Directive(Directive::Module {
				module_file: primary,
			})
		}
		Ok(DirectiveKind::Tree) => {
			ParsedLine::Directive(Directive::Tree {
				module_file: primary,
			})
		}
		Err(kind) => ParsedLine::Unknown { kind },
	}
}
