use std::path::PathBuf;

use clap::Parser;

/// Environment variable holding the log filter, e.g. `YANG_INJECT_LOG=debug`.
pub const LOG_ENV: &str = "YANG_INJECT_LOG";

/// Printed to stdout when the command line doesn't name exactly one draft.
pub const USAGE: &str = "usage: yang-inject <draft-xxx.md>";

#[derive(Debug, Parser)]
#[command(
	name = "yang-inject",
	version,
	about = "Replace YANG directives in a draft with module, data and tree content.",
	long_about = "yang-inject reads a draft line by line and writes `<draft>.withyang` next to \
	              it, replacing directive lines with the content they reference:\n\n  \
	              YANG-DATA   <module> <data-file>  contents of <data-file>\n  YANG-MODULE \
	              <module-file>         the module wrapped in <CODE BEGINS>/<CODE ENDS>\n  \
	              YANG-TREE   <module-file>         output of `pyang --format tree`\n\nSet \
	              YANG_INJECT_LOG=debug to see what is substituted."
)]
pub struct YangInjectCli {
	/// Path to the draft to process. May start with `-`.
	#[arg(allow_hyphen_values = true)]
	pub draft: PathBuf,
}
