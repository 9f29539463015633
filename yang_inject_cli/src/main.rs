use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;
use yang_inject_cli::LOG_ENV;
use yang_inject_cli::USAGE;
use yang_inject_cli::YangInjectCli;
use yang_inject_core::EXIT_USAGE;

fn main() {
	let args = match YangInjectCli::try_parse() {
		Ok(args) => args,
		Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
		Err(_) => {
			println!("{USAGE}");
			process::exit(EXIT_USAGE);
		}
	};

	// Respect NO_COLOR env var.
	let use_color = std::env::var_os("NO_COLOR").is_none();

	init_tracing(use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	match yang_inject_core::process(&args.draft) {
		Ok(outcome) => {
			tracing::debug!(
				output = %outcome.output_path.display(),
				data = outcome.summary.data,
				modules = outcome.summary.modules,
				trees = outcome.summary.trees,
				"done"
			);
		}
		Err(e) => {
			let code = e.exit_code();
			let report: miette::Report = e.into();
			eprintln!("{report:?}");
			process::exit(code);
		}
	}
}

/// Log to stderr so stdout only carries the tree dump.
fn init_tracing(use_color: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}
