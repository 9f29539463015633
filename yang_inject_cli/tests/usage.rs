mod common;

use rstest::rstest;
use yang_inject_core::AnyEmptyResult;

#[rstest]
#[case::no_arguments(&[])]
#[case::two_drafts(&["draft-a.md", "draft-b.md"])]
#[case::unknown_flag(&["--frobnicate", "draft-a.md"])]
fn wrong_arguments_print_usage(#[case] args: &[&str]) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("draft-a.md"), "text\n")?;

	let assert = common::yang_inject_cmd()
		.current_dir(tmp.path())
		.args(args)
		.assert()
		.failure()
		.stdout(predicates::str::contains("usage: yang-inject <draft-xxx.md>"));

	#[cfg(unix)]
	assert.code(255);
	#[cfg(not(unix))]
	let _ = assert;

	assert!(!tmp.path().join("draft-a.md.withyang").exists());
	assert!(!tmp.path().join("draft-b.md.withyang").exists());

	Ok(())
}

#[test]
fn help_succeeds() {
	common::yang_inject_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicates::str::contains("YANG-MODULE"));
}

#[test]
fn version_succeeds() {
	common::yang_inject_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}
