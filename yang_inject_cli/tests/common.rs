use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn yang_inject_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("yang-inject"));
	cmd.env("NO_COLOR", "1").env_remove("YANG_INJECT_LOG");
	cmd
}
