use chrono::Local;
use chrono::NaiveDate;

/// File suffix of a YANG module.
pub const YANG_SUFFIX: &str = ".yang";

/// Source of the calendar date stamped into module file names.
pub trait Clock {
	fn today(&self) -> NaiveDate;
}

/// The local calendar date of the machine running the tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn today(&self) -> NaiveDate {
		Local::now().date_naive()
	}
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
	fn today(&self) -> NaiveDate {
		self.0
	}
}

/// The file name shown in the `<CODE BEGINS>` marker for `module_file`.
///
/// An undated module (`foo.yang`) gets a revision date inserted before the
/// suffix (`foo@2024-03-01.yang`). Names that already carry an `@`, or that
/// don't end in `.yang`, are returned unchanged.
pub fn module_display_name(module_file: &str, today: NaiveDate) -> String {
	if module_file.contains('@') {
		return module_file.to_string();
	}

	match module_file.strip_suffix(YANG_SUFFIX) {
		Some(base) => format!("{base}@{}{YANG_SUFFIX}", today.format("%Y-%m-%d")),
		None => module_file.to_string(),
	}
}
