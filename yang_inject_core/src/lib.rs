//! `yang_inject_core` assembles internet drafts that embed YANG modules. It
//! reads a draft line by line and replaces directive lines with the content
//! they reference, writing the result next to the draft as
//! `<draft>.withyang`.
//!
//! ## Directives
//!
//! ```text
//! YANG-DATA   <module-placeholder> <data-file>   → contents of <data-file>
//! YANG-MODULE <module-file>                      → <CODE BEGINS> file <name>
//!                                                  contents of <module-file>
//!                                                  <CODE ENDS>
//! YANG-TREE   <module-file>                      → output of `pyang --format tree`
//! ```
//!
//! Leading spaces before `YANG-` are allowed. Every other line is copied
//! through with trailing whitespace removed.
//!
//! ## Modules
//!
//! - [`config`] — Optional `yang-inject.toml` configuration for the tree
//!   formatter command.
//!
//! ## Key Types
//!
//! - [`Directive`] — A parsed directive line.
//! - [`Processor`] — Runs a single pass over a draft.
//! - [`TreeFormatter`] — Produces the tree rendering for `YANG-TREE`.
//! - [`Clock`] — Supplies the date stamped into undated module names.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let outcome = yang_inject_core::process(Path::new("draft-example-00.md")).unwrap();
//! println!("wrote {}", outcome.output_path.display());
//! ```

pub use config::*;
pub use directive::*;
pub use error::*;
pub use module_name::*;
pub use processor::*;
pub use tree::*;

pub mod config;
mod directive;
#[allow(unused_assignments)]
mod error;
mod module_name;
mod processor;
mod tree;
