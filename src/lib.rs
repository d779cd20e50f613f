#![doc = pretty_readme::docify!("README.md", "https://docs.rs/rolltally/latest/rolltally/", "./")]
#![expect(
	clippy::tabs_in_doc_comments,
	reason = "Consistency with source, user-configurability & accessibility"
)]
#![deny(macro_use_extern_crate, meta_variable_misuse, unit_bindings)]
#![warn(
	explicit_outlives_requirements,
	missing_docs,
	missing_debug_implementations,
	unreachable_pub,
	unused_crate_dependencies,
	unused_qualifications,
	clippy::pedantic,
	clippy::absolute_paths,
	clippy::allow_attributes,
	clippy::allow_attributes_without_reason,
	clippy::arithmetic_side_effects,
	clippy::cfg_not_test,
	clippy::clone_on_ref_ptr,
	clippy::cognitive_complexity,
	clippy::dbg_macro,
	clippy::doc_include_without_cfg,
	clippy::empty_enum_variants_with_brackets,
	clippy::empty_structs_with_brackets,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::exit,
	clippy::expect_used,
	clippy::field_scoped_visibility_modifiers,
	clippy::filetype_is_file,
	clippy::fn_to_numeric_cast_any,
	clippy::get_unwrap,
	clippy::if_then_some_else_none,
	clippy::infinite_loop,
	clippy::lossy_float_literal,
	clippy::map_err_ignore,
	clippy::map_with_unused_argument_over_ranges,
	clippy::missing_const_for_fn,
	clippy::missing_docs_in_private_items,
	clippy::multiple_inherent_impl,
	clippy::mutex_atomic,
	clippy::needless_raw_strings,
	clippy::non_zero_suggestions,
	clippy::panic_in_result_fn,
	clippy::pathbuf_init_then_push,
	clippy::pointer_format,
	clippy::precedence_bits,
	clippy::print_stderr,
	clippy::print_stdout,
	clippy::pub_without_shorthand,
	clippy::rc_buffer,
	clippy::rc_mutex,
	clippy::redundant_test_prefix,
	clippy::redundant_type_annotations,
	clippy::ref_patterns,
	clippy::renamed_function_params,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::return_and_then,
	clippy::same_name_method,
	clippy::self_named_module_files,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_lit_chars_any,
	clippy::suspicious_xor_used_as_pow,
	clippy::tests_outside_test_module,
	clippy::try_err,
	clippy::undocumented_unsafe_blocks,
	clippy::unnecessary_safety_comment,
	clippy::unnecessary_safety_doc,
	clippy::unnecessary_self_imports,
	clippy::unneeded_field_pattern,
	clippy::unused_result_ok,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	clippy::verbose_file_reads
)]

use std::io::{self, Write};

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod extract;
pub mod formula;
pub mod locate;
pub mod report;
pub mod roll;
pub mod stats;
pub mod tally;
pub mod title;

pub use config::Config;
pub use document::{Document, MarkupNode};
pub use extract::extract;
pub use report::Report;
pub use roll::RollEvent;
pub use tally::{ParticipantRecord, Tally};

/// Failure of a whole run: either the document couldn't be loaded or the report couldn't be written
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The chat log couldn't be opened or parsed.
	#[error(transparent)]
	Document(#[from] document::Error),

	/// Writing the report failed.
	#[error("unable to write report: {0}")]
	Report(#[from] io::Error),
}

impl Error {
	/// Checks whether the run should still end successfully. A missing chat log is reported to the user but isn't
	/// treated as a failure.
	#[must_use]
	pub const fn is_clean_exit(&self) -> bool {
		matches!(self, Self::Document(document::Error::NotFound(..)))
	}

	/// Writes the line shown to the user when a run stops because of this error.
	///
	/// # Errors
	/// If writing to `out` fails, an error variant containing the I/O error is returned.
	///
	/// # Examples
	/// ```
	/// use rolltally::{Document, Error};
	///
	/// let err = Error::from(Document::open("no such log.html").unwrap_err());
	/// let mut out = Vec::new();
	/// err.write_message(&mut out)?;
	///
	/// assert_eq!(String::from_utf8(out).unwrap(), "Error: File 'no such log.html' not found.\n");
	/// assert!(err.is_clean_exit());
	/// # Ok::<(), std::io::Error>(())
	/// ```
	pub fn write_message(&self, mut out: impl Write) -> io::Result<()> {
		match self {
			Self::Document(err @ document::Error::NotFound(..)) => writeln!(out, "Error: {err}."),
			_ => writeln!(out, "An unexpected error occurred: {self}"),
		}
	}
}

#[cfg(test)]
mod tests;

#[cfg(feature = "cli")]
use {clap as _, tracing_subscriber as _};
