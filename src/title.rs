//! The grammar of inline roll titles.
//!
//! The tabletop renders a roll's breakdown as escaped markup inside the `title` attribute, e.g.
//! `Rolling 1d20cs20cf1 = (<span class="basicdiceroll critsuccess ">20</span>)`. The die's face value is the text
//! between the `basicdiceroll` marker (optionally decorated with `critsuccess` or `critfail`) and the next `<`.

use std::{num::ParseIntError, sync::OnceLock};

use regex::Regex;

/// Pattern for the face value of a basic die roll, capturing everything up to the next `<`
pub const FACE_VALUE_PATTERN: &str = r#"class="basicdiceroll(?: critsuccess | critfail )?">(.*?)<"#;

/// Gets the compiled face value pattern.
#[expect(clippy::expect_used, reason = "The pattern is a constant")]
fn face_value_regex() -> &'static Regex {
	static FACE_VALUE: OnceLock<Regex> = OnceLock::new();
	FACE_VALUE.get_or_init(|| Regex::new(FACE_VALUE_PATTERN).expect("face value pattern is valid"))
}

/// Checks whether a title announces a roll of the given kind.
#[must_use]
pub fn is_check(title: &str, marker: &str) -> bool {
	title.contains(marker)
}

/// Extracts the face value from the first basic die roll in a title.
/// Surrounding whitespace in the captured text is ignored and a leading sign is accepted.
/// The value isn't checked against the die's range.
///
/// # Errors
/// Returns [`Error::Missing`] if the title has no basic die roll, or [`Error::Invalid`] if the roll's text isn't an
/// integer.
///
/// # Examples
/// ```
/// use rolltally::title::{face_value, Error};
///
/// let title = r#"Rolling 1d20cs20cf1 = (<span class="basicdiceroll critfail ">1</span>)"#;
/// assert_eq!(face_value(title)?, 1);
///
/// assert!(matches!(face_value("Rolling 1d20cs20cf1 = (7)"), Err(Error::Missing)));
/// # Ok::<(), Error>(())
/// ```
pub fn face_value(title: &str) -> Result<i64, Error> {
	let raw = face_value_regex()
		.captures(title)
		.and_then(|caps| caps.get(1))
		.ok_or(Error::Missing)?
		.as_str();

	raw.trim().parse().map_err(|source| Error::Invalid {
		raw: raw.to_owned(),
		source,
	})
}

/// Reasons a face value can't be extracted from a title
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The title doesn't contain a basic die roll.
	#[error("no basic die roll found")]
	Missing,

	/// The basic die roll's text isn't an integer.
	#[error("invalid roll value {raw:?}: {source}")]
	Invalid {
		/// Text found where the value should be
		raw: String,

		/// Underlying parse failure
		#[source]
		source: ParseIntError,
	},
}
