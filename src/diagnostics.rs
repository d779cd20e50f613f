//! Diagnostics emitted while extracting rolls, and sinks to send them to.
//!
//! Diagnostics are informational only. They never affect the extracted data, and they are kept apart from the
//! report so that callers can inspect one without the other.

use std::fmt;

use tracing::{debug, info, warn, Level};

use crate::{formula::Formula, title};

/// Something worth knowing about that happened during extraction
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
	/// A roll message is being processed for a participant.
	Participant(String),

	/// A roll message had no participant name and was skipped.
	Unattributed,

	/// An inline roll result is about to be parsed.
	RollInspected {
		/// The roll's title
		title: String,

		/// The roll's style tags
		classes: Vec<String>,
	},

	/// An inline roll wasn't an ability check.
	RollIgnored {
		/// The roll's formula, if it could be read
		formula: Option<Formula>,
	},

	/// An ability check's face value couldn't be extracted, so the roll was skipped.
	FaceValueUnreadable {
		/// The roll's title
		title: String,

		/// What went wrong
		error: title::Error,
	},

	/// A roll was styled as a critical success.
	CritSuccess {
		/// Who rolled it
		participant: String,

		/// Face value of the roll
		face_value: i64,
	},

	/// A roll was styled as a critical fail.
	CritFail {
		/// Who rolled it
		participant: String,

		/// Face value of the roll
		face_value: i64,
	},

	/// Extraction finished.
	Finished {
		/// Number of roll messages found in the document
		messages: usize,

		/// Number of ability checks captured across all participants
		rolls: usize,
	},
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Participant(name) => write!(f, "processing rolls for {name}"),
			Self::Unattributed => write!(f, "skipping roll message without a character name"),
			Self::RollInspected { title, classes } => write!(f, "roll title: {title}, classes: {}", classes.join(" ")),
			Self::RollIgnored { formula: Some(formula) } => write!(f, "ignoring {formula} roll"),
			Self::RollIgnored { formula: None } => write!(f, "ignoring roll with an unreadable formula"),
			Self::FaceValueUnreadable { title, error } => write!(f, "{error} in title: {title}"),
			Self::CritSuccess {
				participant,
				face_value,
			} => write!(f, "critical success detected for {participant}: {face_value}"),
			Self::CritFail {
				participant,
				face_value,
			} => write!(f, "critical fail detected for {participant}: {face_value}"),
			Self::Finished { messages, rolls } => {
				write!(f, "found {messages} roll messages, captured {rolls} d20 rolls")
			}
		}
	}
}

impl Diagnostic {
	/// Gets the level the diagnostic is logged at. Unreadable face values are warnings. The participant of each roll
	/// message and the final totals are info, so they show by default. Everything else is debug.
	#[must_use]
	pub const fn level(&self) -> Level {
		match self {
			Self::FaceValueUnreadable { .. } => Level::WARN,
			Self::Participant(..) | Self::Finished { .. } => Level::INFO,
			_ => Level::DEBUG,
		}
	}
}

/// Receives diagnostics as they happen
pub trait Diagnostics {
	/// Records a diagnostic.
	fn log_diagnostic(&mut self, diagnostic: Diagnostic);
}

/// Sends diagnostics to [`tracing`] at their [`Diagnostic::level`]
#[derive(Debug, Clone, Copy, Default)]
#[expect(clippy::exhaustive_structs, reason = "Stateless sink")]
pub struct Tracing;

impl Diagnostics for Tracing {
	fn log_diagnostic(&mut self, diagnostic: Diagnostic) {
		let level = diagnostic.level();
		if level == Level::WARN {
			warn!("{diagnostic}");
		} else if level == Level::INFO {
			info!("{diagnostic}");
		} else {
			debug!("{diagnostic}");
		}
	}
}

/// Discards all diagnostics
#[derive(Debug, Clone, Copy, Default)]
#[expect(clippy::exhaustive_structs, reason = "Stateless sink")]
pub struct Silent;

impl Diagnostics for Silent {
	fn log_diagnostic(&mut self, _diagnostic: Diagnostic) {}
}

impl Diagnostics for Vec<Diagnostic> {
	fn log_diagnostic(&mut self, diagnostic: Diagnostic) {
		self.push(diagnostic);
	}
}
