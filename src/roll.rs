//! Turning inline roll results into [`RollEvent`]s.

use crate::{
	config::Config,
	diagnostics::{Diagnostic, Diagnostics},
	document::MarkupNode,
	formula::Formula,
	title,
};

/// A single recognized ability check roll
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RollEvent {
	/// Display name of the character who rolled
	pub participant: String,

	/// Value shown on the die
	pub face_value: i64,

	/// Whether the roll was styled as a critical success
	pub crit_success: bool,

	/// Whether the roll was styled as a critical fail
	pub crit_fail: bool,
}

/// Reasons an inline roll doesn't produce a [`RollEvent`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The roll isn't the kind being tallied. Carries the roll's formula when it could be read.
	#[error("not an ability check")]
	Unrecognized(Option<Formula>),

	/// The roll is an ability check but its face value couldn't be extracted.
	#[error("unable to extract face value: {0}")]
	FaceValue(#[from] title::Error),
}

/// Parses a single inline roll result attributed to a participant.
///
/// The die's face value comes from the roll's title, while criticality comes only from its style tags. The two are
/// not checked against each other.
///
/// # Errors
/// Returns [`Error::Unrecognized`] if the title doesn't announce an ability check, or [`Error::FaceValue`] if it does
/// but the face value can't be extracted from it.
pub fn parse_roll<N: MarkupNode>(roll: &N, participant: &str, config: &Config) -> Result<RollEvent, Error> {
	let title = roll.attr("title").unwrap_or_default();
	if !title::is_check(title, &config.check_marker) {
		return Err(Error::Unrecognized(Formula::from_title(title)));
	}

	Ok(RollEvent {
		participant: participant.to_owned(),
		face_value: title::face_value(title)?,
		crit_success: roll.has_class(&config.crit_success_token),
		crit_fail: roll.has_class(&config.crit_fail_token),
	})
}

/// Parses every inline roll result within a roll message, in document order.
/// Rolls that aren't recognized or can't be read are reported to the diagnostics sink and left out.
pub fn parse_rolls<N: MarkupNode>(
	message: &N,
	participant: &str,
	config: &Config,
	diagnostics: &mut impl Diagnostics,
) -> Vec<RollEvent> {
	message
		.descendants()
		.filter(|node| config.inline_roll.matches(node))
		.filter_map(|roll| {
			let title = roll.attr("title").unwrap_or_default();
			diagnostics.log_diagnostic(Diagnostic::RollInspected {
				title: title.to_owned(),
				classes: roll.classes().into_iter().map(str::to_owned).collect(),
			});

			match parse_roll(&roll, participant, config) {
				Ok(event) => Some(event),
				Err(Error::Unrecognized(formula)) => {
					diagnostics.log_diagnostic(Diagnostic::RollIgnored { formula });
					None
				}
				Err(Error::FaceValue(err)) => {
					diagnostics.log_diagnostic(Diagnostic::FaceValueUnreadable {
						title: title.to_owned(),
						error: err,
					});
					None
				}
			}
		})
		.collect()
}
