//! Summary statistics derived from a [`Tally`].

use crate::tally::{ParticipantRecord, Tally};

/// Summary of one participant's rolls, ready for reporting
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct SummaryRow {
	/// Display name of the participant
	pub name: String,

	/// Number of rolls
	pub total_rolls: usize,

	/// Arithmetic mean of the face values, unrounded (0 when there are no rolls)
	pub average: f64,

	/// Number of critical successes
	pub crit_successes: u32,

	/// Number of critical fails
	pub crit_fails: u32,

	/// Occurrences of faces 1 through 20
	pub histogram: [u32; 20],
}

impl From<&ParticipantRecord> for SummaryRow {
	fn from(record: &ParticipantRecord) -> Self {
		Self {
			name: record.name.clone(),
			total_rolls: record.outcomes.len(),
			average: mean(&record.outcomes),
			crit_successes: record.crit_successes,
			crit_fails: record.crit_fails,
			histogram: record.histogram.faces(),
		}
	}
}

/// Computes the arithmetic mean of a set of face values, defined as exactly 0 for an empty set.
///
/// # Examples
/// ```
/// use rolltally::stats::mean;
///
/// assert_eq!(mean(&[20, 1, 9]), 10.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "roll sums and counts are far below 2^52")]
pub fn mean(outcomes: &[i64]) -> f64 {
	if outcomes.is_empty() {
		return 0.0;
	}

	let sum: i128 = outcomes.iter().copied().map(i128::from).sum();
	sum as f64 / outcomes.len() as f64
}

/// Summarizes every participant in a tally, in the tally's first-seen order.
#[must_use]
pub fn summarize(tally: &Tally) -> Vec<SummaryRow> {
	tally.records().iter().map(SummaryRow::from).collect()
}
