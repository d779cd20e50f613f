//! Tab-separated rendering of summary statistics.

use std::io::{self, Write};

use crate::{
	stats::{summarize, SummaryRow},
	tally::Tally,
};

/// Column headers preceding the face value columns
const HEADERS: [&str; 5] = ["Character", "Total Rolls", "Average Roll", "Crit Success", "Crit Fail"];

/// Summary rows ordered for display, most rolls first
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
	/// Rows in display order
	rows: Vec<SummaryRow>,
}

impl Report {
	/// Creates a report from summary rows, sorting them by descending roll count.
	/// Rows with equal counts keep their relative order.
	#[must_use]
	pub fn new(mut rows: Vec<SummaryRow>) -> Self {
		rows.sort_by(|a, b| b.total_rolls.cmp(&a.total_rolls));
		Self { rows }
	}

	/// Creates a report for every participant in a tally.
	#[must_use]
	pub fn from_tally(tally: &Tally) -> Self {
		Self::new(summarize(tally))
	}

	/// Gets the rows in display order.
	#[must_use]
	pub fn rows(&self) -> &[SummaryRow] {
		&self.rows
	}

	/// Writes the header line followed by one line per row. Averages have exactly two decimal places and the face
	/// value columns run from 1 to 20.
	///
	/// # Errors
	/// Returns any error encountered while writing.
	pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
		let faces = (1..=20).map(|face: u8| face.to_string());
		let header = HEADERS.iter().map(|h| (*h).to_owned()).chain(faces).collect::<Vec<_>>();
		writeln!(out, "{}", header.join("\t"))?;

		for row in &self.rows {
			let cells = [
				row.name.clone(),
				row.total_rolls.to_string(),
				format!("{:.2}", row.average),
				row.crit_successes.to_string(),
				row.crit_fails.to_string(),
			];
			let line = cells
				.into_iter()
				.chain(row.histogram.iter().map(ToString::to_string))
				.collect::<Vec<_>>();
			writeln!(out, "{}", line.join("\t"))?;
		}

		out.flush()
	}
}
