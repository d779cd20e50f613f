//! Running per-participant roll state.

use std::collections::{BTreeMap, HashMap};

use crate::roll::RollEvent;

/// Lowest face value on a d20
pub const MIN_FACE: i64 = 1;

/// Highest face value on a d20
pub const MAX_FACE: i64 = 20;

/// Count of rolls per face value. Buckets for 1 through 20 always exist. Values outside that range get a bucket of
/// their own when they're first counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
	/// Occurrences keyed by face value
	buckets: BTreeMap<i64, u32>,
}

impl Histogram {
	/// Creates a histogram with every d20 face at zero.
	#[must_use]
	pub fn new() -> Self {
		Self {
			buckets: (MIN_FACE..=MAX_FACE).map(|face| (face, 0)).collect(),
		}
	}

	/// Counts one occurrence of a face value.
	pub fn add(&mut self, face: i64) {
		let count = self.buckets.entry(face).or_insert(0);
		*count = count.saturating_add(1);
	}

	/// Gets the number of occurrences of a face value.
	///
	/// # Examples
	/// ```
	/// use rolltally::tally::Histogram;
	///
	/// let mut histogram = Histogram::new();
	/// histogram.add(20);
	/// histogram.add(20);
	/// assert_eq!(histogram.get(20), 2);
	/// assert_eq!(histogram.get(1), 0);
	/// assert_eq!(histogram.total(), 2);
	/// ```
	#[must_use]
	pub fn get(&self, face: i64) -> u32 {
		self.buckets.get(&face).copied().unwrap_or(0)
	}

	/// Gets the counts for faces 1 through 20, in order.
	#[must_use]
	pub fn faces(&self) -> [u32; 20] {
		let mut faces = [0; 20];
		for (count, face) in faces.iter_mut().zip(MIN_FACE..=MAX_FACE) {
			*count = self.get(face);
		}
		faces
	}

	/// Iterates over every bucket, including any outside 1 through 20, in face value order.
	pub fn iter(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
		self.buckets.iter().map(|(face, count)| (*face, *count))
	}

	/// Gets the total number of occurrences across all buckets.
	#[must_use]
	pub fn total(&self) -> u64 {
		self.buckets.values().map(|count| u64::from(*count)).sum()
	}
}

impl Default for Histogram {
	fn default() -> Self {
		Self::new()
	}
}

/// Everything recorded about a single participant's rolls
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParticipantRecord {
	/// Display name of the participant
	pub name: String,

	/// Face values in the order they were rolled
	pub outcomes: Vec<i64>,

	/// Number of rolls styled as critical successes
	pub crit_successes: u32,

	/// Number of rolls styled as critical fails
	pub crit_fails: u32,

	/// Occurrences of each face value
	pub histogram: Histogram,
}

impl ParticipantRecord {
	/// Creates an empty record for a participant.
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			outcomes: Vec::new(),
			crit_successes: 0,
			crit_fails: 0,
			histogram: Histogram::new(),
		}
	}

	/// Folds a roll into the record.
	fn record(&mut self, event: &RollEvent) {
		self.outcomes.push(event.face_value);
		self.histogram.add(event.face_value);
		if event.crit_success {
			self.crit_successes = self.crit_successes.saturating_add(1);
		}
		if event.crit_fail {
			self.crit_fails = self.crit_fails.saturating_add(1);
		}
	}
}

/// Per-participant records for a whole chat log, in the order participants were first seen
#[derive(Debug, Clone, Default)]
pub struct Tally {
	/// Records in first-seen order
	records: Vec<ParticipantRecord>,

	/// Position of each participant's record
	index: HashMap<String, usize>,
}

impl Tally {
	/// Creates an empty tally.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a single roll, creating the participant's record if this is their first.
	/// Every call counts, so recording the same roll twice counts it twice.
	pub fn record(&mut self, event: &RollEvent) {
		let pos = match self.index.get(&event.participant) {
			Some(pos) => *pos,
			None => {
				let pos = self.records.len();
				self.records.push(ParticipantRecord::new(event.participant.clone()));
				self.index.insert(event.participant.clone(), pos);
				pos
			}
		};
		self.records[pos].record(event);
	}

	/// Gets the record for a participant, if they have rolled.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&ParticipantRecord> {
		self.index.get(name).map(|pos| &self.records[*pos])
	}

	/// Gets all records in the order participants were first seen.
	#[must_use]
	pub fn records(&self) -> &[ParticipantRecord] {
		&self.records
	}

	/// Gets the number of participants with at least one roll.
	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Checks whether no rolls have been recorded.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Gets the total number of rolls recorded across all participants.
	#[must_use]
	pub fn total_rolls(&self) -> usize {
		self.records.iter().map(|record| record.outcomes.len()).sum()
	}
}
