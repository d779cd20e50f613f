use crate::{
	roll::RollEvent,
	tally::{Histogram, ParticipantRecord, Tally},
};

fn roll(participant: &str, face_value: i64) -> RollEvent {
	RollEvent {
		participant: participant.to_owned(),
		face_value,
		crit_success: face_value == 20,
		crit_fail: face_value == 1,
	}
}

fn assert_consistent(record: &ParticipantRecord) {
	assert_eq!(record.histogram.total(), record.outcomes.len() as u64);
	assert!(record.crit_successes as usize <= record.outcomes.len());
	assert!(record.crit_fails as usize <= record.outcomes.len());
}

#[test]
fn empty_histogram() {
	let histogram = Histogram::new();
	assert_eq!(histogram.faces(), [0; 20]);
	assert_eq!(histogram.iter().count(), 20);
	assert_eq!(histogram.total(), 0);
}

#[test]
fn empty_tally() {
	let tally = Tally::new();
	assert!(tally.is_empty());
	assert_eq!(tally.total_rolls(), 0);
	assert!(tally.get("Alice").is_none());
}

#[test]
fn records_created_on_first_roll() {
	let mut tally = Tally::new();
	tally.record(&roll("Alice", 12));

	let alice = tally.get("Alice").unwrap();
	assert_eq!(alice.name, "Alice");
	assert_eq!(alice.outcomes, [12]);
	assert_eq!(alice.histogram.get(12), 1);
	assert_eq!(alice.crit_successes, 0);
	assert_eq!(alice.crit_fails, 0);
	assert_consistent(alice);
}

#[test]
fn outcomes_keep_roll_order() {
	let mut tally = Tally::new();
	for face in [20, 1, 10, 20, 7] {
		tally.record(&roll("Alice", face));
	}

	let alice = tally.get("Alice").unwrap();
	assert_eq!(alice.outcomes, [20, 1, 10, 20, 7]);
	assert_eq!(alice.crit_successes, 2);
	assert_eq!(alice.crit_fails, 1);

	let mut expected = [0; 20];
	expected[0] = 1;
	expected[6] = 1;
	expected[9] = 1;
	expected[19] = 2;
	assert_eq!(alice.histogram.faces(), expected);
	assert_consistent(alice);
}

#[test]
fn crits_follow_event_flags() {
	let mut tally = Tally::new();
	tally.record(&RollEvent {
		participant: "Alice".to_owned(),
		face_value: 15,
		crit_success: true,
		crit_fail: false,
	});
	tally.record(&RollEvent {
		participant: "Alice".to_owned(),
		face_value: 20,
		crit_success: false,
		crit_fail: false,
	});

	let alice = tally.get("Alice").unwrap();
	assert_eq!(alice.crit_successes, 1);
	assert_eq!(alice.histogram.get(15), 1);
	assert_consistent(alice);
}

#[test]
fn duplicates_are_counted() {
	let mut tally = Tally::new();
	let event = roll("Alice", 5);
	tally.record(&event);
	tally.record(&event);

	assert_eq!(tally.get("Alice").unwrap().outcomes, [5, 5]);
	assert_eq!(tally.total_rolls(), 2);
}

#[test]
fn participants_in_first_seen_order() {
	let mut tally = Tally::new();
	tally.record(&roll("Cass", 3));
	tally.record(&roll("Alice", 4));
	tally.record(&roll("Cass", 5));
	tally.record(&roll("Bob", 6));

	let names = tally.records().iter().map(|record| record.name.as_str()).collect::<Vec<_>>();
	assert_eq!(names, ["Cass", "Alice", "Bob"]);
	assert_eq!(tally.len(), 3);
	assert_eq!(tally.total_rolls(), 4);
	tally.records().iter().for_each(assert_consistent);
}

#[test]
fn out_of_range_values_kept() {
	let mut tally = Tally::new();
	tally.record(&roll("Alice", 25));
	tally.record(&roll("Alice", 0));
	tally.record(&roll("Alice", 20));

	let alice = tally.get("Alice").unwrap();
	assert_eq!(alice.outcomes, [25, 0, 20]);
	assert_eq!(alice.histogram.get(25), 1);
	assert_eq!(alice.histogram.get(0), 1);
	assert_eq!(alice.histogram.faces().iter().sum::<u32>(), 1);
	assert_eq!(alice.histogram.iter().count(), 22);
	assert_consistent(alice);
}
