use tracing::Level;

use crate::{
	diagnostics::Diagnostic,
	formula::Formula,
	title,
};

#[test]
fn shown_by_default() {
	assert_eq!(Diagnostic::Participant("Alice".to_owned()).level(), Level::INFO);
	assert_eq!(Diagnostic::Finished { messages: 2, rolls: 3 }.level(), Level::INFO);
	assert_eq!(
		Diagnostic::FaceValueUnreadable {
			title: "Rolling 1d20cs20cf1 = (unrendered)".to_owned(),
			error: title::Error::Missing,
		}
		.level(),
		Level::WARN
	);
}

#[test]
fn per_roll_detail_is_debug() {
	let detail = [
		Diagnostic::Unattributed,
		Diagnostic::RollInspected {
			title: "Rolling 1d6".to_owned(),
			classes: vec!["inlinerollresult".to_owned()],
		},
		Diagnostic::RollIgnored {
			formula: Some(Formula::new(1, 6)),
		},
		Diagnostic::CritSuccess {
			participant: "Alice".to_owned(),
			face_value: 20,
		},
		Diagnostic::CritFail {
			participant: "Alice".to_owned(),
			face_value: 1,
		},
	];
	for diagnostic in detail {
		assert_eq!(diagnostic.level(), Level::DEBUG, "{diagnostic}");
	}
}

#[test]
fn messages_read_naturally() {
	assert_eq!(Diagnostic::Participant("Alice".to_owned()).to_string(), "processing rolls for Alice");
	assert_eq!(
		Diagnostic::RollIgnored {
			formula: Some(Formula::new(1, 6)),
		}
		.to_string(),
		"ignoring 1d6 roll"
	);
	assert_eq!(
		Diagnostic::Finished { messages: 2, rolls: 3 }.to_string(),
		"found 2 roll messages, captured 3 d20 rolls"
	);
}
