//! The extraction pipeline: roll messages in, per-participant tally out.

use crate::{
	config::Config,
	diagnostics::{Diagnostic, Diagnostics},
	document::MarkupNode,
	locate::roll_messages,
	roll::parse_rolls,
	tally::Tally,
};

/// Extracts every ability check roll below `root` into a tally, in a single pass.
///
/// Messages without a participant and rolls that aren't ability checks or can't be read are skipped and reported to
/// `diagnostics`; nothing here fails.
///
/// # Examples
/// ```
/// use rolltally::{diagnostics::Silent, extract, Config, Document};
///
/// let doc = Document::parse(
/// 	r#"<div class="sheet-rolltemplate-rolls">
/// 		<span class="sheet-charactername">Alice</span>
/// 		<span class="inlinerollresult fullcrit"
/// 			title="Rolling 1d20cs20cf1 = (&lt;span class=&quot;basicdiceroll critsuccess &quot;&gt;20&lt;/span&gt;)">20</span>
/// 	</div>"#,
/// );
/// let tally = extract(&doc.root(), &Config::default(), &mut Silent);
///
/// let alice = tally.get("Alice").unwrap();
/// assert_eq!(alice.outcomes, [20]);
/// assert_eq!(alice.crit_successes, 1);
/// ```
pub fn extract<N: MarkupNode>(root: &N, config: &Config, diagnostics: &mut impl Diagnostics) -> Tally {
	let mut tally = Tally::new();
	let mut messages = 0_usize;

	for message in roll_messages(root, config) {
		messages = messages.saturating_add(1);

		let Some(participant) = message.participant else {
			diagnostics.log_diagnostic(Diagnostic::Unattributed);
			continue;
		};
		diagnostics.log_diagnostic(Diagnostic::Participant(participant.clone()));

		for event in parse_rolls(&message.node, &participant, config, diagnostics) {
			if event.crit_success {
				diagnostics.log_diagnostic(Diagnostic::CritSuccess {
					participant: participant.clone(),
					face_value: event.face_value,
				});
			}
			if event.crit_fail {
				diagnostics.log_diagnostic(Diagnostic::CritFail {
					participant: participant.clone(),
					face_value: event.face_value,
				});
			}
			tally.record(&event);
		}
	}

	diagnostics.log_diagnostic(Diagnostic::Finished {
		messages,
		rolls: tally.total_rolls(),
	});
	tally
}
