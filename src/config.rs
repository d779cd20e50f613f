//! Structural markers and roll tokens the extractor looks for in a chat log.

use std::fmt;

use crate::document::MarkupNode;

/// An element tag paired with a class that must appear in the element's class list
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TagClass {
	/// Element name (e.g. `div`)
	pub tag: String,

	/// Class token that must be present on the element
	pub class: String,
}

impl TagClass {
	/// Creates a new tag/class marker.
	#[must_use]
	pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			class: class.into(),
		}
	}

	/// Checks whether a node is the given element and carries the class.
	#[must_use]
	pub fn matches<N: MarkupNode>(&self, node: &N) -> bool {
		node.name() == self.tag && node.has_class(&self.class)
	}
}

impl fmt::Display for TagClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.tag, self.class)
	}
}

/// Everything the extraction pipeline matches against.
///
/// The defaults describe the HTML chat archive exported by Roll20 for sheets using the 5th edition roll templates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
	/// Container for a single roll announcement
	pub roll_message: TagClass,

	/// Element holding the rolling character's display name, searched within a roll message
	pub participant: TagClass,

	/// Inline roll result, searched within a roll message
	pub inline_roll: TagClass,

	/// Literal that must appear in an inline roll's title for it to count as an ability check
	pub check_marker: String,

	/// Style tag marking a critical success
	pub crit_success_token: String,

	/// Style tag marking a critical fail
	pub crit_fail_token: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			roll_message: TagClass::new("div", "sheet-rolltemplate-rolls"),
			participant: TagClass::new("span", "sheet-charactername"),
			inline_roll: TagClass::new("span", "inlinerollresult"),
			check_marker: "Rolling 1d20cs20cf1".to_owned(),
			crit_success_token: "fullcrit".to_owned(),
			crit_fail_token: "fullfail".to_owned(),
		}
	}
}
