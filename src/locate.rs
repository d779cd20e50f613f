//! Finding roll messages in a chat log and who they belong to.

use crate::{config::Config, document::MarkupNode};

/// A roll announcement found in the chat log
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RollMessage<N> {
	/// The message's container element
	pub node: N,

	/// Display name of the character who rolled, if the message names one
	pub participant: Option<String>,
}

/// Lazily finds every roll message below `root` in document order, along with the participant each is attributed to.
/// Every call starts a fresh pass over the tree.
pub fn roll_messages<'c, N: MarkupNode + 'c>(root: &N, config: &'c Config) -> impl Iterator<Item = RollMessage<N>> + 'c {
	root.descendants()
		.filter(|node| config.roll_message.matches(node))
		.map(|node| RollMessage {
			participant: participant(&node, config),
			node,
		})
}

/// Finds the name of the character who rolled a message. The name is the trimmed text of the first participant
/// element in the message.
#[must_use]
pub fn participant<N: MarkupNode>(message: &N, config: &Config) -> Option<String> {
	message
		.find(|node| config.participant.matches(node))
		.map(|node| node.text().trim().to_owned())
}
