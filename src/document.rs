//! Loading chat log documents and the minimal read-only view of their nodes that the extractor needs.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use scraper::{ElementRef, Html};

/// Read-only access to an element of a markup tree.
///
/// Only elements are visited. Text and comment nodes are reachable solely through [`Self::text`].
pub trait MarkupNode: Clone {
	/// Gets the element's tag name.
	fn name(&self) -> &str;

	/// Gets the value of an attribute, if present.
	fn attr(&self, name: &str) -> Option<&str>;

	/// Iterates over the element's direct child elements in document order.
	fn children(&self) -> impl Iterator<Item = Self>;

	/// Gets all text contained in the element and its descendants, concatenated.
	fn text(&self) -> String;

	/// Checks whether the element's class list contains a token.
	fn has_class(&self, class: &str) -> bool {
		self.attr("class")
			.is_some_and(|classes| classes.split_whitespace().any(|token| token == class))
	}

	/// Gets the element's class list (empty when there is no `class` attribute).
	fn classes(&self) -> Vec<&str> {
		self.attr("class")
			.map(|classes| classes.split_whitespace().collect())
			.unwrap_or_default()
	}

	/// Iterates depth-first over every element below this one in document order, excluding the element itself.
	fn descendants(&self) -> Descendants<Self> {
		let mut stack: Vec<Self> = self.children().collect();
		stack.reverse();
		Descendants { stack }
	}

	/// Finds the first descendant for which the predicate holds.
	fn find(&self, mut predicate: impl FnMut(&Self) -> bool) -> Option<Self> {
		self.descendants().find(|node| predicate(node))
	}
}

/// Pre-order iterator over the descendants of a [`MarkupNode`]. Created by [`MarkupNode::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<N> {
	/// Elements still to visit, next one on top
	stack: Vec<N>,
}

impl<N: MarkupNode> Iterator for Descendants<N> {
	type Item = N;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		let depth = self.stack.len();
		self.stack.extend(node.children());
		self.stack[depth..].reverse();
		Some(node)
	}
}

impl MarkupNode for ElementRef<'_> {
	fn name(&self) -> &str {
		self.value().name()
	}

	fn attr(&self, name: &str) -> Option<&str> {
		self.value().attr(name)
	}

	fn children(&self) -> impl Iterator<Item = Self> {
		(**self).children().filter_map(ElementRef::wrap)
	}

	fn text(&self) -> String {
		ElementRef::text(self).collect()
	}
}

/// A parsed chat log
#[derive(Debug)]
pub struct Document {
	/// Parsed HTML tree
	html: Html,
}

impl Document {
	/// Reads and parses the chat log at the given path.
	///
	/// # Errors
	/// Returns [`Error::NotFound`] if there is no file at the path, [`Error::Parse`] if its contents aren't valid
	/// UTF-8, and [`Error::Io`] for any other failure to read it.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
		let path = path.as_ref();
		let source = fs::read_to_string(path).map_err(|err| match err.kind() {
			io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
			io::ErrorKind::InvalidData => Error::Parse {
				path: path.to_path_buf(),
				source: err,
			},
			_ => Error::Io {
				path: path.to_path_buf(),
				source: err,
			},
		})?;

		Ok(Self::parse(&source))
	}

	/// Parses a chat log from markup already in memory. HTML parsing recovers from malformed markup, so this can't
	/// fail.
	#[must_use]
	pub fn parse(source: &str) -> Self {
		Self {
			html: Html::parse_document(source),
		}
	}

	/// Gets the document's root element.
	#[must_use]
	pub fn root(&self) -> ElementRef<'_> {
		self.html.root_element()
	}
}

/// Error that can occur while loading a [`Document`]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// Nothing exists at the given path.
	#[error("File '{}' not found", .0.display())]
	NotFound(PathBuf),

	/// The file's contents can't be parsed as markup.
	#[error("unable to parse '{}' as markup: {source}", path.display())]
	Parse {
		/// Path of the offending file
		path: PathBuf,

		/// Underlying decoding failure
		#[source]
		source: io::Error,
	},

	/// The file exists but couldn't be read.
	#[error("unable to read '{}': {source}", path.display())]
	Io {
		/// Path of the offending file
		path: PathBuf,

		/// Underlying I/O failure
		#[source]
		source: io::Error,
	},
}
