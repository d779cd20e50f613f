//! Dice formulas as they appear in inline roll titles (e.g. `1d20cs20cf1`, `2d20kh1`, `1d6`), and their parsers.

use std::{fmt, str::FromStr};

use chumsky::prelude::*;

/// Text that precedes the formula in an inline roll's title
pub const TITLE_PREFIX: &str = "Rolling ";

/// A set of dice with the modifiers the tabletop applied when rolling it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_structs, reason = "Dice notation is count, sides and modifiers")]
pub struct Formula {
	/// Number of dice rolled
	pub count: u8,

	/// Number of sides for each die
	pub sides: u8,

	/// Modifiers in the order they were written
	pub modifiers: Vec<Modifier>,
}

impl Formula {
	/// Creates a new formula with a given count and number of sides and no modifiers.
	#[must_use]
	pub const fn new(count: u8, sides: u8) -> Self {
		Self {
			count,
			sides,
			modifiers: Vec::new(),
		}
	}

	/// Adds a modifier to the formula.
	#[must_use]
	pub fn with(mut self, modifier: Modifier) -> Self {
		self.modifiers.push(modifier);
		self
	}

	/// Reads the formula out of an inline roll title such as `Rolling 1d20cs20cf1 = (...)`.
	/// Anything following the formula is ignored.
	///
	/// # Examples
	/// ```
	/// use rolltally::formula::Formula;
	///
	/// let formula = Formula::from_title("Rolling 1d6+2 = (4)+2").unwrap();
	/// assert_eq!(formula, Formula::new(1, 6));
	///
	/// assert!(Formula::from_title("Rolled a six").is_none());
	/// ```
	#[must_use]
	pub fn from_title(title: &str) -> Option<Self> {
		let (_, rest) = title.split_once(TITLE_PREFIX)?;
		leading().parse(rest).into_result().ok()
	}

	/// Gets the critical success condition, if the formula has one.
	#[must_use]
	pub fn crit_success(&self) -> Option<Condition> {
		self.modifiers.iter().find_map(|modifier| match modifier {
			Modifier::CritSuccess(cond) => Some(*cond),
			_ => None,
		})
	}

	/// Gets the critical fail condition, if the formula has one.
	#[must_use]
	pub fn crit_fail(&self) -> Option<Condition> {
		self.modifiers.iter().find_map(|modifier| match modifier {
			Modifier::CritFail(cond) => Some(*cond),
			_ => None,
		})
	}
}

impl fmt::Display for Formula {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}d{}{}",
			self.count,
			self.sides,
			self.modifiers.iter().map(ToString::to_string).collect::<String>()
		)
	}
}

impl FromStr for Formula {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_lowercase();
		let result = formula().parse(&lc).into_result().map_err(|errs| Error {
			details: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
		});
		result
	}
}

/// Routines the tabletop applies to a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Modifier {
	/// Marks dice meeting the condition as critical successes (`cs`).
	CritSuccess(Condition),

	/// Marks dice meeting the condition as critical fails (`cf`).
	CritFail(Condition),

	/// Keeps the highest x dice (`k`, `kh`).
	KeepHigh(u8),

	/// Keeps the lowest x dice (`kl`).
	KeepLow(u8),

	/// Rerolls dice meeting the condition, either until they no longer do (`r`) or only once (`ro`).
	Reroll {
		/// Condition that triggers a reroll
		cond: Condition,

		/// Whether rerolled dice are checked again
		recurse: bool,
	},
}

impl fmt::Display for Modifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CritSuccess(cond) => write!(f, "cs{cond}"),
			Self::CritFail(cond) => write!(f, "cf{cond}"),
			Self::KeepHigh(count) => write!(f, "kh{count}"),
			Self::KeepLow(count) => write!(f, "kl{count}"),
			Self::Reroll { cond, recurse } => write!(f, "{}{cond}", if *recurse { "r" } else { "ro" }),
		}
	}
}

/// Test applied to a die value by a [`Modifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Condition {
	/// Exactly the value (`20`, `=20`)
	Eq(u8),

	/// The value or anything higher (`>19`)
	AtLeast(u8),

	/// The value or anything lower (`<2`)
	AtMost(u8),
}

impl Condition {
	/// Checks a die value against the condition.
	#[must_use]
	pub const fn check(self, val: u8) -> bool {
		match self {
			Self::Eq(expected) => val == expected,
			Self::AtLeast(expected) => val >= expected,
			Self::AtMost(expected) => val <= expected,
		}
	}
}

impl fmt::Display for Condition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Eq(val) => write!(f, "{val}"),
			Self::AtLeast(val) => write!(f, ">{val}"),
			Self::AtMost(val) => write!(f, "<{val}"),
		}
	}
}

/// Generates a parser for a small decimal number that fits in a [`u8`]
fn number<'src>(what: &'static str) -> impl Parser<'src, &'src str, u8, extra::Err<Rich<'src, char>>> + Clone {
	text::int::<&'src str, _, _>(10).try_map(move |val: &str, span| {
		val.parse()
			.map_err(|err| Rich::custom(span, format!("{what}: {err}")))
	})
}

/// Generates a parser that specifically handles formulas like "d20", "1d20cs20cf1", "2d20kh1", etc.
pub fn formula_part<'src>() -> impl Parser<'src, &'src str, Formula, extra::Err<Rich<'src, char>>> + Clone {
	// Parser for modifier conditions
	let condition = choice((
		just('>').to(Condition::AtLeast as fn(u8) -> _),
		just('<').to(Condition::AtMost as fn(u8) -> _),
		just('=').to(Condition::Eq as fn(u8) -> _),
	))
	.or_not()
	.then(number("Modifier condition"))
	.map(|(condfn, val)| match condfn {
		Some(condfn) => condfn(val),
		None => Condition::Eq(val),
	});

	let modifier = choice((
		// Critical thresholds (e.g. cs20, cf1, cs>19)
		just("cs").ignore_then(condition.clone()).map(Modifier::CritSuccess),
		just("cf").ignore_then(condition.clone()).map(Modifier::CritFail),
		// Keep lowest (e.g. kl, kl1)
		just("kl")
			.ignore_then(number("Keep lowest count").or_not())
			.map(|count| Modifier::KeepLow(count.unwrap_or(1))),
		// Keep highest (e.g. k, kh, kh1)
		just('k')
			.ignore_then(just('h').or_not())
			.ignore_then(number("Keep highest count").or_not())
			.map(|count| Modifier::KeepHigh(count.unwrap_or(1))),
		// Reroll (e.g. ro<2, r1)
		just("ro")
			.ignore_then(condition.clone())
			.map(|cond| Modifier::Reroll { cond, recurse: false }),
		just('r')
			.ignore_then(condition)
			.map(|cond| Modifier::Reroll { cond, recurse: true }),
	));

	number("Dice count")
		.or_not()
		.then_ignore(just('d'))
		.then(number("Dice sides"))
		.then(modifier.repeated().collect::<Vec<_>>())
		.map(|((count, sides), modifiers)| Formula {
			count: count.unwrap_or(1),
			sides,
			modifiers,
		})
}

/// Generates a parser for a formula that expects end of input
pub fn formula<'src>() -> impl Parser<'src, &'src str, Formula, extra::Err<Rich<'src, char>>> + Clone {
	formula_part().then_ignore(end())
}

/// Generates a parser for a formula at the start of the input, ignoring whatever follows it
fn leading<'src>() -> impl Parser<'src, &'src str, Formula, extra::Err<Rich<'src, char>>> + Clone {
	formula_part().then_ignore(any().repeated())
}

/// Error produced when a string isn't a valid formula
#[derive(Debug, Clone, thiserror::Error)]
#[error("{details}")]
#[non_exhaustive]
pub struct Error {
	/// Every parse error, joined
	pub details: String,
}
