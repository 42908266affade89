use std::fmt::Display;

/// The states of the parameter reference scanner.
///
/// The pattern body being accumulated while in [`ReaderState::InPattern`] is
/// owned by the scan itself, never by the state, so a `ReaderState` is a
/// plain `Copy` value that can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReaderState {
	/// Outside of any reference. The initial state, and the only terminal
	/// state that means the whole input was well formed.
	#[default]
	NotInPattern,
	/// A single `#` has been consumed and the next character decides whether
	/// it is an escape (`##`) or the start of a reference (`#{`).
	HashSeen,
	/// Inside an open `#{…` reference, accumulating its body.
	InPattern,
	/// A `#` was followed by something other than `#` or `{`. Every
	/// following character is discarded.
	InvalidPattern,
}

/// What the scanner must do with the character that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// Drop the character.
	Skip,
	/// Pass the character through as literal text.
	EmitLiteral,
	/// Emit an escaped `#`.
	EmitHash,
	/// Reset the pattern buffer to start a new reference body.
	StartPattern,
	/// Append the character to the pattern buffer.
	AppendToPattern,
	/// The reference is complete and its body should be resolved.
	ResolvePattern,
}

impl ReaderState {
	/// Apply the transition table for one input character, returning the
	/// action to perform and the next state.
	pub fn transition(self, ch: char) -> (Action, Self) {
		match (self, ch) {
			(Self::NotInPattern, '#') => (Action::Skip, Self::HashSeen),
			(Self::NotInPattern, _) => (Action::EmitLiteral, Self::NotInPattern),
			(Self::HashSeen, '#') => (Action::EmitHash, Self::NotInPattern),
			(Self::HashSeen, '{') => (Action::StartPattern, Self::InPattern),
			(Self::HashSeen, _) | (Self::InvalidPattern, _) => {
				(Action::Skip, Self::InvalidPattern)
			}
			(Self::InPattern, '}') => (Action::ResolvePattern, Self::NotInPattern),
			(Self::InPattern, _) => (Action::AppendToPattern, Self::InPattern),
		}
	}

	/// Returns true when this state will swallow every remaining character.
	pub fn is_sink(self) -> bool {
		matches!(self, Self::InvalidPattern)
	}
}

impl Display for ReaderState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NotInPattern => write!(f, "not in pattern"),
			Self::HashSeen => write!(f, "hash seen"),
			Self::InPattern => write!(f, "in pattern"),
			Self::InvalidPattern => write!(f, "invalid pattern"),
		}
	}
}
