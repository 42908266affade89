use tracing::debug;
use tracing::trace;

use crate::Action;
use crate::ParamHandler;
use crate::ReaderState;

/// Scan `input` for `#{name}` references, driving `handler` with every
/// literal character, escaped `#` and complete reference found.
///
/// Each call uses its own state and pattern buffer, so concurrent scans never
/// observe each other.
pub fn process<H>(input: &str, handler: &mut H) -> Result<(), H::Error>
where
	H: ParamHandler + ?Sized,
{
	ParamScanner::new().process(input, handler)
}

/// The state carried through a single scan.
///
/// [`process`] creates one of these per call. Holding on to a scanner and
/// calling [`ParamScanner::process`] repeatedly is equivalent, since every
/// scan starts from [`ReaderState::NotInPattern`] with an empty buffer.
#[derive(Debug, Default)]
pub struct ParamScanner {
	state: ReaderState,
	pattern: String,
}

impl ParamScanner {
	pub fn new() -> Self {
		Self::default()
	}

	/// The state reached by the most recent scan.
	pub fn state(&self) -> ReaderState {
		self.state
	}

	/// The body of the reference currently being accumulated. Always empty
	/// between scans.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Run a scan over `input`.
	///
	/// On success `handle_after_resolution` has been called exactly once with
	/// the terminal state. If a handler callback fails, the rest of the input
	/// is skipped, `handle_after_resolution` is not called and the error is
	/// returned. The pattern buffer is empty when this returns either way.
	pub fn process<H>(&mut self, input: &str, handler: &mut H) -> Result<(), H::Error>
	where
		H: ParamHandler + ?Sized,
	{
		self.state = ReaderState::NotInPattern;
		self.pattern.clear();

		let result = self.scan(input, handler);
		self.pattern.clear();
		result
	}

	fn scan<H>(&mut self, input: &str, handler: &mut H) -> Result<(), H::Error>
	where
		H: ParamHandler + ?Sized,
	{
		for (offset, ch) in input.char_indices() {
			if self.state.is_sink() {
				debug!(offset, "invalid parameter syntax, discarding remaining input");
				break;
			}

			let (action, next) = self.state.transition(ch);
			trace!(offset, ?ch, from = ?self.state, to = ?next, "transition");

			match action {
				Action::Skip => {}
				Action::EmitLiteral => handler.handle_not_in_pattern(ch)?,
				Action::EmitHash => handler.handle_pattern_started(ch)?,
				Action::StartPattern => self.pattern.clear(),
				Action::AppendToPattern => self.pattern.push(ch),
				Action::ResolvePattern => {
					let found = handler.handle_pattern_found(&self.pattern);
					self.pattern.clear();
					found?;
				}
			}

			self.state = next;
		}

		debug!(state = %self.state, "parameter scan finished");
		handler.handle_after_resolution(self.state);

		Ok(())
	}
}
