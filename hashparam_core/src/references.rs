use std::convert::Infallible;

use crate::HashParamResult;
use crate::ParamHandler;
use crate::ReaderState;
use crate::process;
use crate::substitution::ensure_complete;

/// Records the names referenced by `#{name}` patterns without resolving
/// them. Each name is kept once, in the order it first appears.
#[derive(Debug, Default)]
pub struct ParamReferenceCollector {
	names: Vec<String>,
	final_state: Option<ReaderState>,
}

impl ParamReferenceCollector {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn final_state(&self) -> Option<ReaderState> {
		self.final_state
	}

	/// The collected names, or an error when the scan over `original` did not
	/// end on well formed input. Names after invalid syntax are never seen, so
	/// a partial list is not returned.
	pub fn finish(self, original: &str) -> HashParamResult<Vec<String>> {
		ensure_complete(self.final_state, original)?;
		Ok(self.names)
	}
}

impl ParamHandler for ParamReferenceCollector {
	type Error = Infallible;

	fn handle_pattern_started(&mut self, _ch: char) -> Result<(), Infallible> {
		Ok(())
	}

	fn handle_not_in_pattern(&mut self, _ch: char) -> Result<(), Infallible> {
		Ok(())
	}

	fn handle_pattern_found(&mut self, pattern: &str) -> Result<(), Infallible> {
		if !self.names.iter().any(|name| name == pattern) {
			self.names.push(pattern.to_string());
		}

		Ok(())
	}

	fn handle_after_resolution(&mut self, state: ReaderState) {
		self.final_state = Some(state);
	}
}

/// The parameter names referenced in `text`, in first-seen order.
///
/// Fails like [`substitute`](crate::substitute) when `text` contains an
/// unescaped `#` or an unclosed reference.
pub fn collect_references(text: &str) -> HashParamResult<Vec<String>> {
	let mut collector = ParamReferenceCollector::new();
	let Ok(()) = process(text, &mut collector);
	collector.finish(text)
}
