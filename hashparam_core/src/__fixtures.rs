use crate::ParamHandler;
use crate::Params;
use crate::ReaderState;

/// A single callback observed by [`RecordingHandler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	PatternStarted(char),
	NotInPattern(char),
	PatternFound(String),
	AfterResolution(ReaderState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved(pub String);

/// Which callback [`RecordingHandler`] should fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
	PatternStarted,
	NotInPattern(char),
	PatternFound,
}

/// Records every callback in order. When `fail_on` matches a callback, that
/// call is recorded and then fails.
#[derive(Debug, Default)]
pub struct RecordingHandler {
	pub calls: Vec<Call>,
	pub fail_on: Option<FailOn>,
}

impl RecordingHandler {
	pub fn failing_on(fail_on: FailOn) -> Self {
		Self {
			calls: vec![],
			fail_on: Some(fail_on),
		}
	}

	pub fn failing() -> Self {
		Self::failing_on(FailOn::PatternFound)
	}

	pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
		self.calls.iter().filter(|call| predicate(call)).count()
	}

	pub fn final_states(&self) -> Vec<ReaderState> {
		self.calls
			.iter()
			.filter_map(|call| {
				match call {
					Call::AfterResolution(state) => Some(*state),
					_ => None,
				}
			})
			.collect()
	}

	fn record(&mut self, call: Call, fails: bool) -> Result<(), Unresolved> {
		let detail = format!("{call:?}");
		self.calls.push(call);

		if fails {
			return Err(Unresolved(detail));
		}

		Ok(())
	}
}

impl ParamHandler for RecordingHandler {
	type Error = Unresolved;

	fn handle_pattern_started(&mut self, ch: char) -> Result<(), Unresolved> {
		let fails = self.fail_on == Some(FailOn::PatternStarted);
		self.record(Call::PatternStarted(ch), fails)
	}

	fn handle_not_in_pattern(&mut self, ch: char) -> Result<(), Unresolved> {
		let fails = self.fail_on == Some(FailOn::NotInPattern(ch));
		self.record(Call::NotInPattern(ch), fails)
	}

	fn handle_pattern_found(&mut self, pattern: &str) -> Result<(), Unresolved> {
		if self.fail_on == Some(FailOn::PatternFound) {
			self.calls.push(Call::PatternFound(pattern.to_string()));
			return Err(Unresolved(pattern.to_string()));
		}

		self.record(Call::PatternFound(pattern.to_string()), false)
	}

	fn handle_after_resolution(&mut self, state: ReaderState) {
		self.calls.push(Call::AfterResolution(state));
	}
}

pub fn sample_params() -> Params {
	[
		("env", "production"),
		("region", "eu-west-1"),
		("empty", ""),
		("hash", "#{env}"),
	]
	.into_iter()
	.collect()
}
