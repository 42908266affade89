use crate::ReaderState;

/// The callbacks [`process`](crate::process) drives while scanning text.
///
/// An implementation decides what a recognized reference means: the
/// [`ParamSubstitution`](crate::ParamSubstitution) handler writes resolved
/// values into an output buffer, while
/// [`ParamReferenceCollector`](crate::ParamReferenceCollector) only records
/// which names were used.
///
/// Returning an error from any fallible callback stops the scan immediately
/// and the error is returned from `process` unchanged.
pub trait ParamHandler {
	/// The failure raised by this handler.
	type Error;

	/// Called with `'#'` when the escape sequence `##` is recognized.
	fn handle_pattern_started(&mut self, ch: char) -> Result<(), Self::Error>;

	/// Called for every plain character outside of a reference.
	fn handle_not_in_pattern(&mut self, ch: char) -> Result<(), Self::Error>;

	/// Called with the body of a complete `#{…}` reference, without the
	/// delimiters.
	fn handle_pattern_found(&mut self, pattern: &str) -> Result<(), Self::Error>;

	/// Called exactly once when the input is exhausted, with the state the
	/// scan ended in. Not called when an earlier callback failed.
	fn handle_after_resolution(&mut self, state: ReaderState);
}

