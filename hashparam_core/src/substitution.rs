use tracing::debug;

use crate::HashParamError;
use crate::HashParamResult;
use crate::ParamHandler;
use crate::Params;
use crate::ReaderState;
use crate::process;

/// Replaces every `#{name}` reference with its value from [`Params`] and
/// collapses `##` to a literal `#`.
#[derive(Debug)]
pub struct ParamSubstitution<'a> {
	params: &'a Params,
	output: String,
	final_state: Option<ReaderState>,
}

impl<'a> ParamSubstitution<'a> {
	pub fn new(params: &'a Params) -> Self {
		Self {
			params,
			output: String::new(),
			final_state: None,
		}
	}

	/// The text produced so far.
	pub fn output(&self) -> &str {
		&self.output
	}

	/// The state reported at the end of the scan, if it completed.
	pub fn final_state(&self) -> Option<ReaderState> {
		self.final_state
	}

	/// Turn the outcome of the scan over `original` into the substituted
	/// text, or an error describing why `original` is not valid parameter
	/// syntax.
	pub fn finish(self, original: &str) -> HashParamResult<String> {
		ensure_complete(self.final_state, original)?;
		Ok(self.output)
	}
}

/// Map the state a scan over `original` ended in to an error unless the
/// whole input was well formed. `None` means the scan never reported a final
/// state.
pub(crate) fn ensure_complete(state: Option<ReaderState>, original: &str) -> HashParamResult<()> {
	match state {
		Some(ReaderState::NotInPattern) => Ok(()),
		Some(ReaderState::InPattern) => {
			Err(HashParamError::IncompleteParamUsage(original.to_string()))
		}
		Some(ReaderState::HashSeen | ReaderState::InvalidPattern) | None => {
			Err(HashParamError::InvalidParamUsage(original.to_string()))
		}
	}
}

impl ParamHandler for ParamSubstitution<'_> {
	type Error = HashParamError;

	fn handle_pattern_started(&mut self, ch: char) -> HashParamResult<()> {
		self.output.push(ch);
		Ok(())
	}

	fn handle_not_in_pattern(&mut self, ch: char) -> HashParamResult<()> {
		self.output.push(ch);
		Ok(())
	}

	fn handle_pattern_found(&mut self, pattern: &str) -> HashParamResult<()> {
		let Some(value) = self.params.get(pattern) else {
			debug!(name = pattern, "undefined parameter");
			return Err(HashParamError::UndefinedParam(pattern.to_string()));
		};

		self.output.push_str(value);
		Ok(())
	}

	fn handle_after_resolution(&mut self, state: ReaderState) {
		self.final_state = Some(state);
	}
}

/// Substitute every `#{name}` reference in `text` with its value from
/// `params`.
///
/// ```rust
/// use hashparam_core::Params;
/// use hashparam_core::substitute;
///
/// let params: Params = [("env", "prod")].into_iter().collect();
/// let text = substitute("deploy-#{env} ##1", &params).unwrap();
/// assert_eq!(text, "deploy-prod #1");
/// ```
pub fn substitute(text: &str, params: &Params) -> HashParamResult<String> {
	let mut handler = ParamSubstitution::new(params);
	process(text, &mut handler)?;
	handler.finish(text)
}
