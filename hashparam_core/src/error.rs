use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum HashParamError {
	#[error(transparent)]
	#[diagnostic(code(hashparam::io_error))]
	Io(#[from] std::io::Error),

	#[error("parameter `{0}` is not defined")]
	#[diagnostic(
		code(hashparam::undefined_param),
		help("define `{0}` under [params] in hashparam.toml or pass `--param {0}=<value>`")
	)]
	UndefinedParam(String),

	#[error("incomplete parameter usage in `{0}`")]
	#[diagnostic(
		code(hashparam::incomplete_param_usage),
		help("close the parameter reference with `}}`")
	)]
	IncompleteParamUsage(String),

	#[error("invalid parameter usage in `{0}`")]
	#[diagnostic(
		code(hashparam::invalid_param_usage),
		help("use `#{{name}}` to reference a parameter and `##` for a literal `#`")
	)]
	InvalidParamUsage(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(hashparam::config_parse),
		help("check that hashparam.toml is valid TOML with a [params] table of strings")
	)]
	ConfigParse(String),

	#[error("invalid parameter override: `{0}`")]
	#[diagnostic(
		code(hashparam::invalid_param_override),
		help("overrides are written as `NAME=VALUE`")
	)]
	InvalidParamOverride(String),
}

pub type HashParamResult<T> = Result<T, HashParamError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
