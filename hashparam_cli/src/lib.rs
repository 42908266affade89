use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use supports_color::Stream;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Substitute `#{name}` parameter references in text.",
	long_about = "hashparam replaces `#{name}` references in text with parameter values taken \
	              from hashparam.toml or the command line.\n\n`##` is written as a literal `#`. \
	              Any other use of `#` is rejected.\n\nQuick start:\n  hashparam render \
	              'deploy to #{env}' --param env=prod\n  hashparam refs --file pipeline.yml \
	              --check"
)]
pub struct HashParamCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory containing `hashparam.toml`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Print the input with every parameter reference replaced by its value.
	///
	/// Fails when a referenced parameter has no value, when a reference is
	/// never closed, or when a `#` is used without being escaped as `##`.
	Render {
		#[command(flatten)]
		input: InputArgs,

		/// Set a parameter value, overriding hashparam.toml. May be repeated.
		#[arg(long = "param", short = 'P', value_name = "NAME=VALUE")]
		params: Vec<String>,
	},
	/// List the parameter names referenced by the input.
	Refs {
		#[command(flatten)]
		input: InputArgs,

		/// Exit with a non-zero status code if any referenced parameter has
		/// no value in hashparam.toml.
		#[arg(long, default_value_t = false)]
		check: bool,

		/// Output format for the listing.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

/// Where to read the text to process from. Reads stdin when neither is set.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
	/// The text to process.
	#[arg(conflicts_with = "file")]
	pub text: Option<String>,

	/// Read the text to process from a file.
	#[arg(long, short)]
	pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// One name per line.
	Text,
	/// A JSON object with `references` and `undefined` arrays.
	Json,
}

/// Whether output written to `stream` should be colored. Disabled by
/// `--no-color`, the `NO_COLOR` env var, or when `stream` is not a
/// color-capable terminal.
pub fn use_color(no_color: bool, stream: Stream) -> bool {
	!no_color && std::env::var_os("NO_COLOR").is_none() && supports_color::on(stream).is_some()
}
