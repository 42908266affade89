use std::io::Read;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use clap::Parser;
use hashparam_cli::Commands;
use hashparam_cli::HashParamCli;
use hashparam_cli::InputArgs;
use hashparam_cli::OutputFormat;
use hashparam_cli::use_color;
use hashparam_core::HashParamConfig;
use hashparam_core::Params;
use hashparam_core::collect_references;
use hashparam_core::substitute;
use owo_colors::OwoColorize;
use supports_color::Stream;
use tracing::debug;
use tracing_subscriber::EnvFilter;

static STDOUT_COLOR: AtomicBool = AtomicBool::new(true);
static STDERR_COLOR: AtomicBool = AtomicBool::new(true);

fn stdout_color() -> bool {
	STDOUT_COLOR.load(Ordering::Relaxed)
}

fn stderr_color() -> bool {
	STDERR_COLOR.load(Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled for the target stream.
macro_rules! colored {
	($enabled:expr, $text:expr,red) => {
		if $enabled {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($enabled:expr, $text:expr,yellow) => {
		if $enabled {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = HashParamCli::parse();

	// Each stream is colored only when it is a color-capable terminal.
	STDOUT_COLOR.store(use_color(args.no_color, Stream::Stdout), Ordering::Relaxed);
	let miette_color = use_color(args.no_color, Stream::Stderr);
	STDERR_COLOR.store(miette_color, Ordering::Relaxed);

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(miette_color)
				.unicode(miette_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Render { input, params }) => run_render(&args, input, params),
		Some(Commands::Refs {
			input,
			check,
			format,
		}) => run_refs(&args, input, *check, *format),
		None => {
			eprintln!("No subcommand specified. Run `hashparam --help` for usage.");
			process::exit(1);
		}
	};

	match result {
		Ok(code) => process::exit(code),
		Err(e) => {
			// Try to render through miette for rich diagnostics with help text
			// and error codes.
			match e.downcast::<hashparam_core::HashParamError>() {
				Ok(err) => {
					let report: miette::Report = (*err).into();
					eprintln!("{report:?}");
				}
				Err(e) => {
					eprintln!("{} {e}", colored!(stderr_color(), "error:", red));
				}
			}
			process::exit(2);
		}
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("hashparam=debug,hashparam_core=debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.init();
}

fn resolve_root(args: &HashParamCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_params(args: &HashParamCli) -> Result<Params, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = HashParamConfig::load(&root)?.unwrap_or_default();
	debug!(count = config.params.len(), "loaded parameters");

	Ok(config.params)
}

fn read_input(input: &InputArgs) -> Result<String, Box<dyn std::error::Error>> {
	if let Some(text) = &input.text {
		return Ok(text.clone());
	}

	if let Some(file) = &input.file {
		debug!(path = %file.display(), "reading input file");
		return Ok(std::fs::read_to_string(file)?);
	}

	let mut text = String::new();
	std::io::stdin().read_to_string(&mut text)?;
	Ok(text)
}

fn run_render(
	args: &HashParamCli,
	input: &InputArgs,
	overrides: &[String],
) -> Result<i32, Box<dyn std::error::Error>> {
	let mut params = load_params(args)?;
	for raw in overrides {
		params.apply_override(raw)?;
	}

	let text = read_input(input)?;
	let rendered = substitute(&text, &params)?;
	print!("{rendered}");

	Ok(0)
}

fn run_refs(
	args: &HashParamCli,
	input: &InputArgs,
	check: bool,
	format: OutputFormat,
) -> Result<i32, Box<dyn std::error::Error>> {
	let params = load_params(args)?;
	let text = read_input(input)?;
	let references = collect_references(&text)?;
	let undefined = params.missing(&references);

	match format {
		OutputFormat::Text => {
			for name in &references {
				if undefined.contains(&name) {
					println!("{name} {}", colored!(stdout_color(), "(undefined)", yellow));
				} else {
					println!("{name}");
				}
			}
		}
		OutputFormat::Json => {
			let output = serde_json::json!({
				"references": references,
				"undefined": undefined,
			});
			println!("{}", serde_json::to_string_pretty(&output)?);
		}
	}

	if check && !undefined.is_empty() {
		eprintln!(
			"{} {} undefined parameter(s) referenced",
			colored!(stderr_color(), "error:", red),
			undefined.len()
		);
		return Ok(1);
	}

	Ok(0)
}
