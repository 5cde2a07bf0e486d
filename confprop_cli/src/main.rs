use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use clap::Parser;
use confprop_cli::Commands;
use confprop_cli::ConfpropCli;
use confprop_cli::NameFormat;
use confprop_cli::OutputFormat;
use confprop_core::AnyEmptyResult;
use confprop_core::AnyResult;
use confprop_core::ConfpropConfig;
use confprop_core::Logger;
use confprop_core::MetadataStore;
use confprop_core::PropertyRecord;
use confprop_core::PropertyValidator;
use confprop_core::ValidationSettings;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ConfpropCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, Ordering::Relaxed);
	}

	// Verbose diagnostics (one line per clean validation) ride on tracing;
	// stdout stays reserved for command output.
	if args.verbose {
		let filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("confprop=debug"));
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.with_ansi(use_color)
			.with_target(false)
			.init();
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Validate {
			names,
			deprecated,
			format,
		}) => run_validate(&args, names, *deprecated, *format),
		Some(Commands::List { format }) => run_list(&args, *format),
		None => {
			eprintln!("No subcommand specified. Run `confprop --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<confprop_core::ConfpropError>() {
			Ok(confprop_err) => {
				let report: miette::Report = (*confprop_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &ConfpropCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Aggregate metadata documents from the repeated `--metadata` flags, falling
/// back to the paths configured in `confprop.toml` at the project root.
fn load_store(args: &ConfpropCli) -> AnyResult<MetadataStore> {
	if !args.metadata.is_empty() {
		return Ok(MetadataStore::from_paths(&args.metadata)?);
	}

	let root = resolve_root(args);
	let config = ConfpropConfig::load(&root)?.unwrap_or_default();
	let paths = config.metadata_paths(&root);

	Ok(MetadataStore::from_paths(&paths)?)
}

/// Streams validator diagnostics to the terminal. Warnings print immediately
/// and are counted for the exit code; clean validations go to tracing at
/// debug level so `--verbose` can surface them.
struct CliLogger {
	warnings: AtomicUsize,
}

impl CliLogger {
	fn new() -> Self {
		Self {
			warnings: AtomicUsize::new(0),
		}
	}

	fn warning_count(&self) -> usize {
		self.warnings.load(Ordering::Relaxed)
	}
}

impl Logger for CliLogger {
	fn warn(&self, message: &str) {
		self.warnings.fetch_add(1, Ordering::Relaxed);
		eprintln!("{} {message}", colored!("warning:", yellow));
	}

	fn debug(&self, message: &str) {
		tracing::debug!("{message}");
	}
}

fn run_validate(
	args: &ConfpropCli,
	names: &[String],
	deprecated: bool,
	format: NameFormat,
) -> AnyEmptyResult {
	let store = load_store(args)?;
	let logger = Arc::new(CliLogger::new());
	let validator = PropertyValidator::new(logger.clone(), store);
	let settings = ValidationSettings::new(deprecated, format.into());

	for name in names {
		let rendered = validator.validate_property(name, settings);
		println!("{rendered}");
	}

	let warnings = logger.warning_count();
	if warnings > 0 {
		eprintln!();
		eprintln!(
			"{} {warnings} of {} reference(s) failed validation",
			colored!("error:", red),
			names.len()
		);
		process::exit(1);
	}

	Ok(())
}

fn run_list(args: &ConfpropCli, format: OutputFormat) -> AnyEmptyResult {
	let store = load_store(args)?;
	let mut records: Vec<PropertyRecord> = store.iter().cloned().collect();
	records.sort_by(|a, b| a.name.cmp(&b.name));

	match format {
		OutputFormat::Json => {
			let properties: Vec<serde_json::Value> = records
				.iter()
				.map(|record| {
					serde_json::json!({
						"name": record.name,
						"deprecated": record.deprecated,
					})
				})
				.collect();
			let output = serde_json::json!({ "properties": properties });
			println!("{output}");
		}
		OutputFormat::Text => {
			if records.is_empty() {
				println!("No configuration properties found.");
				return Ok(());
			}

			for record in &records {
				if record.deprecated {
					println!("{} {}", record.name, colored!("(deprecated)", yellow));
				} else {
					println!("{}", record.name);
				}
			}

			println!();
			println!(
				"{} propert{} known",
				records.len(),
				if records.len() == 1 { "y" } else { "ies" }
			);
		}
	}

	Ok(())
}
