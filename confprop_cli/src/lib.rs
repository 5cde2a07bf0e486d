use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use confprop_core::Format;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Validate configuration property references against project metadata.",
	long_about = "confprop checks that the configuration properties your documentation mentions \
	              actually exist in the project's configuration metadata, warns when a \
	              reference disagrees with the property's deprecation state, and renders each \
	              name in the requested format.\n\nQuick start:\n  confprop validate \
	              server.port     Validate a single reference\n  confprop list              \
	              List every known property\n\nMetadata documents are JSON files with a \
	              top-level `properties` array; point at them with --metadata or a \
	              confprop.toml."
)]
pub struct ConfpropCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output, including a line for each successfully
	/// validated reference.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,

	/// JSON metadata document to load. May be repeated; later documents
	/// override earlier records with the same property name. When absent,
	/// paths are read from confprop.toml at the project root.
	#[arg(long, short, global = true)]
	pub metadata: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Validate configuration property references.
	///
	/// Looks each name up in the aggregated metadata, warns about unknown
	/// properties and deprecation mismatches, and prints each name rendered
	/// in the requested format. Exits with a non-zero status code when any
	/// reference produced a warning, so documentation builds can fail fast on
	/// stale references.
	Validate {
		/// Property names to validate, in canonical dotted form.
		#[arg(required = true)]
		names: Vec<String>,

		/// Expect the referenced properties to be deprecated. Without this
		/// flag, a deprecated property produces a warning; with it, a
		/// property that is *not* deprecated does.
		#[arg(long, default_value_t = false)]
		deprecated: bool,

		/// How to render each validated name on stdout.
		#[arg(long, value_enum, default_value_t = NameFormat::Canonical)]
		format: NameFormat,
	},
	/// List every configuration property in the aggregated metadata.
	///
	/// Prints properties in name order with a deprecation marker. Useful for
	/// discovering what a metadata document actually declares and for
	/// auditing which names documentation may reference.
	List {
		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

/// Rendering applied to validated names, mirroring
/// [`confprop_core::Format`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NameFormat {
	/// The canonical dotted form as declared in metadata.
	Canonical,
	/// The uppercase, underscore-delimited environment variable form.
	Envvar,
}

impl From<NameFormat> for Format {
	fn from(value: NameFormat) -> Self {
		match value {
			NameFormat::Canonical => Self::Canonical,
			NameFormat::Envvar => Self::EnvironmentVariable,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Each entry includes the
	/// property name and its deprecation flag.
	Json,
}
