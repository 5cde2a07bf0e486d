use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ConfpropError {
	#[error(transparent)]
	#[diagnostic(code(confprop::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse metadata file `{path}`: {reason}")]
	#[diagnostic(
		code(confprop::metadata_parse),
		help("metadata files must be JSON documents with a top-level `properties` array")
	)]
	MetadataParse { path: String, reason: String },

	#[error("failed to read metadata file `{path}`: {reason}")]
	#[diagnostic(code(confprop::metadata_read))]
	MetadataRead { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(confprop::config_parse),
		help("check that confprop.toml is valid TOML with a [metadata] section")
	)]
	ConfigParse(String),

	#[error("unknown property format: `{0}`")]
	#[diagnostic(
		code(confprop::unknown_format),
		help("supported formats: canonical, envvar")
	)]
	UnknownFormat(String),
}

pub type ConfpropResult<T> = Result<T, ConfpropError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
