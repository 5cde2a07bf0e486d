//! `confprop_core` is the core library for the [confprop](https://github.com/ifiokjr/confprop) configuration property checker. It validates references to configuration property names against a project's published metadata and renders each name in a format-aware way, so documentation never drifts from the properties a project actually ships.
//!
//! ## Validation Pipeline
//!
//! ```text
//! Property reference (name + settings)
//!   → Metadata store (exact lookup over aggregated metadata documents)
//!   → Validator (reconciles existence + deprecation state, emits one diagnostic)
//!   → Formatter (canonical or environment variable rendering)
//!   → Rendered name returned to the caller
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `confprop.toml`, including metadata document paths.
//! - [`metadata`] — Property records, metadata sources, JSON document parsing, and the aggregated store.
//!
//! ## Key Types
//!
//! - [`MetadataStore`] — Immutable, name-keyed aggregation of property records built from one or more sources.
//! - [`PropertyValidator`] — Looks up a referenced name, reconciles deprecation state, emits exactly one diagnostic per call, and returns the rendered name.
//! - [`Logger`] — The diagnostic sink capability injected into the validator; [`TracingLogger`] forwards to the `tracing` ecosystem.
//! - [`ValidationSettings`] — Per-call options: expected deprecation state and output [`Format`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use confprop_core::Format;
//! use confprop_core::JsonMetadata;
//! use confprop_core::MetadataStore;
//! use confprop_core::PropertyValidator;
//! use confprop_core::TracingLogger;
//! use confprop_core::ValidationSettings;
//!
//! # fn main() -> confprop_core::ConfpropResult<()> {
//! let metadata = JsonMetadata::from_str(
//! 	r#"{ "properties": [{ "name": "server.port" }] }"#,
//! 	"configuration-metadata.json",
//! )?;
//! let store = MetadataStore::from_source(&metadata)?;
//! let validator = PropertyValidator::new(Arc::new(TracingLogger), store);
//!
//! let rendered = validator.validate_property(
//! 	"server.port",
//! 	ValidationSettings::new(false, Format::EnvironmentVariable),
//! );
//! assert_eq!(rendered, "SERVER_PORT");
//! # Ok(())
//! # }
//! ```
//!
//! Unknown properties and deprecation mismatches are business outcomes, not
//! errors: they warn through the injected [`Logger`] and the name still
//! renders. Hard failures are reserved for malformed metadata or config at
//! load time.

pub use config::*;
pub use error::*;
pub use format::*;
pub use metadata::*;
pub use validator::*;

pub mod config;
mod error;
mod format;
pub mod metadata;
mod validator;

#[cfg(test)]
mod __fixtures;
