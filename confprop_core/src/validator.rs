use std::sync::Arc;

use crate::Format;
use crate::MetadataStore;

/// Receives the diagnostic emitted by each validation call.
///
/// The validator only ever calls these two methods; where the messages end up
/// (a terminal, a build log, the `tracing` ecosystem) is the implementer's
/// concern. Implementations must be `Send + Sync`: a validator may be shared
/// across threads, and every call emits through the same sink.
pub trait Logger: Send + Sync {
	/// A reference that needs author attention: unknown property or
	/// deprecation mismatch.
	fn warn(&self, message: &str);
	/// A reference that validated cleanly.
	fn debug(&self, message: &str);
}

/// A [`Logger`] that forwards to [`tracing`] at the matching levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
	fn warn(&self, message: &str) {
		tracing::warn!("{message}");
	}

	fn debug(&self, message: &str) {
		tracing::debug!("{message}");
	}
}

/// Options for a single validation call.
///
/// Transient and cheap to construct, one per call, or reuse
/// [`ValidationSettings::DEFAULT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSettings {
	/// Whether the reference claims the property is deprecated.
	pub expect_deprecated: bool,
	/// How to render the returned name.
	pub format: Format,
}

impl ValidationSettings {
	/// Shared default settings: not deprecated, canonical rendering.
	pub const DEFAULT: Self = Self {
		expect_deprecated: false,
		format: Format::Canonical,
	};

	pub fn new(expect_deprecated: bool, format: Format) -> Self {
		Self {
			expect_deprecated,
			format,
		}
	}
}

/// Validates configuration property references against a [`MetadataStore`].
///
/// Construction takes the diagnostic sink and the store; both live for the
/// validator's lifetime. Validation itself does no I/O and keeps no per-call
/// state, so a shared validator can serve concurrent callers.
pub struct PropertyValidator {
	logger: Arc<dyn Logger>,
	store: MetadataStore,
}

impl PropertyValidator {
	pub fn new(logger: Arc<dyn Logger>, store: MetadataStore) -> Self {
		Self { logger, store }
	}

	/// Validate a property reference and render its name.
	///
	/// Looks the name up in the store, reconciles the record's deprecation
	/// flag against `settings.expect_deprecated`, and emits exactly one
	/// diagnostic: debug when the reference checks out, warn when the
	/// property is unknown or its deprecation state disagrees with the
	/// reference. The returned string is always the original name rendered
	/// per `settings.format`, whatever the diagnostic outcome: an unknown or
	/// mismatched reference still renders, it just warns.
	pub fn validate_property(&self, name: &str, settings: ValidationSettings) -> String {
		match self.store.lookup(name) {
			None => {
				self.logger
					.warn(&format!("Configuration property '{name}' not found."));
			}
			Some(record) if record.deprecated == settings.expect_deprecated => {
				self.logger
					.debug(&format!("Configuration property '{name}' successfully validated."));
			}
			Some(record) if record.deprecated => {
				self.logger
					.warn(&format!("Configuration property '{name}' is deprecated."));
			}
			Some(_) => {
				self.logger
					.warn(&format!("Configuration property '{name}' is not deprecated."));
			}
		}

		settings.format.apply(name)
	}

	/// The store this validator queries.
	#[must_use]
	pub fn store(&self) -> &MetadataStore {
		&self.store
	}
}
