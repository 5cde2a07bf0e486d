use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ConfpropError;
use crate::ConfpropResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["confprop.toml", ".confprop.toml", ".config/confprop.toml"];

/// Configuration loaded from a `confprop.toml` file.
///
/// ```toml
/// [metadata]
/// paths = [
/// 	"build/configuration-metadata.json",
/// 	"vendor/upstream-metadata.json",
/// ]
/// ```
///
/// Paths are relative to the project root and aggregated in order; a later
/// document overrides earlier records with the same property name.
#[derive(Debug, Default, Deserialize)]
pub struct ConfpropConfig {
	/// Metadata document locations.
	#[serde(default)]
	pub metadata: MetadataConfig,
}

/// The `[metadata]` section.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataConfig {
	/// JSON metadata documents to aggregate, relative to the project root.
	#[serde(default)]
	pub paths: Vec<PathBuf>,
}

impl ConfpropConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ConfpropResult<Option<ConfpropConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: ConfpropConfig =
			toml::from_str(&content).map_err(|e| ConfpropError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Metadata paths resolved against `root`.
	#[must_use]
	pub fn metadata_paths(&self, root: &Path) -> Vec<PathBuf> {
		self.metadata
			.paths
			.iter()
			.map(|path| root.join(path))
			.collect()
	}
}
