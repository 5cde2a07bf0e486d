use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::ConfpropError;
use crate::ConfpropResult;

/// A single configuration property as declared in a project's metadata.
///
/// The `name` is the canonical dotted identifier (lower-case segments joined
/// by `.`) exactly as it appears in the metadata document. Records are
/// immutable once loaded into a [`MetadataStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
	/// Canonical dotted property name, e.g. `server.port`.
	pub name: String,
	/// Whether the metadata marks this property as deprecated.
	pub deprecated: bool,
}

impl PropertyRecord {
	pub fn new(name: impl Into<String>, deprecated: bool) -> Self {
		Self {
			name: name.into(),
			deprecated,
		}
	}
}

/// A source of property records.
///
/// Anything that can enumerate `(name, deprecated)` pairs can feed a
/// [`MetadataStore`]: a parsed metadata document, an in-memory list, or a
/// caller-defined adapter. Enumeration is fallible so that sources backed by
/// external data can surface load problems at store construction time.
pub trait MetadataSource {
	/// Enumerate every property record this source declares.
	fn enumerate(&self) -> ConfpropResult<Vec<PropertyRecord>>;
}

impl MetadataSource for [PropertyRecord] {
	fn enumerate(&self) -> ConfpropResult<Vec<PropertyRecord>> {
		Ok(self.to_vec())
	}
}

impl MetadataSource for Vec<PropertyRecord> {
	fn enumerate(&self) -> ConfpropResult<Vec<PropertyRecord>> {
		Ok(self.clone())
	}
}

/// A configuration metadata document in JSON form.
///
/// The document carries a top-level `properties` array. Each entry has a
/// `name` and is considered deprecated when it either sets the boolean
/// `deprecated` flag or carries a `deprecation` object (the newer marker;
/// its presence alone is enough, whatever detail it contains):
///
/// ```json
/// {
///   "properties": [
///     { "name": "project.a.alpha" },
///     { "name": "project.a.bravo-property", "deprecated": true },
///     {
///       "name": "project.a.charlie",
///       "deprecation": { "replacement": "project.a.alpha" }
///     }
///   ]
/// }
/// ```
///
/// Fields beyond the deprecation markers (types, descriptions, groups,
/// hints) are ignored.
#[derive(Debug, Clone)]
pub struct JsonMetadata {
	records: Vec<PropertyRecord>,
}

impl JsonMetadata {
	/// Parse a metadata document from a JSON string. `label` identifies the
	/// source in parse errors (a file path, a resource name).
	pub fn from_str(content: &str, label: &str) -> ConfpropResult<Self> {
		let document: MetadataDocument =
			serde_json::from_str(content).map_err(|e| ConfpropError::MetadataParse {
				path: label.to_string(),
				reason: e.to_string(),
			})?;

		let records = document
			.properties
			.into_iter()
			.map(PropertyEntry::into_record)
			.collect();

		Ok(Self { records })
	}

	/// Read and parse a metadata document from a file.
	pub fn from_path(path: &Path) -> ConfpropResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|e| ConfpropError::MetadataRead {
			path: path.display().to_string(),
			reason: e.to_string(),
		})?;

		Self::from_str(&content, &path.display().to_string())
	}
}

impl MetadataSource for JsonMetadata {
	fn enumerate(&self) -> ConfpropResult<Vec<PropertyRecord>> {
		Ok(self.records.clone())
	}
}

#[derive(Debug, Clone, Deserialize)]
struct MetadataDocument {
	#[serde(default)]
	properties: Vec<PropertyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct PropertyEntry {
	name: String,
	#[serde(default)]
	deprecated: bool,
	#[serde(default)]
	deprecation: Option<Deprecation>,
}

impl PropertyEntry {
	fn into_record(self) -> PropertyRecord {
		let deprecated = self.deprecated || self.deprecation.is_some();
		PropertyRecord {
			name: self.name,
			deprecated,
		}
	}
}

/// The `deprecation` detail object. All fields are optional; only the
/// object's presence matters for validation.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
struct Deprecation {
	#[serde(default)]
	level: Option<String>,
	#[serde(default)]
	reason: Option<String>,
	#[serde(default)]
	replacement: Option<String>,
}

/// An immutable, name-keyed aggregation of [`PropertyRecord`]s.
///
/// Built once from one or more [`MetadataSource`]s and queried by exact name
/// for the validator's lifetime. Lookup never folds case or matches prefixes:
/// `project.a.delta.a.b.c` is a literal segment chain, distinct from
/// `project.a.delta`.
///
/// When several sources (or one source, twice) declare the same name, the
/// record seen last wins. Later sources act as overlays over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
	properties: HashMap<String, PropertyRecord>,
}

impl MetadataStore {
	/// Build a store by aggregating every record from the given sources, in
	/// order. Fails with the first load error a source reports.
	pub fn from_sources(sources: &[&dyn MetadataSource]) -> ConfpropResult<Self> {
		let mut properties = HashMap::new();

		for source in sources {
			for record in source.enumerate()? {
				properties.insert(record.name.clone(), record);
			}
		}

		Ok(Self { properties })
	}

	/// Build a store from a single source.
	pub fn from_source(source: &dyn MetadataSource) -> ConfpropResult<Self> {
		Self::from_sources(&[source])
	}

	/// Build a store by reading a JSON metadata document from each path.
	pub fn from_paths(paths: &[impl AsRef<Path>]) -> ConfpropResult<Self> {
		let documents = paths
			.iter()
			.map(|path| JsonMetadata::from_path(path.as_ref()))
			.collect::<ConfpropResult<Vec<_>>>()?;
		let sources: Vec<&dyn MetadataSource> =
			documents.iter().map(|d| d as &dyn MetadataSource).collect();

		Self::from_sources(&sources)
	}

	/// Exact-match lookup of a property by its canonical dotted name.
	#[must_use]
	pub fn lookup(&self, name: &str) -> Option<&PropertyRecord> {
		self.properties.get(name)
	}

	/// Number of known properties.
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	/// Iterate over all records in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = &PropertyRecord> {
		self.properties.values()
	}
}
