use std::str::FromStr;

use crate::ConfpropError;

/// Textual rendering of a canonical dotted property name.
///
/// The set of formats is closed; a format value parsed from text fails at the
/// [`FromStr`] boundary when it is not one of the spellings below, so an
/// unrecognized format never reaches a validation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
	/// The name exactly as declared in metadata.
	#[default]
	Canonical,
	/// The uppercase, underscore-delimited form used for environment variable
	/// binding. Spelled `envvar` in textual form.
	EnvironmentVariable,
}

impl Format {
	/// Render `name` in this format.
	///
	/// `Canonical` is the identity. `EnvironmentVariable` splits the name on
	/// `.`, deletes `-` within each segment (dashes are removed, not replaced
	/// with underscores), joins the segments with `_`, and uppercases the
	/// result:
	///
	/// ```
	/// use confprop_core::Format;
	///
	/// assert_eq!(
	/// 	Format::EnvironmentVariable.apply("project.a.bravo-property"),
	/// 	"PROJECT_A_BRAVOPROPERTY"
	/// );
	/// ```
	#[must_use]
	pub fn apply(self, name: &str) -> String {
		match self {
			Self::Canonical => name.to_string(),
			Self::EnvironmentVariable => environment_variable(name),
		}
	}
}

impl FromStr for Format {
	type Err = ConfpropError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"canonical" => Ok(Self::Canonical),
			"envvar" | "environment-variable" => Ok(Self::EnvironmentVariable),
			other => Err(ConfpropError::UnknownFormat(other.to_string())),
		}
	}
}

fn environment_variable(name: &str) -> String {
	name.split('.')
		.map(|segment| segment.replace('-', ""))
		.collect::<Vec<_>>()
		.join("_")
		.to_ascii_uppercase()
}
