//! Datatable settings
//!
//! Settings are plain serde structures so they can be embedded in a project's
//! own configuration or loaded from a standalone TOML file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// Query-string field carrying the serialized transformation parameters.
pub const DEFAULT_QUERY_PARAM: &str = "datatable";

static DEFAULT_SETTINGS: LazyLock<DatatableSettings> = LazyLock::new(DatatableSettings::default);

/// Settings shared by datatable views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatatableSettings {
	/// Name of the query parameter holding the JSON payload
	pub query_param: String,

	/// Upper bound for `per_page`; `None` leaves page size to the datatable
	pub max_per_page: Option<usize>,
}

impl Default for DatatableSettings {
	fn default() -> Self {
		Self {
			query_param: DEFAULT_QUERY_PARAM.to_string(),
			max_per_page: None,
		}
	}
}

impl DatatableSettings {
	/// Returns a shared instance holding the default settings.
	pub fn shared_default() -> &'static Self {
		&DEFAULT_SETTINGS
	}

	/// Parses settings from a TOML document. Missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use nativetables::DatatableSettings;
	///
	/// let settings = DatatableSettings::from_toml_str("max_per_page = 50").unwrap();
	/// assert_eq!(settings.query_param, "datatable");
	/// assert_eq!(settings.max_per_page, Some(50));
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads settings from a TOML file.
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "Loading datatable settings");
		Self::from_toml_str(&source)
	}

	/// Sets the query parameter name
	pub fn with_query_param(mut self, query_param: impl Into<String>) -> Self {
		self.query_param = query_param.into();
		self
	}

	/// Sets the `per_page` ceiling
	pub fn with_max_per_page(mut self, max_per_page: usize) -> Self {
		self.max_per_page = Some(max_per_page);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::DatatableError;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_default_settings() {
		let settings = DatatableSettings::default();
		assert_eq!(settings.query_param, "datatable");
		assert_eq!(settings.max_per_page, None);
		assert_eq!(DatatableSettings::shared_default(), &settings);
	}

	#[rstest]
	fn test_from_toml_str_overrides() {
		let settings = DatatableSettings::from_toml_str(
			r#"
			query_param = "table"
			max_per_page = 100
			"#,
		)
		.unwrap();
		assert_eq!(settings.query_param, "table");
		assert_eq!(settings.max_per_page, Some(100));
	}

	#[rstest]
	fn test_from_toml_str_empty_uses_defaults() {
		let settings = DatatableSettings::from_toml_str("").unwrap();
		assert_eq!(settings, DatatableSettings::default());
	}

	#[rstest]
	fn test_from_toml_str_rejects_wrong_type() {
		let result = DatatableSettings::from_toml_str("max_per_page = \"many\"");
		assert!(matches!(result, Err(DatatableError::Settings(_))));
	}

	#[rstest]
	fn test_from_toml_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "query_param = \"dt\"").unwrap();

		let settings = DatatableSettings::from_toml_file(file.path()).unwrap();
		assert_eq!(settings.query_param, "dt");
	}

	#[rstest]
	fn test_from_toml_file_missing() {
		let result = DatatableSettings::from_toml_file("/nonexistent/datatable.toml");
		assert!(matches!(result, Err(DatatableError::Io(_))));
	}

	#[rstest]
	fn test_builder() {
		let settings = DatatableSettings::default()
			.with_query_param("grid")
			.with_max_per_page(25);
		assert_eq!(settings.query_param, "grid");
		assert_eq!(settings.max_per_page, Some(25));
	}
}
