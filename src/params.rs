//! Query-string access and transformation parameters
//!
//! [`TransformParams`] is the typed form of the payload a datatable receives.
//! Unknown keys are rejected when the payload is parsed; the remaining checks
//! depend on the datatable and run in [`TransformParams::validate`].

use crate::datatable::Datatable;
use crate::error::{DatatableError, Result};
use crate::settings::DatatableSettings;
use http::{Request, Uri};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Decoded query-string parameters of a request
///
/// When a key repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	params: HashMap<String, String>,
}

impl QueryParams {
	/// Creates an empty parameter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Decodes a raw (URL-encoded) query string.
	///
	/// # Examples
	///
	/// ```
	/// use nativetables::QueryParams;
	///
	/// let query = QueryParams::from_query("name=John%20Doe&page=2").unwrap();
	/// assert_eq!(query.get("name"), Some("John Doe"));
	/// assert_eq!(query.get("page"), Some("2"));
	/// ```
	pub fn from_query(query: &str) -> Result<Self> {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
		Ok(Self {
			params: pairs.into_iter().collect(),
		})
	}

	/// Decodes the query string of a URI
	pub fn from_uri(uri: &Uri) -> Result<Self> {
		uri.query().map_or_else(|| Ok(Self::new()), Self::from_query)
	}

	/// Decodes the query string of a request
	pub fn from_request<B>(request: &Request<B>) -> Result<Self> {
		Self::from_uri(request.uri())
	}

	/// Sets a parameter
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.params.insert(key.into(), value.into());
	}

	/// Returns the decoded value for `key`
	pub fn get(&self, key: &str) -> Option<&str> {
		self.params.get(key).map(String::as_str)
	}

	/// Returns the value for `key` unless it is missing or empty
	pub fn get_non_empty(&self, key: &str) -> Option<&str> {
		self.get(key).filter(|value| !value.is_empty())
	}

	/// Returns the number of parameters
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Returns true if there are no parameters
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			params: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

/// Sorting, filtering and paging directives applied by a datatable
///
/// Serialized as a JSON object; absent members are omitted so a payload
/// survives decode → encode → decode unchanged.
///
/// # Examples
///
/// ```
/// use nativetables::TransformParams;
///
/// let params = TransformParams::from_json(r#"{"order_by": ["-created"], "page": 2}"#).unwrap();
/// assert_eq!(params.order_by, vec!["-created".to_string()]);
/// assert_eq!(params.page, Some(2));
///
/// assert!(TransformParams::from_json(r#"{"colour": "red"}"#).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformParams {
	/// Sort keys; a leading `-` sorts descending
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub order_by: Vec<String>,

	/// Requested page (1-indexed)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page: Option<usize>,

	/// Requested page size
	#[serde(skip_serializing_if = "Option::is_none")]
	pub per_page: Option<usize>,

	/// Field → value filters
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub filters: BTreeMap<String, String>,

	/// Free-text search term
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search: Option<String>,
}

impl TransformParams {
	/// Creates empty parameters
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a JSON payload
	pub fn from_json(payload: &str) -> Result<Self> {
		Ok(serde_json::from_str(payload)?)
	}

	/// Serializes to the JSON form stored as table state
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).map_err(|e| DatatableError::Serialization(e.to_string()))
	}

	/// Adds a sort key
	pub fn with_order_by(mut self, field: impl Into<String>) -> Self {
		self.order_by.push(field.into());
		self
	}

	/// Sets the page number
	pub fn with_page(mut self, page: usize) -> Self {
		self.page = Some(page);
		self
	}

	/// Sets the page size
	pub fn with_per_page(mut self, per_page: usize) -> Self {
		self.per_page = Some(per_page);
		self
	}

	/// Adds a filter
	pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
		self.filters.insert(field.into(), value.into());
		self
	}

	/// Sets the search term
	pub fn with_search(mut self, search: impl Into<String>) -> Self {
		self.search = Some(search.into());
		self
	}

	/// Returns the sort keys as `(field, descending)` pairs
	pub fn sort_keys(&self) -> impl Iterator<Item = (&str, bool)> {
		self.order_by.iter().map(|key| match key.strip_prefix('-') {
			Some(field) => (field, true),
			None => (key.as_str(), false),
		})
	}

	/// Checks the parameters against what `table` accepts and the configured limits.
	pub fn validate<T>(&self, table: &T, settings: &DatatableSettings) -> Result<()>
	where
		T: Datatable + ?Sized,
	{
		if self.page == Some(0) {
			return Err(DatatableError::invalid_parameter("page", "must be at least 1"));
		}

		match (self.per_page, settings.max_per_page) {
			(Some(0), _) => {
				return Err(DatatableError::invalid_parameter(
					"per_page",
					"must be at least 1",
				));
			}
			(Some(per_page), Some(max)) if per_page > max => {
				return Err(DatatableError::invalid_parameter(
					"per_page",
					format!("{} exceeds the maximum of {}", per_page, max),
				));
			}
			_ => {}
		}

		let sortable = table.sortable_fields();
		for (field, _) in self.sort_keys() {
			if field.is_empty() {
				return Err(DatatableError::invalid_parameter("order_by", "empty sort key"));
			}
			if sortable.is_some_and(|fields| !fields.contains(&field)) {
				return Err(DatatableError::invalid_parameter(
					"order_by",
					format!("'{}' is not sortable", field),
				));
			}
		}

		if let Some(filterable) = table.filterable_fields() {
			if let Some(field) = self
				.filters
				.keys()
				.find(|field| !filterable.contains(&field.as_str()))
			{
				return Err(DatatableError::invalid_parameter(
					"filters",
					format!("'{}' is not filterable", field),
				));
			}
		}

		Ok(())
	}
}
