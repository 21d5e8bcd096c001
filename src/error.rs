//! Error types for datatable views.
//!
//! Configuration errors surface at setup time; payload and parameter errors
//! are client mistakes and map to `400 Bad Request`.

use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while resolving, transforming or rendering a datatable.
#[derive(Debug, Error)]
pub enum DatatableError {
	/// The view has no datatable to delegate to.
	#[error(
		"A datatable class was not specified. Define {view}.model to use the default \
		 or pass in your custom datatable through {view}.datatable"
	)]
	ImproperlyConfigured {
		/// Name of the offending view type.
		view: String,
	},

	/// The `datatable` query parameter is not valid structured data.
	#[error("Invalid datatable payload: {0}")]
	InvalidPayload(#[from] serde_json::Error),

	/// The query string itself could not be decoded.
	#[error("Invalid query string: {0}")]
	InvalidQuery(#[from] serde_urlencoded::de::Error),

	/// A transformation parameter failed schema validation.
	#[error("Invalid datatable parameter {field}: {message}")]
	InvalidParameter {
		/// Parameter that failed validation.
		field: String,
		/// Validation error message.
		message: String,
	},

	/// The request method is not served by the view.
	#[error("Method not allowed: {0}")]
	MethodNotAllowed(String),

	/// The datatable collaborator failed to fetch or transform its records.
	#[error("Datatable transform failed: {0}")]
	Transform(String),

	/// Rows or parameters could not be serialized for the template context.
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// Settings could not be parsed.
	#[error("Invalid settings: {0}")]
	Settings(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl DatatableError {
	/// Creates an `InvalidParameter` error.
	pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidParameter {
			field: field.into(),
			message: message.into(),
		}
	}

	/// Returns the HTTP status a web layer should answer with.
	///
	/// # Examples
	///
	/// ```
	/// use http::StatusCode;
	/// use nativetables::DatatableError;
	///
	/// let error = DatatableError::invalid_parameter("page", "must be at least 1");
	/// assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
	/// ```
	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::InvalidPayload(_) | Self::InvalidQuery(_) | Self::InvalidParameter { .. } => {
				StatusCode::BAD_REQUEST
			}
			Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
			Self::ImproperlyConfigured { .. }
			| Self::Transform(_)
			| Self::Serialization(_)
			| Self::Settings(_)
			| Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns true for errors caused by the client's request.
	pub fn is_client_error(&self) -> bool {
		self.status_code().is_client_error()
	}
}

impl From<toml::de::Error> for DatatableError {
	fn from(error: toml::de::Error) -> Self {
		Self::Settings(error.to_string())
	}
}

/// Result type alias for datatable operations.
pub type Result<T> = std::result::Result<T, DatatableError>;
