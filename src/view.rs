//! Generic list view backed by a datatable

use crate::context::Context;
use crate::datatable::Datatable;
use crate::error::{DatatableError, Result};
use crate::mixins::DatatableMixin;
use crate::params::QueryParams;
use crate::settings::DatatableSettings;
use http::{Method, Request};

/// Request lifecycle of a list view
///
/// `dispatch` checks the method and runs `get`, which resolves the request's
/// query parameters, transforms the queryset and builds the context.
pub trait ListView: DatatableMixin {
	/// Returns the list of HTTP methods allowed by this view
	fn allowed_methods(&self) -> Vec<&'static str> {
		vec!["GET", "HEAD", "OPTIONS"]
	}

	/// Handle a GET request
	fn get<B>(&self, request: &Request<B>, extra: Context) -> Result<Context> {
		let query = QueryParams::from_request(request)?;
		let queryset = self.get_queryset(&query)?;
		self.get_context_data(queryset, extra)
	}

	/// Route a request to its handler
	fn dispatch<B>(&self, request: &Request<B>, extra: Context) -> Result<Context> {
		let method = request.method();
		if !self
			.allowed_methods()
			.iter()
			.any(|allowed| *allowed == method.as_str())
		{
			return Err(DatatableError::MethodNotAllowed(method.to_string()));
		}

		if *method == Method::OPTIONS {
			let mut context = Context::new();
			context.insert(
				"allowed_methods".to_string(),
				serde_json::json!(self.allowed_methods()),
			);
			return Ok(context);
		}

		self.get(request, extra)
	}
}

/// List view that renders a [`Datatable`]
///
/// # Examples
///
/// ```
/// use nativetables::{Context, Datatable, DatatableView, ListView, Listing, Result, Transform, TransformParams};
/// use http::Request;
///
/// struct Rows;
///
/// impl Transform for Rows {
///     type Row = u32;
///
///     fn transform(self, _params: &TransformParams) -> Result<Listing<u32>> {
///         Ok(Listing::Plain(vec![1, 2]))
///     }
/// }
///
/// struct WidgetTable;
///
/// impl Datatable for WidgetTable {
///     type Row = u32;
///     type Records = Rows;
///
///     fn model_name(&self) -> &str {
///         "Widget"
///     }
///
///     fn initial(&self) -> TransformParams {
///         TransformParams::new()
///     }
///
///     fn all(&self) -> Result<Rows> {
///         Ok(Rows)
///     }
/// }
///
/// let view = DatatableView::new().with_datatable(WidgetTable);
/// let request = Request::get("/widgets/").body(()).unwrap();
/// let context = view.dispatch(&request, Context::new()).unwrap();
/// assert_eq!(context["widget_table"], serde_json::json!([1, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct DatatableView<T> {
	datatable: Option<T>,
	context_datatable_name: Option<String>,
	settings: DatatableSettings,
}

impl<T: Datatable> DatatableView<T> {
	/// Creates a view without a datatable
	pub fn new() -> Self {
		Self {
			datatable: None,
			context_datatable_name: None,
			settings: DatatableSettings::default(),
		}
	}

	/// Sets the datatable
	pub fn with_datatable(mut self, datatable: T) -> Self {
		self.datatable = Some(datatable);
		self
	}

	/// Sets the template variable name for the table's rows
	pub fn with_context_datatable_name(mut self, name: impl Into<String>) -> Self {
		self.context_datatable_name = Some(name.into());
		self
	}

	/// Sets the settings
	pub fn with_settings(mut self, settings: DatatableSettings) -> Self {
		self.settings = settings;
		self
	}
}

impl<T: Datatable> Default for DatatableView<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Datatable> DatatableMixin for DatatableView<T> {
	type Table = T;

	fn datatable(&self) -> Option<&T> {
		self.datatable.as_ref()
	}

	fn context_datatable_name(&self) -> Option<&str> {
		self.context_datatable_name.as_deref()
	}

	fn settings(&self) -> &DatatableSettings {
		&self.settings
	}
}

impl<T: Datatable> ListView for DatatableView<T> {}
