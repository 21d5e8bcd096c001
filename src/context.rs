//! Template context assembly
//!
//! The per-request identity of a datatable (its template id and serialized
//! state) travels in a [`TableBinding`] from queryset production to context
//! building instead of being stored on the datatable.

use crate::error::{DatatableError, Result};
use crate::pagination::{Listing, PageObject};
use crate::params::TransformParams;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Key/value mapping handed to the template renderer
pub type Context = HashMap<String, Value>;

/// Per-request identity and state of a datatable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBinding {
	/// Template variable name, also usable as a DOM id
	pub id: String,
	/// JSON form of `params`, for re-rendering with the same sort and filters
	pub state: String,
	/// Parameters the datatable was transformed with
	pub params: TransformParams,
}

impl TableBinding {
	/// Binds `params` to the template id `id`
	pub fn new(id: impl Into<String>, params: TransformParams) -> Result<Self> {
		let state = params.to_json()?;
		Ok(Self {
			id: id.into(),
			state,
			params,
		})
	}

	/// Builds a query string that re-requests this table at `page`, keeping
	/// its sort order and filters.
	///
	/// # Examples
	///
	/// ```
	/// use nativetables::{TableBinding, TransformParams};
	///
	/// let binding = TableBinding::new("widget_table", TransformParams::new().with_order_by("name")).unwrap();
	/// assert_eq!(
	///     binding.page_query("datatable", 2).unwrap(),
	///     "datatable=%7B%22order_by%22%3A%5B%22name%22%5D%2C%22page%22%3A2%7D"
	/// );
	/// ```
	pub fn page_query(&self, query_param: &str, page: usize) -> Result<String> {
		let state = self.params.clone().with_page(page).to_json()?;
		serde_urlencoded::to_string([(query_param, state)])
			.map_err(|e| DatatableError::Serialization(e.to_string()))
	}
}

/// Transformed records together with the binding they were produced under
#[derive(Debug, Clone, PartialEq)]
pub struct DatatableQuery<T> {
	/// Per-request identity and state
	pub binding: TableBinding,
	/// Transform result
	pub object_list: Listing<T>,
}

impl<T> DatatableQuery<T> {
	/// Pairs a listing with its binding
	pub fn new(binding: TableBinding, object_list: impl Into<Listing<T>>) -> Self {
		Self {
			binding,
			object_list: object_list.into(),
		}
	}
}

fn to_value<S: Serialize + ?Sized>(value: &S) -> Result<Value> {
	serde_json::to_value(value).map_err(|e| DatatableError::Serialization(e.to_string()))
}

/// Builds the template context for a transformed datatable.
///
/// Paginated listings fill `paginator` and `page_obj`; plain listings set both
/// to `null`. `datatable` exposes the binding's id and state. `object_list`
/// and the binding id hold the rows, and the binding id is bound after every
/// other computed key. Entries in `extra` are merged last and replace computed
/// keys.
pub fn build_context<T: Serialize>(query: &DatatableQuery<T>, extra: Context) -> Result<Context> {
	let mut context = Context::new();
	let rows = to_value(query.object_list.object_list())?;

	match &query.object_list {
		Listing::Paginated(page) => {
			context.insert("paginator".to_string(), to_value(&page.paginator)?);
			context.insert("page_obj".to_string(), to_value(&PageObject::from(page))?);
			context.insert("is_paginated".to_string(), Value::Bool(true));
		}
		Listing::Plain(_) => {
			context.insert("paginator".to_string(), Value::Null);
			context.insert("page_obj".to_string(), Value::Null);
			context.insert("is_paginated".to_string(), Value::Bool(false));
		}
	}
	context.insert("object_list".to_string(), rows.clone());
	context.insert(
		"datatable".to_string(),
		json!({
			"id": query.binding.id,
			"state": query.binding.state,
		}),
	);
	// The context name outranks every computed key; only `extra` replaces it.
	context.insert(query.binding.id.clone(), rows);

	context.extend(extra);
	Ok(context)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pagination::{Page, Paginator};
	use rstest::rstest;

	fn binding() -> TableBinding {
		TableBinding::new("widget_table", TransformParams::new().with_page(1)).unwrap()
	}

	#[rstest]
	fn test_binding_state_is_json() {
		let binding = binding();
		assert_eq!(binding.id, "widget_table");
		assert_eq!(binding.state, r#"{"page":1}"#);
	}

	#[rstest]
	fn test_page_query_round_trip() {
		let binding = TableBinding::new(
			"widget_table",
			TransformParams::new()
				.with_order_by("-name")
				.with_filter("colour", "blue"),
		)
		.unwrap();

		let query = binding.page_query("datatable", 3).unwrap();
		let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&query).unwrap();
		let params = TransformParams::from_json(&decoded[0].1).unwrap();

		assert_eq!(decoded[0].0, "datatable");
		assert_eq!(params.page, Some(3));
		assert_eq!(params.order_by, vec!["-name".to_string()]);
		assert_eq!(params.filters.get("colour").map(String::as_str), Some("blue"));
	}

	#[rstest]
	fn test_plain_context() {
		let query = DatatableQuery::new(binding(), vec![json!({"id": 1})]);
		let context = build_context(&query, Context::new()).unwrap();

		assert_eq!(context["paginator"], Value::Null);
		assert_eq!(context["page_obj"], Value::Null);
		assert_eq!(context["is_paginated"], json!(false));
		assert_eq!(context["object_list"], json!([{"id": 1}]));
		assert_eq!(context["widget_table"], json!([{"id": 1}]));
		assert_eq!(
			context["datatable"],
			json!({"id": "widget_table", "state": "{\"page\":1}"})
		);
	}

	#[rstest]
	fn test_paginated_context() {
		let page = Page::new(vec![3, 4], 2, Paginator::new(5, 2));
		let query = DatatableQuery::new(binding(), page);
		let context = build_context(&query, Context::new()).unwrap();

		assert_eq!(context["is_paginated"], json!(true));
		assert_eq!(context["object_list"], json!([3, 4]));
		assert_eq!(context["widget_table"], json!([3, 4]));
		assert_eq!(
			context["paginator"],
			json!({"count": 5, "num_pages": 3, "per_page": 2})
		);
		assert_eq!(context["page_obj"]["number"], json!(2));
		assert_eq!(context["page_obj"]["object_list"], json!([3, 4]));
	}

	#[rstest]
	#[case("datatable")]
	#[case("object_list")]
	#[case("is_paginated")]
	fn test_context_name_outranks_computed_keys(#[case] name: &str) {
		let binding = TableBinding::new(name, TransformParams::new()).unwrap();
		let query = DatatableQuery::new(binding, vec![1, 2]);
		let context = build_context(&query, Context::new()).unwrap();

		assert_eq!(context[name], json!([1, 2]));
	}

	#[rstest]
	fn test_extra_overrides_computed_keys() {
		let query = DatatableQuery::new(binding(), vec![1, 2]);
		let mut extra = Context::new();
		extra.insert("is_paginated".to_string(), json!("maybe"));
		extra.insert("widget_table".to_string(), json!([]));
		extra.insert("title".to_string(), json!("Widgets"));

		let context = build_context(&query, extra).unwrap();
		assert_eq!(context["is_paginated"], json!("maybe"));
		assert_eq!(context["widget_table"], json!([]));
		assert_eq!(context["title"], json!("Widgets"));
		assert_eq!(context["object_list"], json!([1, 2]));
	}
}
