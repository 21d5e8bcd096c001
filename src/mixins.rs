//! Mixin for list views backed by a datatable.

use crate::context::{Context, DatatableQuery, TableBinding, build_context};
use crate::datatable::Datatable;
use crate::error::{DatatableError, Result};
use crate::naming::{context_name_for_model, short_type_name};
use crate::params::{QueryParams, TransformParams};
use crate::settings::DatatableSettings;

/// Row type of a mixin's datatable
pub type RowOf<M> = <<M as DatatableMixin>::Table as Datatable>::Row;

/// Trait for list views that delegate sorting, filtering and pagination to a
/// [`Datatable`]
///
/// Implementors only have to say where the datatable comes from; the
/// queryset and context steps are provided.
pub trait DatatableMixin {
	/// The datatable this view lists
	type Table: Datatable;

	/// Get the datatable, if one is configured
	fn datatable(&self) -> Option<&Self::Table>;

	/// Get the explicit context name, overriding the derived one
	fn context_datatable_name(&self) -> Option<&str> {
		None
	}

	/// Get the settings for this view
	fn settings(&self) -> &DatatableSettings {
		DatatableSettings::shared_default()
	}

	/// Get the view name used in configuration errors
	fn view_name(&self) -> &str {
		short_type_name(std::any::type_name::<Self>())
	}

	/// Get the datatable or fail with a configuration error naming this view
	fn require_datatable(&self) -> Result<&Self::Table> {
		self.datatable()
			.ok_or_else(|| DatatableError::ImproperlyConfigured {
				view: self.view_name().to_string(),
			})
	}

	/// Resolve the transformation parameters for a request.
	///
	/// A non-empty payload in the configured query parameter is parsed as
	/// JSON; otherwise the datatable's initial parameters are used as-is.
	fn get_transformation_params(&self, query: &QueryParams) -> Result<TransformParams> {
		let query_param = &self.settings().query_param;
		match query.get_non_empty(query_param) {
			Some(payload) => TransformParams::from_json(payload).inspect_err(|e| {
				tracing::warn!(view = self.view_name(), error = %e, "Rejected datatable payload");
			}),
			None => {
				tracing::debug!(view = self.view_name(), "Using initial datatable parameters");
				Ok(self.require_datatable()?.initial())
			}
		}
	}

	/// Get the template variable name for `table`
	fn get_context_object_name(&self, table: &Self::Table) -> String {
		match self.context_datatable_name() {
			Some(name) => name.to_string(),
			None => context_name_for_model(table.model_name()),
		}
	}

	/// Transform the datatable's records for a request
	fn get_queryset(&self, query: &QueryParams) -> Result<DatatableQuery<RowOf<Self>>> {
		let table = self.require_datatable()?;
		let params = self.get_transformation_params(query)?;

		params
			.validate(table, self.settings())
			.inspect_err(|e| {
				tracing::warn!(view = self.view_name(), error = %e, "Rejected datatable parameters");
			})?;

		let binding = TableBinding::new(self.get_context_object_name(table), params)?;
		let object_list = table.fetch(&binding.params)?;

		tracing::debug!(
			view = self.view_name(),
			table = %binding.id,
			paginated = object_list.is_paginated(),
			rows = object_list.object_list().len(),
			"Transformed datatable"
		);

		Ok(DatatableQuery {
			binding,
			object_list,
		})
	}

	/// Build the template context for transformed records.
	///
	/// Entries in `extra` replace computed keys of the same name.
	fn get_context_data(
		&self,
		query: DatatableQuery<RowOf<Self>>,
		extra: Context,
	) -> Result<Context> {
		build_context(&query, extra)
	}
}
