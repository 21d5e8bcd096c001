//! Datatable collaborator traits
//!
//! A datatable owns the actual sorting, filtering and pagination of a record
//! set. Views only borrow it: nothing here is written back onto the datatable,
//! so one instance can serve concurrent requests.

use crate::error::Result;
use crate::pagination::Listing;
use crate::params::TransformParams;
use serde::Serialize;

/// A record collection that can apply transformation parameters to itself
pub trait Transform {
	/// Row type produced by the transform
	type Row;

	/// Applies sorting, filtering and pagination, consuming the collection.
	///
	/// Failures should be reported as [`DatatableError::Transform`](crate::DatatableError::Transform);
	/// views pass them through untouched.
	fn transform(self, params: &TransformParams) -> Result<Listing<Self::Row>>;
}

/// Sortable, filterable, paginated listing of a model's records
///
/// # Examples
///
/// ```
/// use nativetables::{Datatable, Listing, Result, Transform, TransformParams};
///
/// struct Names(Vec<String>);
///
/// impl Transform for Names {
///     type Row = String;
///
///     fn transform(mut self, params: &TransformParams) -> Result<Listing<String>> {
///         if params.sort_keys().any(|(_, descending)| descending) {
///             self.0.reverse();
///         }
///         Ok(Listing::Plain(self.0))
///     }
/// }
///
/// struct NameTable;
///
/// impl Datatable for NameTable {
///     type Row = String;
///     type Records = Names;
///
///     fn model_name(&self) -> &str {
///         "Name"
///     }
///
///     fn initial(&self) -> TransformParams {
///         TransformParams::new().with_order_by("name")
///     }
///
///     fn all(&self) -> Result<Names> {
///         Ok(Names(vec!["a".into(), "b".into()]))
///     }
/// }
/// ```
pub trait Datatable {
	/// Row type placed into the template context
	type Row: Serialize;

	/// Unfiltered record collection returned by [`Datatable::all`]
	type Records: Transform<Row = Self::Row>;

	/// Name of the record type, e.g. `"UserProfile"`
	fn model_name(&self) -> &str;

	/// Parameters used when the request carries none
	fn initial(&self) -> TransformParams;

	/// Fetches every record, ready to be transformed
	fn all(&self) -> Result<Self::Records>;

	/// Fields accepted in `order_by`; `None` accepts any field
	fn sortable_fields(&self) -> Option<&[&str]> {
		None
	}

	/// Fields accepted in `filters`; `None` accepts any field
	fn filterable_fields(&self) -> Option<&[&str]> {
		None
	}

	/// Fetches all records and applies `params` to them
	fn fetch(&self, params: &TransformParams) -> Result<Listing<Self::Row>> {
		self.all()?.transform(params)
	}
}

impl<T: Datatable + ?Sized> Datatable for &T {
	type Row = T::Row;
	type Records = T::Records;

	fn model_name(&self) -> &str {
		(**self).model_name()
	}

	fn initial(&self) -> TransformParams {
		(**self).initial()
	}

	fn all(&self) -> Result<Self::Records> {
		(**self).all()
	}

	fn sortable_fields(&self) -> Option<&[&str]> {
		(**self).sortable_fields()
	}

	fn filterable_fields(&self) -> Option<&[&str]> {
		(**self).filterable_fields()
	}
}

impl<T: Datatable + ?Sized> Datatable for std::sync::Arc<T> {
	type Row = T::Row;
	type Records = T::Records;

	fn model_name(&self) -> &str {
		(**self).model_name()
	}

	fn initial(&self) -> TransformParams {
		(**self).initial()
	}

	fn all(&self) -> Result<Self::Records> {
		(**self).all()
	}

	fn sortable_fields(&self) -> Option<&[&str]> {
		(**self).sortable_fields()
	}

	fn filterable_fields(&self) -> Option<&[&str]> {
		(**self).filterable_fields()
	}
}
