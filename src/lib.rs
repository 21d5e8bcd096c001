//! # nativetables
//!
//! List views that hand sorting, filtering and pagination to a datatable.
//!
//! A [`DatatableView`] (or any type implementing [`DatatableMixin`]) replaces
//! the two steps of a generic list view:
//!
//! - **Queryset**: the request's `datatable` query parameter (a JSON object) or
//!   the datatable's initial parameters are applied through
//!   [`Datatable::all`] and [`Transform::transform`].
//! - **Context**: the transformed rows are placed in a template context with
//!   `paginator`, `page_obj`, `is_paginated`, `object_list` and a
//!   `<model>_table` entry.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Request] --> B[QueryParams]
//!     B --> C[TransformParams]
//!     C --> D[Datatable::all + transform]
//!     D --> E[Listing: Paginated / Plain]
//!     C --> F[TableBinding: id + state]
//!     E --> G[Context]
//!     F --> G
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use nativetables::{Context, DatatableView, ListView};
//!
//! let view = DatatableView::new()
//!     .with_datatable(WidgetTable::default())
//!     .with_context_datatable_name("widgets");
//!
//! let context = view.dispatch(&request, Context::new())?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod context;
pub mod datatable;
pub mod error;
pub mod mixins;
pub mod naming;
pub mod pagination;
pub mod params;
pub mod settings;
pub mod view;

// Re-exports for convenience
pub use context::{Context, DatatableQuery, TableBinding, build_context};
pub use datatable::{Datatable, Transform};
pub use error::{DatatableError, Result};
pub use mixins::{DatatableMixin, RowOf};
pub use pagination::{Listing, Page, Paginator};
pub use params::{QueryParams, TransformParams};
pub use settings::{DEFAULT_QUERY_PARAM, DatatableSettings};
pub use view::{DatatableView, ListView};
