//! Page and listing types returned by datatable transforms
//!
//! A transform either paginates its records or returns them whole. The two
//! outcomes are distinguished by [`Listing`] rather than by probing the result.

use serde::Serialize;

/// Pagination metadata for a transformed record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paginator {
	/// Total number of items across all pages
	pub count: usize,
	/// Total number of pages
	pub num_pages: usize,
	/// Items per page
	pub per_page: usize,
}

impl Paginator {
	/// Creates a paginator, deriving the page count from `count` and `per_page`.
	///
	/// An empty record set still has one (empty) page.
	///
	/// # Examples
	///
	/// ```
	/// use nativetables::Paginator;
	///
	/// let paginator = Paginator::new(45, 10);
	/// assert_eq!(paginator.num_pages, 5);
	/// assert_eq!(Paginator::new(0, 10).num_pages, 1);
	/// ```
	pub fn new(count: usize, per_page: usize) -> Self {
		let num_pages = if count == 0 || per_page == 0 {
			1
		} else {
			count.div_ceil(per_page)
		};
		Self {
			count,
			num_pages,
			per_page,
		}
	}
}

/// A single page of transformed records
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
	/// Items in this page
	pub object_list: Vec<T>,
	/// Current page number (1-indexed)
	pub number: usize,
	/// Pagination metadata
	pub paginator: Paginator,
}

impl<T> Page<T> {
	/// Creates a new page.
	///
	/// # Examples
	///
	/// ```
	/// use nativetables::{Page, Paginator};
	///
	/// let page = Page::new(vec!["a", "b", "c"], 2, Paginator::new(15, 3));
	/// assert_eq!(page.start_index(), 4);
	/// assert_eq!(page.end_index(), 6);
	/// assert!(page.has_next());
	/// ```
	pub fn new(object_list: Vec<T>, number: usize, paginator: Paginator) -> Self {
		Self {
			object_list,
			number,
			paginator,
		}
	}

	/// Returns the 1-based index of the first item on this page
	pub fn start_index(&self) -> usize {
		if self.object_list.is_empty() {
			0
		} else {
			self.number
				.saturating_sub(1)
				.saturating_mul(self.paginator.per_page)
				.saturating_add(1)
		}
	}

	/// Returns the 1-based index of the last item on this page
	pub fn end_index(&self) -> usize {
		if self.object_list.is_empty() {
			0
		} else {
			self.start_index()
				.saturating_add(self.object_list.len() - 1)
		}
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.number < self.paginator.num_pages
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// Returns true if there are other pages (previous or next)
	pub fn has_other_pages(&self) -> bool {
		self.has_next() || self.has_previous()
	}

	/// Returns the next page number, if any
	pub fn next_page_number(&self) -> Option<usize> {
		self.has_next().then(|| self.number.saturating_add(1))
	}

	/// Returns the previous page number, if any
	pub fn previous_page_number(&self) -> Option<usize> {
		self.has_previous().then(|| self.number - 1)
	}
}

/// Template-facing view of a [`Page`]: navigation fields plus the rows.
#[derive(Serialize)]
pub(crate) struct PageObject<'a, T: Serialize> {
	number: usize,
	has_next: bool,
	has_previous: bool,
	has_other_pages: bool,
	next_page_number: Option<usize>,
	previous_page_number: Option<usize>,
	start_index: usize,
	end_index: usize,
	object_list: &'a [T],
}

impl<'a, T: Serialize> From<&'a Page<T>> for PageObject<'a, T> {
	fn from(page: &'a Page<T>) -> Self {
		Self {
			number: page.number,
			has_next: page.has_next(),
			has_previous: page.has_previous(),
			has_other_pages: page.has_other_pages(),
			next_page_number: page.next_page_number(),
			previous_page_number: page.previous_page_number(),
			start_index: page.start_index(),
			end_index: page.end_index(),
			object_list: &page.object_list,
		}
	}
}

/// Result of a datatable transform
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
	/// The transform paginated its records
	Paginated(Page<T>),
	/// The transform returned every matching record
	Plain(Vec<T>),
}

impl<T> Listing<T> {
	/// Returns true for paginated listings
	pub fn is_paginated(&self) -> bool {
		matches!(self, Self::Paginated(_))
	}

	/// Returns the rows, unwrapping the page for paginated listings
	pub fn object_list(&self) -> &[T] {
		match self {
			Self::Paginated(page) => &page.object_list,
			Self::Plain(rows) => rows,
		}
	}

	/// Returns the page, if paginated
	pub fn page(&self) -> Option<&Page<T>> {
		match self {
			Self::Paginated(page) => Some(page),
			Self::Plain(_) => None,
		}
	}
}

impl<T> From<Vec<T>> for Listing<T> {
	fn from(rows: Vec<T>) -> Self {
		Self::Plain(rows)
	}
}

impl<T> From<Page<T>> for Listing<T> {
	fn from(page: Page<T>) -> Self {
		Self::Paginated(page)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(0, 10, 1)]
	#[case(10, 10, 1)]
	#[case(11, 10, 2)]
	#[case(3, 2, 2)]
	fn test_paginator_num_pages(
		#[case] count: usize,
		#[case] per_page: usize,
		#[case] expected: usize,
	) {
		assert_eq!(Paginator::new(count, per_page).num_pages, expected);
	}

	#[rstest]
	fn test_page_navigation() {
		let first = Page::new(vec![1, 2], 1, Paginator::new(5, 2));
		assert!(first.has_next());
		assert!(!first.has_previous());
		assert_eq!(first.next_page_number(), Some(2));
		assert_eq!(first.previous_page_number(), None);

		let last = Page::new(vec![5], 3, Paginator::new(5, 2));
		assert!(!last.has_next());
		assert!(last.has_previous());
		assert_eq!(last.start_index(), 5);
		assert_eq!(last.end_index(), 5);
	}

	#[rstest]
	fn test_page_indexes_saturate_on_huge_page_number() {
		let page = Page::new(vec!["x", "y"], usize::MAX, Paginator::new(10, 5));
		assert_eq!(page.start_index(), usize::MAX);
		assert_eq!(page.end_index(), usize::MAX);
		assert!(!page.has_next());
		assert_eq!(page.next_page_number(), None);
	}

	#[rstest]
	fn test_empty_page_indexes() {
		let page: Page<i32> = Page::new(vec![], 1, Paginator::new(0, 10));
		assert_eq!(page.start_index(), 0);
		assert_eq!(page.end_index(), 0);
		assert!(!page.has_other_pages());
	}

	#[rstest]
	fn test_page_object_serialization() {
		let page = Page::new(vec!["c", "d"], 2, Paginator::new(5, 2));
		let value = serde_json::to_value(PageObject::from(&page)).unwrap();
		assert_eq!(
			value,
			json!({
				"number": 2,
				"has_next": true,
				"has_previous": true,
				"has_other_pages": true,
				"next_page_number": 3,
				"previous_page_number": 1,
				"start_index": 3,
				"end_index": 4,
				"object_list": ["c", "d"],
			})
		);
	}

	#[rstest]
	fn test_listing_object_list() {
		let plain: Listing<i32> = vec![1, 2, 3].into();
		assert!(!plain.is_paginated());
		assert_eq!(plain.object_list(), &[1, 2, 3]);
		assert!(plain.page().is_none());

		let paginated: Listing<i32> = Page::new(vec![4], 2, Paginator::new(4, 3)).into();
		assert!(paginated.is_paginated());
		assert_eq!(paginated.object_list(), &[4]);
		assert_eq!(paginated.page().map(|page| page.number), Some(2));
	}
}
