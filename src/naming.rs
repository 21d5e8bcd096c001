//! Template variable naming for datatables

/// Suffix appended to derived datatable context names.
pub const CONTEXT_NAME_SUFFIX: &str = "_table";

/// Converts a CamelCase type name to snake_case.
///
/// An underscore goes before every ASCII uppercase letter that follows a
/// lowercase letter, or that is followed by anything other than another
/// uppercase letter or the end of the name. Acronyms therefore stay together:
/// `FAQEntry` becomes `faq_entry` and `ABC` becomes `abc`.
///
/// # Examples
///
/// ```
/// use nativetables::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("UserProfile"), "user_profile");
/// assert_eq!(to_snake_case("FAQEntry"), "faq_entry");
/// assert_eq!(to_snake_case("Item"), "item");
/// ```
pub fn to_snake_case(name: &str) -> String {
	let chars: Vec<char> = name.chars().collect();
	let mut snake = String::with_capacity(name.len() + 4);

	for (i, &c) in chars.iter().enumerate() {
		if c.is_ascii_uppercase() {
			let after_lower = i > 0 && chars[i - 1].is_ascii_lowercase();
			let starts_word = chars.get(i + 1).is_some_and(|next| !next.is_ascii_uppercase());
			if after_lower || starts_word {
				snake.push('_');
			}
		}
		snake.push(c.to_ascii_lowercase());
	}

	snake.trim_matches('_').to_string()
}

/// Derives the default context name for a datatable over `model_name`.
///
/// # Examples
///
/// ```
/// use nativetables::naming::context_name_for_model;
///
/// assert_eq!(context_name_for_model("UserProfile"), "user_profile_table");
/// ```
pub fn context_name_for_model(model_name: &str) -> String {
	let mut name = to_snake_case(model_name);
	name.push_str(CONTEXT_NAME_SUFFIX);
	name
}

/// Returns the unqualified name of a type: no module path, no generic arguments.
pub(crate) fn short_type_name(type_name: &str) -> &str {
	let base = type_name.split('<').next().unwrap_or(type_name);
	base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("UserProfile", "user_profile")]
	#[case("FAQEntry", "faq_entry")]
	#[case("Item", "item")]
	#[case("ABC", "abc")]
	#[case("UserA", "user_a")]
	#[case("HTTPResponseCode", "http_response_code")]
	#[case("Item2Name", "item2_name")]
	#[case("already_snake", "already_snake")]
	#[case("_Private_", "private")]
	#[case("", "")]
	fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(to_snake_case(input), expected);
	}

	#[rstest]
	#[case("Widget", "widget_table")]
	#[case("FAQEntry", "faq_entry_table")]
	fn test_context_name_for_model(#[case] model: &str, #[case] expected: &str) {
		assert_eq!(context_name_for_model(model), expected);
	}

	#[rstest]
	#[case("crate::views::WidgetView", "WidgetView")]
	#[case("nativetables::view::DatatableView<app::WidgetTable>", "DatatableView")]
	#[case("Plain", "Plain")]
	fn test_short_type_name(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(short_type_name(input), expected);
	}
}
