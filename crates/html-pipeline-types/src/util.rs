//! Escaping and attribute classification helpers used by the serializer.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Returns whether `tag` names a void element.
///
/// Matching is ASCII case-insensitive so `"BR"` and `"br"` agree.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// HTML boolean attributes.
///
/// The presence of one of these attributes alone activates it, so
/// `disabled="false"` still disables a button. The serializer can drop them
/// when their value is falsy, see [`is_boolean_attr_truthy`].
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Returns whether `name` is an HTML boolean attribute.
pub fn is_boolean_attr(name: &str) -> bool {
	BOOLEAN_ATTRS.contains(&name)
}

/// Returns `true` if the value is non-empty and not `"false"` or `"0"`.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!value.is_empty() && value != "false" && value != "0"
}
