//! Tag constructors.
//!
//! Each function is shorthand for [`Element::new`] with a fixed tag name:
//!
//! ```
//! use html_pipeline_builder::html::{li, ul};
//!
//! let list = ul::<()>()
//!     .class("menu")
//!     .add_children([li().add_text("Home"), li().add_text("About")]);
//!
//! assert_eq!(
//!     list.to_node().render_to_string(),
//!     r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#
//! );
//! ```

use crate::element::Element;

/// Macro for defining HTML element constructors
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name<Msg: 'static>() -> Element<Msg> {
			Element::new($tag)
		}
	};
}

// ============================================================================
// Common elements
// ============================================================================

define_element!(
	/// Create a `<div>` element
	div, "div"
);

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create an `<a>` element (hyperlink)
	a, "a"
);

define_element!(
	/// Create an `<img>` element
	img, "img"
);

define_element!(
	/// Create a `<br>` element
	br, "br"
);

define_element!(
	/// Create an `<hr>` element
	hr, "hr"
);

define_element!(
	/// Create a `<pre>` element
	pre, "pre"
);

define_element!(
	/// Create a `<code>` element
	code, "code"
);

define_element!(
	/// Create a `<strong>` element
	strong, "strong"
);

define_element!(
	/// Create an `<em>` element
	em, "em"
);

// ============================================================================
// Headings
// ============================================================================

define_element!(
	/// Create a `<h1>` element (heading level 1)
	h1, "h1"
);

define_element!(
	/// Create a `<h2>` element (heading level 2)
	h2, "h2"
);

define_element!(
	/// Create a `<h3>` element (heading level 3)
	h3, "h3"
);

define_element!(
	/// Create a `<h4>` element (heading level 4)
	h4, "h4"
);

define_element!(
	/// Create a `<h5>` element (heading level 5)
	h5, "h5"
);

define_element!(
	/// Create a `<h6>` element (heading level 6)
	h6, "h6"
);

// ============================================================================
// Content sectioning
// ============================================================================

define_element!(
	/// Create an `<article>` element
	article, "article"
);

define_element!(
	/// Create an `<aside>` element
	aside, "aside"
);

define_element!(
	/// Create a `<footer>` element
	footer, "footer"
);

define_element!(
	/// Create a `<header>` element
	header, "header"
);

define_element!(
	/// Create a `<main>` element
	main, "main"
);

define_element!(
	/// Create a `<nav>` element
	nav, "nav"
);

define_element!(
	/// Create a `<section>` element
	section, "section"
);

// ============================================================================
// Lists
// ============================================================================

define_element!(
	/// Create a `<ul>` element (unordered list)
	ul, "ul"
);

define_element!(
	/// Create an `<ol>` element (ordered list)
	ol, "ol"
);

define_element!(
	/// Create an `<li>` element (list item)
	li, "li"
);

// ============================================================================
// Forms
// ============================================================================

define_element!(
	/// Create a `<form>` element
	form, "form"
);

define_element!(
	/// Create a `<label>` element
	label, "label"
);

define_element!(
	/// Create an `<input>` element
	input, "input"
);

define_element!(
	/// Create a `<textarea>` element
	textarea, "textarea"
);

define_element!(
	/// Create a `<button>` element
	button, "button"
);

define_element!(
	/// Create a `<select>` element (dropdown)
	select, "select"
);

define_element!(
	/// Create an `<option>` element (for use with `<select>`)
	option, "option"
);

// ============================================================================
// Tables
// ============================================================================

define_element!(
	/// Create a `<table>` element
	table, "table"
);

define_element!(
	/// Create a `<thead>` element
	thead, "thead"
);

define_element!(
	/// Create a `<tbody>` element
	tbody, "tbody"
);

define_element!(
	/// Create a `<tr>` element
	tr, "tr"
);

define_element!(
	/// Create a `<th>` element
	th, "th"
);

define_element!(
	/// Create a `<td>` element
	td, "td"
);
