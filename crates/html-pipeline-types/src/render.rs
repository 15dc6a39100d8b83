//! HTML serialization of [`Node`] trees.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::error::Result;
use crate::node::{Node, NodeElement};
use crate::util::{html_escape, is_boolean_attr, is_boolean_attr_truthy};

/// How void elements are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoidStyle {
	/// `<br />`
	#[default]
	SelfClosing,
	/// `<br>`
	Html5,
}

/// Options for serializing nodes to HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// How void elements are closed.
	pub void_style: VoidStyle,
	/// Whether boolean attributes with a falsy value (`""`, `"false"`, `"0"`)
	/// are left out of the markup.
	pub omit_falsy_boolean_attrs: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			void_style: VoidStyle::SelfClosing,
			omit_falsy_boolean_attrs: true,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the void element style.
	pub fn void_style(mut self, style: VoidStyle) -> Self {
		self.void_style = style;
		self
	}

	/// Sets whether falsy boolean attributes are omitted.
	pub fn omit_falsy_boolean_attrs(mut self, omit: bool) -> Self {
		self.omit_falsy_boolean_attrs = omit;
		self
	}

	/// Loads options from a JSON document.
	///
	/// Missing fields take their default values.
	pub fn from_json(json: &str) -> Result<Self> {
		let options: Self = serde_json::from_str(json)?;
		tracing::debug!(?options, "loaded render options");
		Ok(options)
	}
}

impl<Msg: 'static> Node<Msg> {
	/// Renders the node to an HTML string with default options.
	pub fn render_to_string(&self) -> String {
		self.render_with(&RenderOptions::default())
	}

	/// Renders the node to an HTML string.
	///
	/// Only markup attributes are written; properties and listeners live on
	/// the DOM element and have no textual form.
	pub fn render_with(&self, options: &RenderOptions) -> String {
		let mut output = String::new();
		render_node(self, options, &mut output);
		output
	}
}

enum RenderStep<'a, Msg> {
	Node(&'a Node<Msg>),
	Close(&'a str),
}

fn render_node<Msg: 'static>(node: &Node<Msg>, options: &RenderOptions, output: &mut String) {
	let mut steps = vec![RenderStep::Node(node)];
	while let Some(step) = steps.pop() {
		match step {
			RenderStep::Node(Node::Element(el)) => {
				render_open_tag(el, options, output);
				if !el.is_void() {
					steps.push(RenderStep::Close(el.tag_name()));
					steps.extend(el.children().iter().rev().map(RenderStep::Node));
				}
			}
			RenderStep::Node(Node::Text(text)) => output.push_str(&html_escape(text)),
			RenderStep::Node(Node::Fragment(children)) => {
				steps.extend(children.iter().rev().map(RenderStep::Node));
			}
			RenderStep::Node(Node::Empty) => {}
			RenderStep::Close(tag) => {
				output.push_str("</");
				output.push_str(tag);
				output.push('>');
			}
		}
	}
}

/// Writes the start tag; void elements are closed here.
fn render_open_tag<Msg: 'static>(el: &NodeElement<Msg>, options: &RenderOptions, output: &mut String) {
	output.push('<');
	output.push_str(el.tag_name());

	for attr in el.attributes() {
		let Attribute::Attr { name, value } = attr else {
			continue;
		};
		if options.omit_falsy_boolean_attrs && is_boolean_attr(name) && !is_boolean_attr_truthy(value)
		{
			continue;
		}
		output.push(' ');
		output.push_str(name);
		output.push_str("=\"");
		output.push_str(&html_escape(value));
		output.push('"');
	}

	if el.is_void() {
		match options.void_style {
			VoidStyle::SelfClosing => output.push_str(" />"),
			VoidStyle::Html5 => output.push('>'),
		}
	} else {
		output.push('>');
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use crate::event::EventType;
	use rstest::rstest;

	fn el(tag: &'static str, attrs: Vec<Attribute<()>>, children: Vec<Node<()>>) -> Node<()> {
		Node::element(tag, attrs, children)
	}

	#[rstest]
	fn test_render_simple_element() {
		assert_eq!(el("div", vec![], vec![]).render_to_string(), "<div></div>");
	}

	#[rstest]
	fn test_render_attrs_in_order() {
		let node = el(
			"div",
			vec![Attribute::attr("class", "container"), Attribute::attr("id", "main")],
			vec![],
		);
		assert_eq!(
			node.render_to_string(),
			r#"<div class="container" id="main"></div>"#
		);
	}

	#[rstest]
	fn test_render_skips_properties_and_listeners() {
		let node = el(
			"input",
			vec![
				Attribute::attr("type", "text"),
				Attribute::property("value", "typed"),
				Attribute::listener(EventType::Input, |_| ()),
			],
			vec![],
		);
		assert_eq!(node.render_to_string(), r#"<input type="text" />"#);
	}

	#[rstest]
	#[case(VoidStyle::SelfClosing, "<br />")]
	#[case(VoidStyle::Html5, "<br>")]
	fn test_render_void_style(#[case] style: VoidStyle, #[case] expected: &str) {
		let options = RenderOptions::new().void_style(style);
		assert_eq!(el("br", vec![], vec![]).render_with(&options), expected);
	}

	#[rstest]
	fn test_render_nested_and_escaped() {
		let node = el(
			"p",
			vec![Attribute::attr("title", "a \"quote\"")],
			vec![
				Node::text("1 < 2 & "),
				el("strong", vec![], vec![Node::text("bold")]),
				Node::fragment([Node::text("x"), Node::empty(), Node::text("y")]),
			],
		);
		assert_eq!(
			node.render_to_string(),
			"<p title=\"a &quot;quote&quot;\">1 &lt; 2 &amp; <strong>bold</strong>xy</p>"
		);
	}

	#[rstest]
	#[case("", false)]
	#[case("false", false)]
	#[case("0", false)]
	#[case("true", true)]
	fn test_render_boolean_attrs(#[case] value: &'static str, #[case] rendered: bool) {
		let node = el("button", vec![Attribute::attr("disabled", value)], vec![]);
		assert_eq!(node.render_to_string().contains("disabled"), rendered);
	}

	#[rstest]
	fn test_render_keeps_falsy_boolean_attrs_when_configured() {
		let options = RenderOptions::new().omit_falsy_boolean_attrs(false);
		let node = el("button", vec![Attribute::attr("disabled", "")], vec![]);
		assert_eq!(node.render_with(&options), r#"<button disabled=""></button>"#);
	}

	#[rstest]
	fn test_options_from_json_partial() {
		let options = RenderOptions::from_json(r#"{"void_style":"html5"}"#).unwrap();
		assert_eq!(options.void_style, VoidStyle::Html5);
		assert!(options.omit_falsy_boolean_attrs);
	}

	#[rstest]
	fn test_options_from_json_roundtrip() {
		let options = RenderOptions::new()
			.void_style(VoidStyle::Html5)
			.omit_falsy_boolean_attrs(false);
		let json = serde_json::to_string(&options).unwrap();
		assert_eq!(RenderOptions::from_json(&json).unwrap(), options);
	}

	#[rstest]
	fn test_render_deep_tree() {
		let depth = 100_000;
		let mut node = Node::text("leaf");
		for _ in 0..depth {
			node = el("b", vec![], vec![node]);
		}

		let html = node.render_to_string();
		assert_eq!(html.len(), depth * "<b></b>".len() + "leaf".len());
		assert!(html.starts_with("<b><b>"));
		assert!(html.ends_with("</b></b>"));
	}

	#[rstest]
	fn test_options_from_json_invalid() {
		let err = RenderOptions::from_json(r#"{"void_style":"xhtml"}"#).unwrap_err();
		assert!(matches!(err, Error::InvalidRenderOptions(_)));
	}
}
