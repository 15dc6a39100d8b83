//! Finalized HTML nodes.
//!
//! ## Overview
//!
//! [`Node`] is the terminal representation produced by the builder: once a
//! pipeline is closed its result is one of these values. A node tree is plain
//! data and can be mapped to another message type, serialized to HTML, or
//! handed to a renderer.
//!
//! ## Example
//!
//! ```
//! use html_pipeline_types::{Attribute, Node};
//!
//! let node: Node<()> = Node::element(
//!     "p",
//!     vec![Attribute::attr("class", "lead")],
//!     vec![Node::text("Hello")],
//! );
//! assert_eq!(node.render_to_string(), r#"<p class="lead">Hello</p>"#);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::mem;
use std::slice;
use std::sync::Arc;

use crate::attribute::{Attribute, Mapper};
use crate::event::Event;
use crate::util::is_void_element;

/// A finalized HTML node.
pub enum Node<Msg> {
	/// An element with tag, attributes and children.
	Element(NodeElement<Msg>),
	/// A text node (unescaped).
	Text(Cow<'static, str>),
	/// Several sibling nodes without a wrapper element.
	Fragment(Vec<Node<Msg>>),
	/// Renders nothing.
	Empty,
}

/// An element node.
pub struct NodeElement<Msg> {
	tag: Cow<'static, str>,
	attributes: Vec<Attribute<Msg>>,
	children: Vec<Node<Msg>>,
	is_void: bool,
}

impl<Msg: 'static> NodeElement<Msg> {
	/// Creates an element from its parts.
	///
	/// Void detection happens here; children given to a void element are kept
	/// but never serialized.
	pub fn new(
		tag: impl Into<Cow<'static, str>>,
		attributes: Vec<Attribute<Msg>>,
		children: Vec<Node<Msg>>,
	) -> Self {
		let tag = tag.into();
		let is_void = is_void_element(&tag);
		Self {
			tag,
			attributes,
			children,
			is_void,
		}
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attributes(&self) -> &[Attribute<Msg>] {
		&self.attributes
	}

	/// Returns the child nodes.
	pub fn children(&self) -> &[Node<Msg>] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the value of the last markup attribute called `name`.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attributes.iter().rev().find_map(|attr| match attr {
			Attribute::Attr { name: n, value } if n == name => Some(value.as_ref()),
			_ => None,
		})
	}

	/// Runs every listener registered for `event.event_type`, in attribute order.
	pub fn dispatch(&self, event: &Event) -> Vec<Msg> {
		self.attributes
			.iter()
			.filter_map(|attr| match attr {
				Attribute::Listener {
					event: event_type,
					handler,
				} if *event_type == event.event_type => Some(handler.call(event)),
				_ => None,
			})
			.collect()
	}

	/// Maps every listener in this element and its descendants.
	pub fn map_with<Msg2: 'static>(&self, mapper: &Mapper<Msg, Msg2>) -> NodeElement<Msg2> {
		NodeElement {
			tag: self.tag.clone(),
			attributes: self.attributes.iter().map(|a| a.map_with(mapper)).collect(),
			children: self.children.iter().map(|c| c.map_with(mapper)).collect(),
			is_void: self.is_void,
		}
	}

	/// Consumes the element and returns `(tag, attributes, children)`.
	pub fn into_parts(mut self) -> (Cow<'static, str>, Vec<Attribute<Msg>>, Vec<Node<Msg>>) {
		(
			mem::take(&mut self.tag),
			mem::take(&mut self.attributes),
			mem::take(&mut self.children),
		)
	}
}

impl<Msg: 'static> Node<Msg> {
	/// Builds an element node from a tag, attributes and children.
	pub fn element(
		tag: impl Into<Cow<'static, str>>,
		attributes: Vec<Attribute<Msg>>,
		children: Vec<Node<Msg>>,
	) -> Self {
		Node::Element(NodeElement::new(tag, attributes, children))
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Node::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = Node<Msg>>) -> Self {
		Node::Fragment(children.into_iter().collect())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Node::Empty
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&NodeElement<Msg>> {
		match self {
			Node::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the text if this node is a text node.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Node::Text(text) => Some(text.as_ref()),
			_ => None,
		}
	}

	/// Maps the message type of every listener in the tree.
	pub fn map_with<Msg2: 'static>(&self, mapper: &Mapper<Msg, Msg2>) -> Node<Msg2> {
		self.rebuild(&|attr: &Attribute<Msg>| attr.map_with(mapper))
	}

	/// Convenience wrapper around [`map_with`](Self::map_with).
	pub fn map<Msg2, F>(&self, f: F) -> Node<Msg2>
	where
		Msg2: 'static,
		F: Fn(Msg) -> Msg2 + Send + Sync + 'static,
	{
		let mapper: Mapper<Msg, Msg2> = Arc::new(f);
		self.map_with(&mapper)
	}
}

impl<Msg> Node<Msg> {
	/// Copies the tree with every attribute passed through `map_attr`.
	///
	/// Walks the tree with an explicit stack, so depth is bounded by memory
	/// rather than by the call stack.
	fn rebuild<Msg2, F>(&self, map_attr: &F) -> Node<Msg2>
	where
		F: Fn(&Attribute<Msg>) -> Attribute<Msg2>,
	{
		let mut current = match RebuildFrame::open(self, map_attr) {
			Opened::Frame(frame) => frame,
			Opened::Leaf(leaf) => return leaf,
		};
		let mut parents = Vec::new();
		loop {
			match current.pending.next() {
				Some(child) => match RebuildFrame::open(child, map_attr) {
					Opened::Frame(frame) => parents.push(mem::replace(&mut current, frame)),
					Opened::Leaf(leaf) => current.done.push(leaf),
				},
				None => match parents.pop() {
					Some(parent) => {
						let node = mem::replace(&mut current, parent).close();
						current.done.push(node);
					}
					None => return current.close(),
				},
			}
		}
	}
}

enum Shell<Msg> {
	Element {
		tag: Cow<'static, str>,
		attributes: Vec<Attribute<Msg>>,
		is_void: bool,
	},
	Fragment,
}

/// A container node whose children are still being rebuilt.
struct RebuildFrame<'a, Msg, Msg2> {
	shell: Shell<Msg2>,
	pending: slice::Iter<'a, Node<Msg>>,
	done: Vec<Node<Msg2>>,
}

enum Opened<'a, Msg, Msg2> {
	Frame(RebuildFrame<'a, Msg, Msg2>),
	Leaf(Node<Msg2>),
}

impl<'a, Msg, Msg2> RebuildFrame<'a, Msg, Msg2> {
	fn open<F>(node: &'a Node<Msg>, map_attr: &F) -> Opened<'a, Msg, Msg2>
	where
		F: Fn(&Attribute<Msg>) -> Attribute<Msg2>,
	{
		let (shell, children) = match node {
			Node::Element(el) => (
				Shell::Element {
					tag: el.tag.clone(),
					attributes: el.attributes.iter().map(map_attr).collect(),
					is_void: el.is_void,
				},
				&el.children,
			),
			Node::Fragment(children) => (Shell::Fragment, children),
			Node::Text(text) => return Opened::Leaf(Node::Text(text.clone())),
			Node::Empty => return Opened::Leaf(Node::Empty),
		};
		Opened::Frame(Self {
			shell,
			pending: children.iter(),
			done: Vec::with_capacity(children.len()),
		})
	}

	fn close(self) -> Node<Msg2> {
		match self.shell {
			Shell::Element {
				tag,
				attributes,
				is_void,
			} => Node::Element(NodeElement {
				tag,
				attributes,
				children: self.done,
				is_void,
			}),
			Shell::Fragment => Node::Fragment(self.done),
		}
	}
}

// Tears the subtree down level by level instead of recursing per child.
impl<Msg> Drop for NodeElement<Msg> {
	fn drop(&mut self) {
		let mut pending = mem::take(&mut self.children);
		while let Some(node) = pending.pop() {
			match node {
				Node::Element(mut el) => pending.append(&mut el.children),
				Node::Fragment(mut children) => pending.append(&mut children),
				Node::Text(_) | Node::Empty => {}
			}
		}
	}
}

impl<Msg> Clone for NodeElement<Msg> {
	fn clone(&self) -> Self {
		Self {
			tag: self.tag.clone(),
			attributes: self.attributes.clone(),
			children: self.children.clone(),
			is_void: self.is_void,
		}
	}
}

impl<Msg> Clone for Node<Msg> {
	fn clone(&self) -> Self {
		self.rebuild(&Attribute::clone)
	}
}

impl<Msg> PartialEq for NodeElement<Msg> {
	fn eq(&self, other: &Self) -> bool {
		self.tag == other.tag
			&& self.attributes == other.attributes
			&& self.children == other.children
	}
}

impl<Msg> PartialEq for Node<Msg> {
	fn eq(&self, other: &Self) -> bool {
		let mut pending = vec![(self, other)];
		while let Some(pair) = pending.pop() {
			let (left, right) = match pair {
				(Node::Element(a), Node::Element(b)) => {
					if a.tag != b.tag || a.attributes != b.attributes {
						return false;
					}
					(&a.children, &b.children)
				}
				(Node::Fragment(a), Node::Fragment(b)) => (a, b),
				(Node::Text(a), Node::Text(b)) if a == b => continue,
				(Node::Empty, Node::Empty) => continue,
				_ => return false,
			};
			if left.len() != right.len() {
				return false;
			}
			pending.extend(left.iter().zip(right.iter()));
		}
		true
	}
}

impl<Msg> fmt::Debug for NodeElement<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NodeElement")
			.field("tag", &self.tag)
			.field("attributes", &self.attributes)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.finish()
	}
}

impl<Msg> fmt::Debug for Node<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Node::Element(el) => f.debug_tuple("Element").field(el).finish(),
			Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Node::Fragment(children) => f.debug_tuple("Fragment").field(children).finish(),
			Node::Empty => f.write_str("Empty"),
		}
	}
}

impl<Msg: 'static> From<NodeElement<Msg>> for Node<Msg> {
	fn from(el: NodeElement<Msg>) -> Self {
		Node::Element(el)
	}
}

impl<Msg: 'static> From<&'static str> for Node<Msg> {
	fn from(text: &'static str) -> Self {
		Node::Text(Cow::Borrowed(text))
	}
}

impl<Msg: 'static> From<String> for Node<Msg> {
	fn from(text: String) -> Self {
		Node::Text(Cow::Owned(text))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::EventType;
	use rstest::rstest;

	#[derive(Debug, Clone, PartialEq)]
	enum Msg {
		Save,
		Edit(String),
	}

	fn form() -> NodeElement<Msg> {
		NodeElement::new(
			"form",
			vec![
				Attribute::attr("id", "editor"),
				Attribute::listener(EventType::Submit, |_| Msg::Save),
				Attribute::listener(EventType::Input, |e| {
					Msg::Edit(e.value.clone().unwrap_or_default())
				}),
			],
			vec![Node::text("body")],
		)
	}

	#[rstest]
	fn test_element_parts() {
		let el = form();
		assert_eq!(el.tag_name(), "form");
		assert_eq!(el.attributes().len(), 3);
		assert_eq!(el.children().len(), 1);
		assert!(!el.is_void());
	}

	#[rstest]
	fn test_void_detection() {
		let br: NodeElement<Msg> = NodeElement::new("br", vec![], vec![]);
		assert!(br.is_void());
	}

	#[rstest]
	fn test_attr_value_last_wins() {
		let el: NodeElement<Msg> = NodeElement::new(
			"div",
			vec![Attribute::attr("class", "a"), Attribute::attr("class", "b")],
			vec![],
		);
		assert_eq!(el.attr_value("class"), Some("b"));
		assert_eq!(el.attr_value("id"), None);
	}

	#[rstest]
	fn test_dispatch_matches_event_type() {
		let el = form();
		assert_eq!(el.dispatch(&Event::new(EventType::Submit)), vec![Msg::Save]);
		assert_eq!(
			el.dispatch(&Event::new(EventType::Input).with_value("x")),
			vec![Msg::Edit("x".to_string())]
		);
		assert!(el.dispatch(&Event::new(EventType::Click)).is_empty());
	}

	#[rstest]
	fn test_map_with_rewrites_nested_listeners() {
		let tree = Node::element(
			"div",
			vec![],
			vec![Node::Element(form()), Node::text("tail")],
		);
		let mapped: Node<String> = tree.map(|m| format!("{m:?}"));

		let outer = mapped.as_element().unwrap();
		let inner = outer.children()[0].as_element().unwrap();
		assert_eq!(inner.dispatch(&Event::new(EventType::Submit)), vec!["Save"]);
		assert_eq!(outer.children()[1].as_text(), Some("tail"));
	}

	#[rstest]
	fn test_clone_and_eq() {
		let node = Node::Element(form());
		assert_eq!(node.clone(), node);
		assert_ne!(Node::<Msg>::text("a"), Node::text("b"));
		assert_eq!(Node::<Msg>::empty(), Node::Empty);
	}

	#[rstest]
	fn test_into_parts() {
		let (tag, attributes, children) = form().into_parts();
		assert_eq!(tag, "form");
		assert_eq!(attributes.len(), 3);
		assert_eq!(children, vec![Node::text("body")]);
	}

	#[rstest]
	fn test_deep_tree_clone_map_compare_and_drop() {
		let depth = 100_000;
		let mut tree: Node<Msg> = Node::text("leaf");
		for i in 0..depth {
			tree = if i % 2 == 0 {
				Node::element("div", vec![], vec![tree])
			} else {
				Node::fragment([tree, Node::empty()])
			};
		}

		let copy = tree.clone();
		assert!(copy == tree);
		let mapped: Node<String> = tree.map(|m| format!("{m:?}"));

		let mut levels = 0;
		let mut cursor = &mapped;
		loop {
			cursor = match cursor {
				Node::Element(el) => &el.children()[0],
				Node::Fragment(children) => &children[0],
				_ => break,
			};
			levels += 1;
		}
		assert_eq!(levels, depth);
		assert_eq!(cursor.as_text(), Some("leaf"));

		drop(mapped);
		drop(copy);
		drop(tree);
	}

	#[rstest]
	fn test_from_impls() {
		let text: Node<Msg> = "hi".into();
		let owned: Node<Msg> = String::from("hi").into();
		assert_eq!(text, owned);
	}
}
