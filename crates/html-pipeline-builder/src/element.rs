//! Immutable element builder.
//!
//! ## Design Pattern
//!
//! - **Persistent log**: every pipeline stage appends one [`Modification`] to
//!   an `Arc`-linked list. The list is stored newest-first and shared between
//!   builders, so an "add" is O(1) and never disturbs earlier builders.
//! - **Flatten on demand**: [`Element::flatten`] replays the log oldest-first,
//!   concatenating attribute batches and child batches independently.
//!
//! ## Example
//!
//! ```
//! use html_pipeline_builder::element::Element;
//! use html_pipeline_types::Attribute;
//!
//! let card: Element<()> = Element::new("div")
//!     .add_attributes([Attribute::attr("class", "card")])
//!     .add_text("Hello")
//!     .add_attributes([Attribute::attr("id", "greeting")]);
//!
//! assert_eq!(
//!     card.to_node().render_to_string(),
//!     r#"<div class="card" id="greeting">Hello</div>"#
//! );
//! ```

use std::borrow::Cow;
use std::fmt;
use std::mem;
use std::slice;
use std::sync::Arc;
use std::vec;

use html_pipeline_types::{Attribute, Event, EventType, Mapper, Node};

use crate::attributes;

/// An item of an [`Modification::AddChildren`] batch.
pub enum Child<Msg> {
	/// A nested builder, flattened together with its parent.
	Element(Element<Msg>),
	/// An already finalized node.
	Node(Node<Msg>),
}

/// One recorded pipeline step.
pub enum Modification<Msg> {
	/// Append a batch of attributes.
	AddAttributes(Vec<Attribute<Msg>>),
	/// Append a batch of children.
	AddChildren(Vec<Child<Msg>>),
	/// Append a single text node.
	AddText(Cow<'static, str>),
	/// Append a batch of finalized nodes verbatim.
	AddNodes(Vec<Node<Msg>>),
}

struct LogEntry<Msg> {
	modification: Modification<Msg>,
	prev: Option<Arc<LogEntry<Msg>>>,
}

/// Pipeline-style HTML element builder.
///
/// Cloning is O(1). All "add" methods borrow `self` and return a new builder;
/// the receiver stays valid and unchanged.
pub struct Element<Msg> {
	tag: Cow<'static, str>,
	/// Newest entry first.
	head: Option<Arc<LogEntry<Msg>>>,
	len: usize,
}

/// The result of [`Element::flatten`].
pub struct Flattened<Msg> {
	/// Tag name.
	pub tag: Cow<'static, str>,
	/// Attributes in append order.
	pub attributes: Vec<Attribute<Msg>>,
	/// Children in append order, nested builders already finalized.
	pub children: Vec<Node<Msg>>,
}

/// Creates a builder for `tag` with an empty log.
///
/// Free-function form of [`Element::new`].
pub fn create<Msg: 'static>(tag: impl Into<Cow<'static, str>>) -> Element<Msg> {
	Element::new(tag)
}

impl<Msg: 'static> Element<Msg> {
	/// Creates a builder for `tag` with an empty log.
	///
	/// The tag name is not validated.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			head: None,
			len: 0,
		}
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the number of recorded modifications.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns true if nothing has been recorded yet.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	fn push(&self, modification: Modification<Msg>) -> Self {
		Self {
			tag: self.tag.clone(),
			head: Some(Arc::new(LogEntry {
				modification,
				prev: self.head.clone(),
			})),
			len: self.len + 1,
		}
	}

	/// Appends a batch of attributes.
	///
	/// An empty batch still records an entry.
	pub fn add_attributes(&self, batch: impl IntoIterator<Item = Attribute<Msg>>) -> Self {
		self.push(Modification::AddAttributes(batch.into_iter().collect()))
	}

	/// Appends a batch of children (nested builders or finalized nodes).
	pub fn add_children<C>(&self, batch: impl IntoIterator<Item = C>) -> Self
	where
		C: Into<Child<Msg>>,
	{
		self.push(Modification::AddChildren(
			batch.into_iter().map(Into::into).collect(),
		))
	}

	/// Appends a text node.
	pub fn add_text(&self, content: impl Into<Cow<'static, str>>) -> Self {
		self.push(Modification::AddText(content.into()))
	}

	/// Appends a batch of finalized nodes verbatim.
	pub fn add_nodes(&self, batch: impl IntoIterator<Item = Node<Msg>>) -> Self {
		self.push(Modification::AddNodes(batch.into_iter().collect()))
	}

	/// Applies a pipeline stage to this builder.
	///
	/// ```
	/// use html_pipeline_builder::element::Element;
	///
	/// fn bordered(el: &Element<()>) -> Element<()> {
	///     el.class("bordered")
	/// }
	///
	/// let el = Element::<()>::new("section").pipe(bordered);
	/// assert_eq!(el.len(), 1);
	/// ```
	pub fn pipe<F>(&self, stage: F) -> Self
	where
		F: FnOnce(&Self) -> Self,
	{
		stage(self)
	}

	/// Sets a markup attribute.
	pub fn attr(
		&self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.add_attributes([attributes::attr(name, value)])
	}

	/// Sets the `class` attribute.
	pub fn class(&self, class: impl Into<Cow<'static, str>>) -> Self {
		self.add_attributes([attributes::class(class)])
	}

	/// Sets the `id` attribute.
	pub fn id(&self, id: impl Into<Cow<'static, str>>) -> Self {
		self.add_attributes([attributes::id(id)])
	}

	/// Sets the `style` attribute.
	pub fn style(&self, style: impl Into<Cow<'static, str>>) -> Self {
		self.add_attributes([attributes::style(style)])
	}

	/// Sets a DOM property.
	pub fn property(
		&self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<serde_json::Value>,
	) -> Self {
		self.add_attributes([attributes::property(name, value)])
	}

	/// Adds an event listener for any event type.
	pub fn on<F>(&self, event: EventType, handler: F) -> Self
	where
		F: Fn(&Event) -> Msg + Send + Sync + 'static,
	{
		self.add_attributes([attributes::on(event, handler)])
	}

	/// Adds a click listener.
	#[inline]
	pub fn on_click<F>(&self, handler: F) -> Self
	where
		F: Fn(&Event) -> Msg + Send + Sync + 'static,
	{
		self.on(EventType::Click, handler)
	}

	/// Adds an input listener.
	#[inline]
	pub fn on_input<F>(&self, handler: F) -> Self
	where
		F: Fn(&Event) -> Msg + Send + Sync + 'static,
	{
		self.on(EventType::Input, handler)
	}

	/// Adds a change listener.
	#[inline]
	pub fn on_change<F>(&self, handler: F) -> Self
	where
		F: Fn(&Event) -> Msg + Send + Sync + 'static,
	{
		self.on(EventType::Change, handler)
	}

	/// Adds a submit listener.
	#[inline]
	pub fn on_submit<F>(&self, handler: F) -> Self
	where
		F: Fn(&Event) -> Msg + Send + Sync + 'static,
	{
		self.on(EventType::Submit, handler)
	}

	/// Appends a single child.
	pub fn child(&self, child: impl Into<Child<Msg>>) -> Self {
		let child: Child<Msg> = child.into();
		self.add_children([child])
	}

	/// Appends a single finalized node.
	pub fn node(&self, node: Node<Msg>) -> Self {
		self.add_nodes([node])
	}

	/// Replays the log into ordered attribute and child lists.
	///
	/// Attribute batches are concatenated in append order, as are child
	/// batches; the two lists do not affect each other. Nested builders are
	/// flattened into element nodes, walked with an explicit stack so nesting
	/// depth is bounded by memory rather than by the call stack.
	pub fn flatten(&self) -> Flattened<Msg> {
		tracing::trace!(tag = %self.tag, entries = self.len, "flattening element");

		let mut current = FlattenFrame::new(self);
		let mut parents = Vec::new();
		loop {
			if let Some(child) = current.batch.next() {
				match child {
					Child::Element(el) => {
						parents.push(mem::replace(&mut current, FlattenFrame::new(el)));
					}
					Child::Node(node) => current.children.push(node.clone()),
				}
			} else if let Some(modification) = current.entries.next() {
				match modification {
					Modification::AddAttributes(batch) => {
						current.attributes.extend(batch.iter().cloned());
					}
					Modification::AddChildren(batch) => current.batch = batch.iter(),
					Modification::AddText(text) => current.children.push(Node::Text(text.clone())),
					Modification::AddNodes(batch) => current.children.extend(batch.iter().cloned()),
				}
			} else {
				match parents.pop() {
					Some(parent) => {
						let done = mem::replace(&mut current, parent);
						current
							.children
							.push(Node::element(done.tag.clone(), done.attributes, done.children));
					}
					None => {
						return Flattened {
							tag: current.tag.clone(),
							attributes: current.attributes,
							children: current.children,
						};
					}
				}
			}
		}
	}

	/// Flattens the builder and hands the parts to `combine`.
	pub fn fold<R, F>(&self, combine: F) -> R
	where
		F: FnOnce(&str, Vec<Attribute<Msg>>, Vec<Node<Msg>>) -> R,
	{
		let Flattened {
			tag,
			attributes,
			children,
		} = self.flatten();
		combine(tag.as_ref(), attributes, children)
	}

	/// Flattens the builder into an element node.
	pub fn to_node(&self) -> Node<Msg> {
		let Flattened {
			tag,
			attributes,
			children,
		} = self.flatten();
		Node::element(tag, attributes, children)
	}

	/// Rewrites the message type of every listener, including those of nested
	/// builders and finalized nodes.
	///
	/// The log keeps its length and order.
	pub fn map_with<Msg2: 'static>(&self, mapper: &Mapper<Msg, Msg2>) -> Element<Msg2> {
		tracing::trace!(tag = %self.tag, entries = self.len, "mapping element");

		let mut current = MapFrame::new(self);
		let mut parents = Vec::new();
		loop {
			if let Some((pending, mapped)) = &mut current.batch {
				match pending.next() {
					Some(Child::Element(el)) => {
						parents.push(mem::replace(&mut current, MapFrame::new(el)));
					}
					Some(Child::Node(node)) => mapped.push(Child::Node(node.map_with(mapper))),
					None => {
						if let Some((_, mapped)) = current.batch.take() {
							current.record(Modification::AddChildren(mapped));
						}
					}
				}
			} else if let Some(modification) = current.entries.next() {
				match modification {
					Modification::AddAttributes(batch) => current.record(Modification::AddAttributes(
						batch.iter().map(|a| a.map_with(mapper)).collect(),
					)),
					Modification::AddChildren(batch) => {
						current.batch = Some((batch.iter(), Vec::with_capacity(batch.len())));
					}
					Modification::AddText(text) => current.record(Modification::AddText(text.clone())),
					Modification::AddNodes(batch) => current.record(Modification::AddNodes(
						batch.iter().map(|n| n.map_with(mapper)).collect(),
					)),
				}
			} else {
				match parents.pop() {
					Some(parent) => {
						let done = mem::replace(&mut current, parent).finish();
						if let Some((_, mapped)) = &mut current.batch {
							mapped.push(Child::Element(done));
						}
					}
					None => return current.finish(),
				}
			}
		}
	}

	/// Convenience wrapper around [`map_with`](Self::map_with).
	pub fn map<Msg2, F>(&self, f: F) -> Element<Msg2>
	where
		Msg2: 'static,
		F: Fn(Msg) -> Msg2 + Send + Sync + 'static,
	{
		let mapper: Mapper<Msg, Msg2> = Arc::new(f);
		self.map_with(&mapper)
	}
}

impl<Msg> Element<Msg> {
	/// Returns the recorded modifications, oldest first.
	pub fn modifications(&self) -> impl Iterator<Item = &Modification<Msg>> {
		self.log().into_iter()
	}

	fn log(&self) -> Vec<&Modification<Msg>> {
		let mut entries: Vec<&Modification<Msg>> =
			std::iter::successors(self.head.as_deref(), |entry| entry.prev.as_deref())
				.map(|entry| &entry.modification)
				.collect();
		entries.reverse();
		entries
	}
}

/// A builder whose log is partway through [`Element::flatten`].
struct FlattenFrame<'a, Msg> {
	tag: &'a Cow<'static, str>,
	entries: vec::IntoIter<&'a Modification<Msg>>,
	/// Rest of the child batch being replayed.
	batch: slice::Iter<'a, Child<Msg>>,
	attributes: Vec<Attribute<Msg>>,
	children: Vec<Node<Msg>>,
}

impl<'a, Msg> FlattenFrame<'a, Msg> {
	fn new(el: &'a Element<Msg>) -> Self {
		Self {
			tag: &el.tag,
			entries: el.log().into_iter(),
			batch: Default::default(),
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}
}

/// A builder whose log is partway through [`Element::map_with`].
struct MapFrame<'a, Msg, Msg2> {
	source: &'a Element<Msg>,
	entries: vec::IntoIter<&'a Modification<Msg>>,
	/// Rest of the child batch being mapped, and its mapped prefix.
	batch: Option<(slice::Iter<'a, Child<Msg>>, Vec<Child<Msg2>>)>,
	head: Option<Arc<LogEntry<Msg2>>>,
}

impl<'a, Msg, Msg2> MapFrame<'a, Msg, Msg2> {
	fn new(source: &'a Element<Msg>) -> Self {
		Self {
			source,
			entries: source.log().into_iter(),
			batch: None,
			head: None,
		}
	}

	fn record(&mut self, modification: Modification<Msg2>) {
		self.head = Some(Arc::new(LogEntry {
			modification,
			prev: self.head.take(),
		}));
	}

	fn finish(self) -> Element<Msg2> {
		Element {
			tag: self.source.tag.clone(),
			head: self.head,
			len: self.source.len,
		}
	}
}

impl<Msg: 'static> Child<Msg> {
	/// Finalizes the child.
	pub fn to_node(&self) -> Node<Msg> {
		match self {
			Child::Element(el) => el.to_node(),
			Child::Node(node) => node.clone(),
		}
	}
}

impl<Msg> Flattened<Msg> {
	/// Returns `(tag, attributes, children)`.
	pub fn into_parts(self) -> (Cow<'static, str>, Vec<Attribute<Msg>>, Vec<Node<Msg>>) {
		(self.tag, self.attributes, self.children)
	}
}

// Unlinks long logs and nested builders without recursing. Entries still
// shared with another builder are left to that builder.
impl<Msg> Drop for Element<Msg> {
	fn drop(&mut self) {
		let mut pending: Vec<Arc<LogEntry<Msg>>> = self.head.take().into_iter().collect();
		while let Some(entry) = pending.pop() {
			let Some(mut entry) = Arc::into_inner(entry) else {
				continue;
			};
			pending.extend(entry.prev.take());
			if let Modification::AddChildren(batch) = &mut entry.modification {
				for child in batch.drain(..) {
					if let Child::Element(mut el) = child {
						pending.extend(el.head.take());
					}
				}
			}
		}
	}
}

impl<Msg> Clone for Element<Msg> {
	fn clone(&self) -> Self {
		Self {
			tag: self.tag.clone(),
			head: self.head.clone(),
			len: self.len,
		}
	}
}

impl<Msg> Clone for Child<Msg> {
	fn clone(&self) -> Self {
		match self {
			Child::Element(el) => Child::Element(el.clone()),
			Child::Node(node) => Child::Node(node.clone()),
		}
	}
}

impl<Msg> Clone for Flattened<Msg> {
	fn clone(&self) -> Self {
		Self {
			tag: self.tag.clone(),
			attributes: self.attributes.clone(),
			children: self.children.clone(),
		}
	}
}

impl<Msg> PartialEq for Flattened<Msg> {
	fn eq(&self, other: &Self) -> bool {
		self.tag == other.tag
			&& self.attributes == other.attributes
			&& self.children == other.children
	}
}

impl<Msg> fmt::Debug for Flattened<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Flattened")
			.field("tag", &self.tag)
			.field("attributes", &self.attributes)
			.field("children", &self.children)
			.finish()
	}
}

impl<Msg> fmt::Debug for Child<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Child::Element(el) => f.debug_tuple("Element").field(el).finish(),
			Child::Node(node) => f.debug_tuple("Node").field(node).finish(),
		}
	}
}

impl<Msg> fmt::Debug for Modification<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Modification::AddAttributes(batch) => {
				f.debug_tuple("AddAttributes").field(batch).finish()
			}
			Modification::AddChildren(batch) => f.debug_tuple("AddChildren").field(batch).finish(),
			Modification::AddText(text) => f.debug_tuple("AddText").field(text).finish(),
			Modification::AddNodes(batch) => f.debug_tuple("AddNodes").field(batch).finish(),
		}
	}
}

impl<Msg> fmt::Debug for Element<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.tag)
			.field("modifications", &self.modifications().collect::<Vec<_>>())
			.finish()
	}
}

impl<Msg: 'static> From<Element<Msg>> for Child<Msg> {
	fn from(el: Element<Msg>) -> Self {
		Child::Element(el)
	}
}

impl<Msg: 'static> From<&Element<Msg>> for Child<Msg> {
	fn from(el: &Element<Msg>) -> Self {
		Child::Element(el.clone())
	}
}

impl<Msg: 'static> From<Node<Msg>> for Child<Msg> {
	fn from(node: Node<Msg>) -> Self {
		Child::Node(node)
	}
}

impl<Msg: 'static> From<&'static str> for Child<Msg> {
	fn from(text: &'static str) -> Self {
		Child::Node(Node::text(text))
	}
}

impl<Msg: 'static> From<String> for Child<Msg> {
	fn from(text: String) -> Self {
		Child::Node(Node::text(text))
	}
}

impl<Msg: 'static> From<Element<Msg>> for Node<Msg> {
	fn from(el: Element<Msg>) -> Self {
		el.to_node()
	}
}
