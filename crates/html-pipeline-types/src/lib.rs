//! Declarative HTML node representation for html-pipeline.
//!
//! This crate provides the finalized tree that builders close into:
//!
//! - [`Node`] / [`NodeElement`] - text, element, fragment and empty nodes
//! - [`Attribute`] - markup attributes, DOM properties and event listeners
//! - [`EventHandler`] / [`EventType`] / [`Event`] - typed event bindings
//! - [`RenderOptions`] - HTML string serialization settings
//!
//! Nodes and attributes are generic over the message type `Msg` their event
//! handlers produce. [`Attribute::map_with`] and [`Node::map_with`] rewrite
//! that type without touching structure or order.
//!
//! ## Example
//!
//! ```
//! use html_pipeline_types::{Attribute, Event, EventType, Node};
//!
//! #[derive(Debug, PartialEq)]
//! enum Msg {
//!     Increment,
//! }
//!
//! let button = Node::element(
//!     "button",
//!     vec![
//!         Attribute::attr("class", "btn"),
//!         Attribute::listener(EventType::Click, |_| Msg::Increment),
//!     ],
//!     vec![Node::text("+1")],
//! );
//!
//! assert_eq!(button.render_to_string(), r#"<button class="btn">+1</button>"#);
//! let el = button.as_element().unwrap();
//! assert_eq!(el.dispatch(&Event::new(EventType::Click)), vec![Msg::Increment]);
//! ```

pub mod attribute;
pub mod error;
pub mod event;
pub mod node;
pub mod render;
pub mod util;

pub use attribute::{Attribute, EventHandler, Mapper};
pub use error::{Error, Result};
pub use event::{Event, EventType};
pub use node::{Node, NodeElement};
pub use render::{RenderOptions, VoidStyle};
pub use util::{BOOLEAN_ATTRS, VOID_ELEMENTS, html_escape, is_boolean_attr_truthy};
