//! # html-pipeline
//!
//! Build HTML element trees with left-to-right pipelines instead of nested
//! literals.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`builder`] - the immutable [`Element`] builder, tag and attribute
//!   constructors, and stage composition
//! - [`types`] - the finalized [`Node`] tree, attributes, events and HTML
//!   serialization
//!
//! ## Quick Example
//!
//! ```
//! use html_pipeline::prelude::*;
//!
//! let page: Element<()> = article()
//!     .class("post")
//!     .child(h1().add_text("Title"))
//!     .child(p().add_text("Body"));
//!
//! assert_eq!(
//!     page.to_node().render_to_string(),
//!     r#"<article class="post"><h1>Title</h1><p>Body</p></article>"#
//! );
//! ```

pub use html_pipeline_builder as builder;
pub use html_pipeline_types as types;

pub use html_pipeline_builder::{Child, Element, Flattened, Modification, Stage, batch, create, stage};
pub use html_pipeline_types::{
	Attribute, Error, Event, EventHandler, EventType, Node, NodeElement, RenderOptions, Result,
	VoidStyle,
};

/// Commonly used items.
pub mod prelude {
	pub use html_pipeline_builder::attributes::*;
	pub use html_pipeline_builder::html::*;
	pub use html_pipeline_builder::{Child, Element, Stage, batch, create, stage};
	pub use html_pipeline_types::{Attribute, Event, EventType, Node, RenderOptions};
}
