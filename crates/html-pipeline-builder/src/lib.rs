//! Pipeline-style HTML element builder
//!
//! This crate provides an immutable [`Element`] builder that records
//! attribute and child additions across pipeline stages and flattens them into
//! an [`html_pipeline_types::Node`] on demand.
//!
//! ## Features
//!
//! - **Immutable stages**: every add returns a new builder; earlier builders
//!   never observe later stages
//! - **Ordered flattening**: attribute batches and child batches are each
//!   concatenated in append order, independently of one another
//! - **Message mapping**: [`Element::map`] rewrites event payload types through
//!   nested builders
//! - **Composable stages**: [`pipeline::batch`] groups stages into one
//!
//! ## Example
//!
//! ```
//! use html_pipeline_builder::attributes::{class, on_click};
//! use html_pipeline_builder::html::{button, div};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Msg {
//!     Increment,
//! }
//!
//! let counter = div::<Msg>()
//!     .add_attributes([class("counter")])
//!     .child(
//!         button()
//!             .add_attributes([on_click(|_| Msg::Increment)])
//!             .add_text("+1"),
//!     );
//!
//! assert_eq!(
//!     counter.to_node().render_to_string(),
//!     r#"<div class="counter"><button>+1</button></div>"#
//! );
//! ```

pub mod attributes;
pub mod element;
pub mod html;
pub mod pipeline;

pub use element::{Child, Element, Flattened, Modification, create};
pub use pipeline::{Stage, batch, stage};
