//! Reusable pipeline stages.
//!
//! A [`Stage`] is a function from builder to builder. Stages compose with
//! [`batch`], which lets a group of attribute or child additions be defined
//! once and applied to many elements.
//!
//! ```
//! use html_pipeline_builder::html::button;
//! use html_pipeline_builder::pipeline::{batch, stage};
//!
//! let primary = batch::<()>([
//!     stage(|el| el.class("btn btn-primary")),
//!     stage(|el| el.attr("type", "submit")),
//! ]);
//!
//! let save = button::<()>().pipe(|el| primary(el)).add_text("Save");
//! assert_eq!(
//!     save.to_node().render_to_string(),
//!     r#"<button class="btn btn-primary" type="submit">Save</button>"#
//! );
//! ```

use std::sync::Arc;

use crate::element::Element;

/// A shareable builder transformation.
pub type Stage<Msg> = Arc<dyn Fn(&Element<Msg>) -> Element<Msg> + Send + Sync + 'static>;

/// Wraps a closure as a [`Stage`].
pub fn stage<Msg, F>(f: F) -> Stage<Msg>
where
	Msg: 'static,
	F: Fn(&Element<Msg>) -> Element<Msg> + Send + Sync + 'static,
{
	Arc::new(f)
}

/// Composes stages left to right.
///
/// The resulting stage applies each stage to the output of the previous one;
/// an empty batch returns its input unchanged.
pub fn batch<Msg: 'static>(stages: impl IntoIterator<Item = Stage<Msg>>) -> Stage<Msg> {
	let stages: Vec<Stage<Msg>> = stages.into_iter().collect();
	Arc::new(move |el: &Element<Msg>| {
		stages
			.iter()
			.fold(el.clone(), |acc, stage| stage(&acc))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use html_pipeline_types::Attribute;
	use rstest::rstest;

	#[rstest]
	fn test_batch_applies_in_order() {
		let stages = batch::<()>([
			stage(|el| el.attr("data-step", "1")),
			stage(|el| el.add_text("body")),
			stage(|el| el.attr("data-step", "2")),
		]);
		let flat = stages(&Element::new("div")).flatten();

		assert_eq!(
			flat.attributes,
			vec![
				Attribute::attr("data-step", "1"),
				Attribute::attr("data-step", "2"),
			]
		);
		assert_eq!(flat.children.len(), 1);
	}

	#[rstest]
	fn test_empty_batch_is_identity() {
		let base: Element<()> = Element::new("div").class("a");
		let out = batch::<()>([])(&base);
		assert_eq!(out.len(), base.len());
		assert_eq!(out.flatten(), base.flatten());
	}

	#[rstest]
	fn test_batch_leaves_input_untouched() {
		let base: Element<()> = Element::new("div");
		let decorate = batch::<()>([stage(|el| el.class("x"))]);
		let decorated = decorate(&base);

		assert!(base.is_empty());
		assert_eq!(decorated.len(), 1);
	}

	#[rstest]
	fn test_nested_batches() {
		let inner = batch::<()>([stage(|el| el.class("a")), stage(|el| el.class("b"))]);
		let outer = batch([inner, stage(|el| el.class("c"))]);
		let classes: Vec<String> = outer(&Element::new("p"))
			.flatten()
			.attributes
			.iter()
			.filter_map(|a| match a {
				Attribute::Attr { value, .. } => Some(value.to_string()),
				_ => None,
			})
			.collect();
		assert_eq!(classes, vec!["a", "b", "c"]);
	}
}
