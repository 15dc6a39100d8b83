//! Pipeline builder integration tests
//!
//! Success Criteria:
//! 1. Attribute and child batches flatten in append order
//! 2. Earlier pipeline stages never observe later ones
//! 3. Mapped builders dispatch transformed messages through nested elements
//! 4. Tag/attribute helpers and stage composition produce the expected markup

use html_pipeline_builder::attributes::{class, href, on_click, on_input, type_};
use html_pipeline_builder::html::{a, button, div, form, input, li, nav, ul};
use html_pipeline_builder::{Child, Element, batch, create, stage};
use html_pipeline_types::{Attribute, Event, EventType, Node};
use rstest::*;

#[derive(Debug, Clone, PartialEq)]
enum Msg {
	Submit,
	Query(String),
	Open(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
enum AppMsg {
	Search(Msg),
}

#[fixture]
fn markers() -> (Vec<Attribute<Msg>>, Vec<Node<Msg>>) {
	let attrs = (0..4)
		.map(|i| Attribute::attr(format!("attr{i}"), ""))
		.collect();
	let children = (0..4).map(|i| Node::text(format!("child{i}"))).collect();
	(attrs, children)
}

// ============================================================================
// Ordering
// ============================================================================

#[rstest]
fn test_attribute_batches_keep_order(markers: (Vec<Attribute<Msg>>, Vec<Node<Msg>>)) {
	let (attrs, _) = markers;
	let el = create("div")
		.add_attributes([attrs[0].clone(), attrs[1].clone()])
		.add_attributes([attrs[2].clone(), attrs[3].clone()]);

	assert_eq!(el.flatten().attributes, attrs);
}

#[rstest]
fn test_child_batches_keep_order(markers: (Vec<Attribute<Msg>>, Vec<Node<Msg>>)) {
	let (_, children) = markers;
	let el = create("div")
		.add_children([children[0].clone(), children[1].clone()])
		.add_children([children[2].clone(), children[3].clone()]);

	assert_eq!(el.flatten().children, children);
}

#[rstest]
fn test_interleaved_kinds(markers: (Vec<Attribute<Msg>>, Vec<Node<Msg>>)) {
	let (attrs, children) = markers;
	let el = create("div")
		.add_attributes([attrs[0].clone()])
		.add_children([children[0].clone(), children[1].clone()])
		.add_attributes([attrs[1].clone(), attrs[2].clone()])
		.add_children([children[2].clone()])
		.add_attributes([attrs[3].clone()])
		.add_children([children[3].clone()]);

	let (tag, flat_attrs, flat_children) = el.flatten().into_parts();
	assert_eq!(tag, "div");
	assert_eq!(flat_attrs, attrs);
	assert_eq!(flat_children, children);
}

// ============================================================================
// Immutability
// ============================================================================

#[rstest]
fn test_branching_pipelines_share_prefix() {
	let base: Element<Msg> = div().class("card");

	let primary = base.class("primary").add_text("A");
	let secondary = base.class("secondary").add_text("B");

	assert_eq!(base.to_node().render_to_string(), r#"<div class="card"></div>"#);
	assert_eq!(
		primary.to_node().render_to_string(),
		r#"<div class="card" class="primary">A</div>"#
	);
	assert_eq!(
		secondary.to_node().render_to_string(),
		r#"<div class="card" class="secondary">B</div>"#
	);
}

#[rstest]
fn test_nested_builder_snapshot_at_insertion() {
	let item: Element<Msg> = li().add_text("one");
	let list = ul().child(&item);
	let _grown = item.add_text(" more");

	assert_eq!(
		list.to_node().render_to_string(),
		"<ul><li>one</li></ul>"
	);
}

// ============================================================================
// Mapping
// ============================================================================

fn search_form() -> Element<Msg> {
	form()
		.on_submit(|_| Msg::Submit)
		.child(
			input()
				.add_attributes([type_("search")])
				.add_attributes([on_input(|e| Msg::Query(e.value.clone().unwrap_or_default()))]),
		)
		.child(button().add_text("Go"))
}

#[rstest]
fn test_map_wraps_messages_through_nesting() {
	let embedded: Element<AppMsg> = search_form().map(AppMsg::Search);

	let node = embedded.to_node();
	let form_el = node.as_element().unwrap();
	assert_eq!(
		form_el.dispatch(&Event::new(EventType::Submit)),
		vec![AppMsg::Search(Msg::Submit)]
	);

	let input_el = form_el.children()[0].as_element().unwrap();
	assert_eq!(
		input_el.dispatch(&Event::new(EventType::Input).with_value("rust")),
		vec![AppMsg::Search(Msg::Query("rust".to_string()))]
	);
}

#[rstest]
fn test_map_keeps_markup() {
	let original = search_form();
	let mapped = original.map(AppMsg::Search);

	assert_eq!(
		mapped.to_node().render_to_string(),
		original.to_node().render_to_string()
	);
	assert_eq!(
		original.to_node().render_to_string(),
		r#"<form><input type="search" /><button>Go</button></form>"#
	);
}

#[rstest]
fn test_map_covers_raw_nodes() {
	let raw = Node::element(
		"a",
		vec![Attribute::listener(EventType::Click, |_| Msg::Open("raw"))],
		vec![],
	);
	let el = nav().add_nodes([raw]).map(AppMsg::Search);

	let node = el.to_node();
	let link = node.as_element().unwrap().children()[0].as_element().unwrap();
	assert_eq!(
		link.dispatch(&Event::new(EventType::Click)),
		vec![AppMsg::Search(Msg::Open("raw"))]
	);
}

// ============================================================================
// Helpers and stages
// ============================================================================

#[rstest]
#[case("/", "Home")]
#[case("/about", "About")]
fn test_link_helper(#[case] target: &'static str, #[case] label: &'static str) {
	let link: Element<Msg> = a()
		.add_attributes([href(target), on_click(move |_| Msg::Open(target))])
		.add_text(label);

	let node = link.to_node();
	assert_eq!(
		node.render_to_string(),
		format!(r#"<a href="{target}">{label}</a>"#)
	);
	assert_eq!(
		node.as_element().unwrap().dispatch(&Event::new(EventType::Click)),
		vec![Msg::Open(target)]
	);
}

#[rstest]
fn test_stage_batch_reused_across_elements() {
	let nav_item = batch::<Msg>([
		stage(|el| el.add_attributes([class("nav-item")])),
		stage(|el| el.attr("role", "menuitem")),
	]);

	let items: Vec<Child<Msg>> = ["Home", "Docs"]
		.into_iter()
		.map(|label| li().pipe(|el| nav_item(el)).add_text(label).into())
		.collect();
	let menu = ul().add_children(items);

	assert_eq!(
		menu.to_node().render_to_string(),
		concat!(
			"<ul>",
			r#"<li class="nav-item" role="menuitem">Home</li>"#,
			r#"<li class="nav-item" role="menuitem">Docs</li>"#,
			"</ul>"
		)
	);
}

#[rstest]
fn test_mixed_child_kinds() {
	let el: Element<Msg> = div().add_children([
		Child::from("text "),
		Child::from(Node::element("hr", vec![], vec![])),
		Child::from(li().add_text("nested")),
		Child::from(String::from(" tail")),
	]);

	assert_eq!(
		el.to_node().render_to_string(),
		"<div>text <hr /><li>nested</li> tail</div>"
	);
}
