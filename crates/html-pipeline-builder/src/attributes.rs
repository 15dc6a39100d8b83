//! Attribute constructors for use in `add_attributes` batches.
//!
//! ```
//! use html_pipeline_builder::attributes::{class, href, on_click};
//! use html_pipeline_builder::html::a;
//!
//! let link = a().add_attributes([href("/docs"), class("nav"), on_click(|_| "nav")]);
//! assert_eq!(link.flatten().attributes.len(), 3);
//! ```

use std::borrow::Cow;

use html_pipeline_types::{Attribute, Event, EventType};

/// A markup attribute with an arbitrary name.
pub fn attr<Msg: 'static>(
	name: impl Into<Cow<'static, str>>,
	value: impl Into<Cow<'static, str>>,
) -> Attribute<Msg> {
	Attribute::attr(name, value)
}

macro_rules! define_attribute {
	($(#[$meta:meta])* $name:ident, $attr:literal) => {
		$(#[$meta])*
		pub fn $name<Msg: 'static>(value: impl Into<Cow<'static, str>>) -> Attribute<Msg> {
			Attribute::attr($attr, value)
		}
	};
}

define_attribute!(
	/// `class`; space-separate multiple classes.
	class, "class"
);
define_attribute!(
	/// `id`
	id, "id"
);
define_attribute!(
	/// `style`, e.g. `"color: red; font-size: 16px"`
	style, "style"
);
define_attribute!(
	/// `href`
	href, "href"
);
define_attribute!(
	/// `src`
	src, "src"
);
define_attribute!(
	/// `alt`
	alt, "alt"
);
define_attribute!(
	/// `type` (suffixed because `type` is a keyword)
	type_, "type"
);
define_attribute!(
	/// `name`
	name, "name"
);
define_attribute!(
	/// `value` as markup; see [`property`] for the live DOM value.
	value, "value"
);
define_attribute!(
	/// `placeholder`
	placeholder, "placeholder"
);
define_attribute!(
	/// `for`
	for_, "for"
);

/// The `disabled` boolean attribute.
///
/// `false` produces `disabled="false"`, which the serializer omits by default.
pub fn disabled<Msg: 'static>(disabled: bool) -> Attribute<Msg> {
	Attribute::attr("disabled", if disabled { "disabled" } else { "false" })
}

/// A DOM property.
pub fn property<Msg: 'static>(
	name: impl Into<Cow<'static, str>>,
	value: impl Into<serde_json::Value>,
) -> Attribute<Msg> {
	Attribute::property(name, value)
}

/// An event listener for any event type.
pub fn on<Msg, F>(event: EventType, handler: F) -> Attribute<Msg>
where
	Msg: 'static,
	F: Fn(&Event) -> Msg + Send + Sync + 'static,
{
	Attribute::listener(event, handler)
}

/// A click listener.
#[inline]
pub fn on_click<Msg, F>(handler: F) -> Attribute<Msg>
where
	Msg: 'static,
	F: Fn(&Event) -> Msg + Send + Sync + 'static,
{
	on(EventType::Click, handler)
}

/// An input listener.
#[inline]
pub fn on_input<Msg, F>(handler: F) -> Attribute<Msg>
where
	Msg: 'static,
	F: Fn(&Event) -> Msg + Send + Sync + 'static,
{
	on(EventType::Input, handler)
}

/// A change listener.
#[inline]
pub fn on_change<Msg, F>(handler: F) -> Attribute<Msg>
where
	Msg: 'static,
	F: Fn(&Event) -> Msg + Send + Sync + 'static,
{
	on(EventType::Change, handler)
}

/// A submit listener.
#[inline]
pub fn on_submit<Msg, F>(handler: F) -> Attribute<Msg>
where
	Msg: 'static,
	F: Fn(&Event) -> Msg + Send + Sync + 'static,
{
	on(EventType::Submit, handler)
}
