//! Attributes, DOM properties and event bindings.
//!
//! An [`Attribute`] is generic over the message type `Msg` produced by its
//! event handler. Plain attributes and properties never produce messages, but
//! carry the parameter so that all three kinds can live in one ordered list.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::event::{Event, EventType};

/// Shared message transform applied by [`Attribute::map_with`].
pub type Mapper<Msg, Msg2> = Arc<dyn Fn(Msg) -> Msg2 + Send + Sync + 'static>;

/// A cloneable event handler producing a message of type `Msg`.
pub struct EventHandler<Msg> {
	handler: Arc<dyn Fn(&Event) -> Msg + Send + Sync + 'static>,
}

impl<Msg: 'static> EventHandler<Msg> {
	/// Wraps a closure.
	pub fn new<F>(handler: F) -> Self
	where
		F: Fn(&Event) -> Msg + Send + Sync + 'static,
	{
		Self {
			handler: Arc::new(handler),
		}
	}

	/// Invokes the handler.
	pub fn call(&self, event: &Event) -> Msg {
		(self.handler)(event)
	}

	/// Returns a handler whose message is passed through `mapper`.
	pub fn map_with<Msg2: 'static>(&self, mapper: &Mapper<Msg, Msg2>) -> EventHandler<Msg2> {
		let inner = Arc::clone(&self.handler);
		let mapper = Arc::clone(mapper);
		EventHandler {
			handler: Arc::new(move |event: &Event| mapper(inner(event))),
		}
	}
}

impl<Msg> EventHandler<Msg> {
	/// Returns whether both handlers share the same closure.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.handler, &other.handler)
	}
}

impl<Msg> Clone for EventHandler<Msg> {
	fn clone(&self) -> Self {
		Self {
			handler: Arc::clone(&self.handler),
		}
	}
}

impl<Msg> fmt::Debug for EventHandler<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("EventHandler(<closure>)")
	}
}

/// A single HTML attribute, DOM property, or event binding.
pub enum Attribute<Msg> {
	/// A markup attribute such as `class="card"`.
	Attr {
		/// Attribute name.
		name: Cow<'static, str>,
		/// Attribute value (unescaped).
		value: Cow<'static, str>,
	},
	/// A DOM property set on the live element (e.g. `value`, `checked`).
	///
	/// Properties do not appear in serialized markup.
	Property {
		/// Property name.
		name: Cow<'static, str>,
		/// Property value.
		value: serde_json::Value,
	},
	/// An event listener.
	Listener {
		/// Event the handler reacts to.
		event: EventType,
		/// Handler producing the message.
		handler: EventHandler<Msg>,
	},
}

impl<Msg: 'static> Attribute<Msg> {
	/// Creates a markup attribute.
	pub fn attr(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Attribute::Attr {
			name: name.into(),
			value: value.into(),
		}
	}

	/// Creates a DOM property binding.
	pub fn property(name: impl Into<Cow<'static, str>>, value: impl Into<serde_json::Value>) -> Self {
		Attribute::Property {
			name: name.into(),
			value: value.into(),
		}
	}

	/// Creates an event listener.
	pub fn listener<F>(event: EventType, handler: F) -> Self
	where
		F: Fn(&Event) -> Msg + Send + Sync + 'static,
	{
		Attribute::Listener {
			event,
			handler: EventHandler::new(handler),
		}
	}

	/// Returns the attribute, property or event name.
	pub fn name(&self) -> &str {
		match self {
			Attribute::Attr { name, .. } | Attribute::Property { name, .. } => name.as_ref(),
			Attribute::Listener { event, .. } => event.as_str(),
		}
	}

	/// Rewrites the message type carried by an event binding.
	///
	/// Markup attributes and properties are copied unchanged.
	pub fn map_with<Msg2: 'static>(&self, mapper: &Mapper<Msg, Msg2>) -> Attribute<Msg2> {
		match self {
			Attribute::Attr { name, value } => Attribute::Attr {
				name: name.clone(),
				value: value.clone(),
			},
			Attribute::Property { name, value } => Attribute::Property {
				name: name.clone(),
				value: value.clone(),
			},
			Attribute::Listener { event, handler } => Attribute::Listener {
				event: *event,
				handler: handler.map_with(mapper),
			},
		}
	}

	/// Convenience wrapper around [`map_with`](Self::map_with) for a single attribute.
	pub fn map<Msg2, F>(&self, f: F) -> Attribute<Msg2>
	where
		Msg2: 'static,
		F: Fn(Msg) -> Msg2 + Send + Sync + 'static,
	{
		let mapper: Mapper<Msg, Msg2> = Arc::new(f);
		self.map_with(&mapper)
	}
}

impl<Msg> Clone for Attribute<Msg> {
	fn clone(&self) -> Self {
		match self {
			Attribute::Attr { name, value } => Attribute::Attr {
				name: name.clone(),
				value: value.clone(),
			},
			Attribute::Property { name, value } => Attribute::Property {
				name: name.clone(),
				value: value.clone(),
			},
			Attribute::Listener { event, handler } => Attribute::Listener {
				event: *event,
				handler: handler.clone(),
			},
		}
	}
}

impl<Msg> fmt::Debug for Attribute<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Attribute::Attr { name, value } => f
				.debug_struct("Attr")
				.field("name", name)
				.field("value", value)
				.finish(),
			Attribute::Property { name, value } => f
				.debug_struct("Property")
				.field("name", name)
				.field("value", value)
				.finish(),
			Attribute::Listener { event, .. } => f
				.debug_struct("Listener")
				.field("event", event)
				.field("handler", &"<closure>")
				.finish(),
		}
	}
}

/// Listeners compare equal only when they share the same handler closure.
impl<Msg> PartialEq for Attribute<Msg> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Attribute::Attr { name: n1, value: v1 }, Attribute::Attr { name: n2, value: v2 }) => {
				n1 == n2 && v1 == v2
			}
			(
				Attribute::Property { name: n1, value: v1 },
				Attribute::Property { name: n2, value: v2 },
			) => n1 == n2 && v1 == v2,
			(
				Attribute::Listener { event: e1, handler: h1 },
				Attribute::Listener { event: e2, handler: h2 },
			) => e1 == e2 && h1.ptr_eq(h2),
			_ => false,
		}
	}
}
