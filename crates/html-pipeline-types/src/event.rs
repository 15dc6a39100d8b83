//! DOM event names and the payload handed to event handlers.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

macro_rules! define_event_types {
	($($(#[$meta:meta])* $variant:ident => $name:literal),+ $(,)?) => {
		/// DOM event types that can carry a listener.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum EventType {
			$($(#[$meta])* $variant,)+
		}

		impl EventType {
			/// All known event types, in declaration order.
			pub const ALL: &'static [EventType] = &[$(EventType::$variant,)+];

			/// Returns the DOM event name (e.g. `"click"`).
			pub fn as_str(&self) -> &'static str {
				match self {
					$(EventType::$variant => $name,)+
				}
			}
		}

		impl FromStr for EventType {
			type Err = Error;

			fn from_str(s: &str) -> Result<Self> {
				match s {
					$($name => Ok(EventType::$variant),)+
					other => {
						tracing::debug!(event = other, "rejecting unknown event type");
						Err(Error::UnknownEventType(other.to_string()))
					}
				}
			}
		}
	};
}

define_event_types! {
	/// Mouse click.
	Click => "click",
	/// Double click.
	DblClick => "dblclick",
	/// Mouse pointer entered the element.
	MouseEnter => "mouseenter",
	/// Mouse pointer left the element.
	MouseLeave => "mouseleave",
	/// Value of an input changed (fires on every edit).
	Input => "input",
	/// Committed value change.
	Change => "change",
	/// Form submission.
	Submit => "submit",
	KeyDown => "keydown",
	KeyUp => "keyup",
	Focus => "focus",
	Blur => "blur",
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Payload passed to an [`EventHandler`](crate::EventHandler).
///
/// Renderers fill in `value` for input-like events; tests construct it
/// directly to drive [`NodeElement::dispatch`](crate::NodeElement::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
	/// Which event fired.
	pub event_type: EventType,
	/// Current value of the target, if any.
	pub value: Option<String>,
}

impl Event {
	/// Creates an event without a target value.
	pub fn new(event_type: EventType) -> Self {
		Self {
			event_type,
			value: None,
		}
	}

	/// Attaches the target's value.
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}
