//! Core types for Kotti: axis projection, configuration, and the typed
//! output events produced by the touch tracker.

pub mod axis;
pub mod bus;
pub mod clock;
pub mod config;
pub mod direction;
pub mod event;
pub mod geometry;

pub use axis::{Axis, AxisSet, PerAxis};
pub use bus::{ListenerId, TouchEventBus};
pub use clock::UptimeClock;
pub use config::{ConfigError, TouchConfig};
pub use direction::Direction;
pub use event::{AxisMomentum, AxisPush, Momentum, PushBy, TouchEvent, TouchEventKind};
pub use geometry::Point;

pub mod prelude {
    pub use crate::axis::{Axis, AxisSet, PerAxis};
    pub use crate::bus::{ListenerId, TouchEventBus};
    pub use crate::config::{ConfigError, TouchConfig};
    pub use crate::direction::Direction;
    pub use crate::event::*;
    pub use crate::geometry::Point;
}
