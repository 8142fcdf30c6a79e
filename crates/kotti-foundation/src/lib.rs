//! Touch tracking for custom scrollable widgets.
//!
//! [`TouchTracker`] turns start/move/end/cancel snapshots into `pushBy`
//! and momentum events, and arbitrates axis locks with sibling consumers.

pub mod input;
pub mod session;
pub mod tracker;

mod finger;
mod lock;
mod momentum;
mod path;

pub use input::{TouchId, TouchList, TouchPhase, TouchPoint, TouchSnapshot};
pub use lock::LOCK_PROBE_SAMPLES;
pub use session::{AxisTrack, LockState, Session, SpeedSample, Timestamps};
pub use tracker::{TouchResponse, TouchTracker};

pub mod prelude {
    pub use crate::input::*;
    pub use crate::session::{LockState, Session};
    pub use crate::tracker::{TouchResponse, TouchTracker};
    pub use kotti_core::prelude::*;
}
