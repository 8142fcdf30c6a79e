//! Interpolation helpers for hosts that animate Kotti's output.
//!
//! The touch tracker itself never animates; these curves are for turning a
//! `pushBy` or momentum value into a position over time.

pub mod easing;

pub use easing::{ease_linear, ease_out_cubic, Easing};
