//! Axis projection.
//!
//! Every tracked quantity (path, speed, direction) is kept per axis. An
//! [`AxisSet`] records which axes a tracker follows; [`PerAxis`] stores one
//! value for each of the two axes regardless of the configuration, so a
//! full [`Point`] can always be projected for lock arbitration.

use crate::config::ConfigError;
use crate::geometry::Point;
use std::fmt;
use std::ops::{Index, IndexMut};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Scalar position of `point` along this axis.
    pub fn project(self, point: Point) -> f32 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    pub fn orthogonal(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Subset of {x, y}.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSet(u8);

impl AxisSet {
    pub const NONE: Self = Self(0);
    pub const X: Self = Self(1);
    pub const Y: Self = Self(2);
    pub const XY: Self = Self(3);

    /// Parses the compact form used by configuration: `"x"`, `"y"`, `"xy"`.
    pub fn parse(axes: &str) -> Result<Self, ConfigError> {
        let mut set = Self::NONE;
        for c in axes.chars() {
            match c {
                'x' | 'X' => set.insert(Axis::X),
                'y' | 'Y' => set.insert(Axis::Y),
                other => return Err(ConfigError::InvalidAxis(other)),
            }
        }
        if set.is_empty() {
            return Err(ConfigError::EmptyAxis);
        }
        Ok(set)
    }

    pub fn with(mut self, axis: Axis) -> Self {
        self.insert(axis);
        self
    }

    pub fn insert(&mut self, axis: Axis) {
        self.0 |= axis.bit();
    }

    pub fn remove(&mut self, axis: Axis) {
        self.0 &= !axis.bit();
    }

    pub fn contains(&self, axis: Axis) -> bool {
        (self.0 & axis.bit()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The first configured axis in x-then-y order. For a single-axis set
    /// this is the axis lock arbitration compares against.
    pub fn primary(&self) -> Option<Axis> {
        self.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(move |axis| self.contains(*axis))
    }
}

impl Default for AxisSet {
    fn default() -> Self {
        Self::XY
    }
}

impl fmt::Debug for AxisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AxisSet(\"")?;
        for axis in self.iter() {
            write!(f, "{axis}")?;
        }
        write!(f, "\")")
    }
}

impl From<Axis> for AxisSet {
    fn from(axis: Axis) -> Self {
        Self::NONE.with(axis)
    }
}

/// One value per axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PerAxis<T> {
    pub x: T,
    pub y: T,
}

impl<T> PerAxis<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x: value.clone(),
            y: value,
        }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl<T> Index<Axis> for PerAxis<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        self.get(axis)
    }
}

impl<T> IndexMut<Axis> for PerAxis<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        self.get_mut(axis)
    }
}

#[cfg(test)]
#[path = "tests/axis_tests.rs"]
mod tests;
