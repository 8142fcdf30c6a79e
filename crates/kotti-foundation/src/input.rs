//! Normalised touch input handed to the tracker by the host.

use kotti_core::Point;
use smallvec::SmallVec;

/// Stable identifier of one contact for as long as it stays down.
pub type TouchId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub position: Point,
}

impl TouchPoint {
    pub const fn new(id: TouchId, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

pub type TouchList = SmallVec<[TouchPoint; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One native touch event, reduced to what the tracker needs.
///
/// - `touches`: every contact currently down.
/// - `changed_touches`: the contacts that triggered this event; the first
///   one decides which finger is active.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchSnapshot {
    pub uptime_ms: u64,
    pub touches: TouchList,
    pub changed_touches: TouchList,
}

impl TouchSnapshot {
    pub fn new(uptime_ms: u64) -> Self {
        Self {
            uptime_ms,
            ..Self::default()
        }
    }

    pub fn with_touch(mut self, touch: TouchPoint) -> Self {
        self.touches.push(touch);
        self
    }

    pub fn with_changed(mut self, touch: TouchPoint) -> Self {
        self.changed_touches.push(touch);
        self
    }

    /// Index in `touches` of the contact that triggered this event.
    ///
    /// Falls back to the first contact when the changed contact is not
    /// listed. `None` only when no contact is down.
    pub fn changed_index(&self) -> Option<usize> {
        if self.touches.is_empty() {
            return None;
        }
        let index = self
            .changed_touches
            .first()
            .and_then(|changed| self.touches.iter().position(|t| t.id == changed.id))
            .unwrap_or(0);
        Some(index)
    }

    pub fn position_at(&self, index: usize) -> Option<Point> {
        self.touches.get(index).map(|touch| touch.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_index_finds_identifier() {
        let snapshot = TouchSnapshot::new(0)
            .with_touch(TouchPoint::new(7, 0.0, 0.0))
            .with_touch(TouchPoint::new(9, 5.0, 5.0))
            .with_changed(TouchPoint::new(9, 5.0, 5.0));
        assert_eq!(snapshot.changed_index(), Some(1));
        assert_eq!(snapshot.position_at(1), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn changed_index_falls_back_to_first() {
        let snapshot = TouchSnapshot::new(0)
            .with_touch(TouchPoint::new(1, 0.0, 0.0))
            .with_changed(TouchPoint::new(42, 1.0, 1.0));
        assert_eq!(snapshot.changed_index(), Some(0));
        assert_eq!(TouchSnapshot::new(0).changed_index(), None);
    }
}
