use kotti_core::{ConfigError, Momentum, PushBy, TouchConfig, TouchEvent, TouchEventKind};
use kotti_foundation::{
    TouchId, TouchList, TouchPhase, TouchPoint, TouchResponse, TouchSnapshot, TouchTracker,
};
use smallvec::smallvec;
use std::cell::RefCell;
use std::rc::Rc;

/// Frame interval used by [`GestureRobot::drag`] when none is given.
pub const FRAME_MS: u64 = 16;

/// Scripted multi-finger driver around a [`TouchTracker`].
///
/// The robot owns a manual clock, keeps the list of fingers that are down,
/// and builds the snapshots a host would deliver for each press, move,
/// release, or cancel. Every published event and every host response is
/// recorded for assertions.
pub struct GestureRobot {
    tracker: TouchTracker,
    now_ms: u64,
    fingers: TouchList,
    events: Rc<RefCell<Vec<TouchEvent>>>,
    responses: Vec<(TouchPhase, TouchResponse)>,
}

impl GestureRobot {
    pub fn new(config: TouchConfig) -> Result<Self, ConfigError> {
        let tracker = TouchTracker::new(config)?;
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        tracker.subscribe_all(move |event| sink.borrow_mut().push(event.clone()));

        Ok(Self {
            tracker,
            now_ms: 0,
            fingers: TouchList::new(),
            events,
            responses: Vec::new(),
        })
    }

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut TouchTracker {
        &mut self.tracker
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Moves the manual clock forward.
    pub fn advance(&mut self, ms: u64) -> &mut Self {
        self.now_ms += ms;
        self
    }

    /// Puts finger `id` down at `(x, y)`.
    pub fn press(&mut self, id: TouchId, x: f32, y: f32) -> TouchResponse {
        let touch = TouchPoint::new(id, x, y);
        self.fingers.retain(|finger| finger.id != id);
        self.fingers.push(touch);
        self.dispatch(TouchPhase::Start, touch)
    }

    /// Moves finger `id` to `(x, y)`. Unknown fingers are ignored.
    pub fn move_to(&mut self, id: TouchId, x: f32, y: f32) -> TouchResponse {
        let Some(finger) = self.fingers.iter_mut().find(|finger| finger.id == id) else {
            return TouchResponse::PASS;
        };
        *finger = TouchPoint::new(id, x, y);
        let touch = *finger;
        self.dispatch(TouchPhase::Move, touch)
    }

    /// Lifts finger `id` at its last position.
    pub fn release(&mut self, id: TouchId) -> TouchResponse {
        let Some(index) = self.fingers.iter().position(|finger| finger.id == id) else {
            return TouchResponse::PASS;
        };
        let touch = self.fingers.remove(index);
        self.dispatch(TouchPhase::End, touch)
    }

    /// Cancels the gesture; every finger is dropped.
    pub fn cancel(&mut self) -> TouchResponse {
        let changed = self.fingers.first().copied();
        self.fingers.clear();
        match changed {
            Some(touch) => self.dispatch(TouchPhase::Cancel, touch),
            None => {
                let response = self.tracker.touch_cancel(&TouchSnapshot::new(self.now_ms));
                self.responses.push((TouchPhase::Cancel, response));
                response
            }
        }
    }

    /// Moves finger `id` through `points`, advancing the clock by
    /// `frame_ms` before each sample.
    pub fn drag(&mut self, id: TouchId, points: &[(f32, f32)], frame_ms: u64) -> Vec<TouchResponse> {
        points
            .iter()
            .map(|&(x, y)| {
                self.advance(frame_ms);
                self.move_to(id, x, y)
            })
            .collect()
    }

    /// Press, drag along x at one sample per frame, and release.
    pub fn flick_x(&mut self, id: TouchId, from: f32, to: f32, steps: usize, y: f32) {
        self.press(id, from, y);
        let step = (to - from) / steps.max(1) as f32;
        let points: Vec<(f32, f32)> = (1..=steps.max(1))
            .map(|i| (from + step * i as f32, y))
            .collect();
        self.drag(id, &points, FRAME_MS);
        self.advance(FRAME_MS);
        self.release(id);
    }

    pub fn fingers(&self) -> &[TouchPoint] {
        &self.fingers
    }

    pub fn events(&self) -> Vec<TouchEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<TouchEventKind> {
        self.events.borrow().iter().map(TouchEvent::kind).collect()
    }

    pub fn count(&self, kind: TouchEventKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    pub fn pushes(&self) -> Vec<PushBy> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| event.push_by().copied())
            .collect()
    }

    /// The most recent momentum payload, if any was published.
    pub fn last_momentum(&self) -> Option<Momentum> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| event.momentum().copied())
    }

    pub fn responses(&self) -> &[(TouchPhase, TouchResponse)] {
        &self.responses
    }

    pub fn last_response(&self) -> Option<TouchResponse> {
        self.responses.last().map(|(_, response)| *response)
    }

    pub fn clear_log(&mut self) {
        self.events.borrow_mut().clear();
        self.responses.clear();
    }

    fn dispatch(&mut self, phase: TouchPhase, changed: TouchPoint) -> TouchResponse {
        let snapshot = TouchSnapshot {
            uptime_ms: self.now_ms,
            touches: self.fingers.clone(),
            changed_touches: smallvec![changed],
        };
        let response = self.tracker.handle(phase, &snapshot);
        self.responses.push((phase, response));
        response
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
