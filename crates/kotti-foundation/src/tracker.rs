//! The per-owner touch state machine.
//!
//! The host feeds native touch events to [`TouchTracker::touch_start`],
//! [`TouchTracker::touch_move`], [`TouchTracker::touch_end`] and
//! [`TouchTracker::touch_cancel`] (or [`TouchTracker::handle`]), one at a
//! time, and applies the returned [`TouchResponse`] to the native event.
//! Derived events are published on the tracker's [`TouchEventBus`].
//!
//! Listeners run synchronously inside the entry point that published the
//! event and must not call back into the same tracker.

use crate::input::{TouchPhase, TouchSnapshot};
use crate::lock::Arbitration;
use crate::session::Session;
use kotti_core::{
    ConfigError, ListenerId, TouchConfig, TouchEvent, TouchEventBus, TouchEventKind,
};

/// What the host should do with the native event it just delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl TouchResponse {
    /// Leave the native event untouched.
    pub const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Block default handling and keep the event from other consumers.
    pub const SUPPRESS: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };

    pub fn is_suppressed(&self) -> bool {
        self.prevent_default && self.stop_propagation
    }
}

pub struct TouchTracker {
    config: TouchConfig,
    session: Session,
    enabled: bool,
    bus: TouchEventBus,
}

impl TouchTracker {
    pub fn new(config: TouchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validate()?,
            session: Session::new(),
            enabled: true,
            bus: TouchEventBus::new(),
        })
    }

    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn events(&self) -> &TouchEventBus {
        &self.bus
    }

    pub fn subscribe(
        &self,
        kind: TouchEventKind,
        handler: impl Fn(&TouchEvent) + 'static,
    ) -> ListenerId {
        self.bus.subscribe(kind, handler)
    }

    pub fn subscribe_all(&self, handler: impl Fn(&TouchEvent) + 'static) -> ListenerId {
        self.bus.subscribe_all(handler)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_touch_active(&self) -> bool {
        self.session.is_active
    }

    /// Enables or disables tracking.
    ///
    /// Disabling during a gesture drops its history and publishes a single
    /// `TouchEnd`, so subscribers never see a gesture without an end.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        if !enabled && self.session.is_active {
            log::debug!("tracking disabled mid-gesture; ending it");
            self.session.clear_tracks(self.config.axis);
            self.session.is_active = false;
            self.bus.publish(&TouchEvent::TouchEnd);
        }
    }

    pub fn disable_scrolling(&mut self, disabled: bool) {
        self.set_enabled(!disabled);
    }

    pub fn handle(&mut self, phase: TouchPhase, snapshot: &TouchSnapshot) -> TouchResponse {
        match phase {
            TouchPhase::Start => self.touch_start(snapshot),
            TouchPhase::Move => self.touch_move(snapshot),
            TouchPhase::End => self.touch_end(snapshot),
            TouchPhase::Cancel => self.touch_cancel(snapshot),
        }
    }

    pub fn touch_start(&mut self, snapshot: &TouchSnapshot) -> TouchResponse {
        if !self.enabled {
            return TouchResponse::PASS;
        }

        self.session.is_active = true;
        self.bus.publish(&TouchEvent::TouchStart);

        // Extra fingers inherit the lock decision of the first one.
        if snapshot.touches.len() < 2 {
            self.session.reset_arbitration();
        }

        self.session.resolve_active_finger(snapshot, self.config.axis, true);
        self.configured_response()
    }

    pub fn touch_move(&mut self, snapshot: &TouchSnapshot) -> TouchResponse {
        if !self.enabled || self.session.ignore_movements() {
            return TouchResponse::PASS;
        }
        // A gesture ended by `set_enabled(false)` stays silent until the next start.
        if !self.session.is_active {
            return self.configured_response();
        }

        self.session.resolve_active_finger(snapshot, self.config.axis, false);
        let Some(point) = self.session.active_point(snapshot) else {
            log::trace!("move without a tracked finger; skipped");
            return TouchResponse::PASS;
        };

        let mut response = self.configured_response();

        if self.config.lock {
            if let Some(locked) = self.config.axis.primary() {
                match self.session.arbitrate(point, locked) {
                    Arbitration::Probe => return TouchResponse::SUPPRESS,
                    Arbitration::Yield => return TouchResponse::PASS,
                    Arbitration::Own => {}
                }
            }
        }

        if self.session.stop_events() {
            response = TouchResponse::SUPPRESS;
        }

        let push = self
            .session
            .record_move(point, self.config.axis, snapshot.uptime_ms);
        log::trace!("move at {:?}: {:?}", point, push);

        if self.config.axis.iter().all(|axis| push.px(axis) == 0.0) {
            return response;
        }
        self.bus.publish(&TouchEvent::PushBy(push));
        response
    }

    pub fn touch_end(&mut self, snapshot: &TouchSnapshot) -> TouchResponse {
        if !self.enabled {
            return TouchResponse::PASS;
        }
        if !self.session.is_active {
            return self.configured_response();
        }

        // The next move re-resolves whichever finger is still down.
        self.session.invalidate_finger();

        if !snapshot.touches.is_empty() {
            return self.configured_response();
        }

        self.session.is_active = false;
        self.bus.publish(&TouchEvent::TouchEnd);

        if !self.config.momentum || self.session.ignore_movements() {
            return self.configured_response();
        }

        let idle_ms = snapshot
            .uptime_ms
            .saturating_sub(self.session.timestamps.move_ms);
        if idle_ms > self.config.max_time_diff_for_momentum_ms {
            log::trace!("finger idle for {idle_ms}ms before release; no momentum");
            return self.configured_response();
        }

        let momentum = self.session.estimate_momentum(&self.config);
        if !momentum.is_zero() {
            log::debug!("release with momentum {:?}", momentum);
            self.bus.publish(&TouchEvent::TouchEndWithMomentum(momentum));
        }
        self.configured_response()
    }

    /// Ends the gesture without momentum.
    pub fn touch_cancel(&mut self, _snapshot: &TouchSnapshot) -> TouchResponse {
        if !self.enabled {
            return TouchResponse::PASS;
        }

        self.session.is_active = false;
        self.configured_response()
    }

    fn configured_response(&self) -> TouchResponse {
        TouchResponse {
            prevent_default: self.config.prevent_default_events,
            stop_propagation: self.config.stop_events,
        }
    }
}

impl std::fmt::Debug for TouchTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchTracker")
            .field("config", &self.config)
            .field("enabled", &self.enabled)
            .field("active", &self.session.is_active)
            .field("lock", &self.session.lock)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
