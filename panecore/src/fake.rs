//! Recording fake host for unit tests
//!
//! Geometry is plain fields the test sets up, move/modal requests are
//! recorded for assertions, and timers only advance when the test calls
//! [`FakeHost::tick`].

use std::time::Duration;

use egui::Vec2;
use serde_json::Value;

use crate::dialog::DialogRequest;
use crate::host::{BoxKind, HostError, Result, TimerCallback, TimerId, WindowHost};

pub struct FakeHost {
    pub border: Vec2,
    pub client: Vec2,
    pub screen: Vec2,
    /// When set, geometry queries fail like a torn-down window.
    pub fail_geometry: bool,
    /// Every move request, as (left, top, client size).
    pub moves: Vec<(f32, f32, Vec2)>,
    pub modal_requests: Vec<DialogRequest>,
    /// Close value the next modal "returns".
    pub modal_reply: Option<Value>,
    timers: Vec<FakeTimer>,
    next_timer: u64,
}

struct FakeTimer {
    id: TimerId,
    interval: Duration,
    callback: Option<TimerCallback>,
    cancelled: bool,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            border: Vec2::new(820.0, 640.0),
            client: Vec2::new(800.0, 600.0),
            screen: Vec2::new(1920.0, 1080.0),
            fail_geometry: false,
            moves: Vec::new(),
            modal_requests: Vec::new(),
            modal_reply: None,
            timers: Vec::new(),
            next_timer: 0,
        }
    }

    /// Fire every live timer once, in creation order.
    pub fn tick(&mut self) {
        let ids: Vec<TimerId> = self
            .timers
            .iter()
            .filter(|t| !t.cancelled)
            .map(|t| t.id)
            .collect();
        for id in ids {
            let callback = self
                .timers
                .iter_mut()
                .find(|t| t.id == id && !t.cancelled)
                .and_then(|t| t.callback.take());
            let Some(mut callback) = callback else { continue };
            let host: &mut dyn WindowHost = self;
            callback(host, id);
            // Re-arm unless the callback cancelled its own timer.
            if let Some(t) = self.timers.iter_mut().find(|t| t.id == id) {
                if !t.cancelled {
                    t.callback = Some(callback);
                }
            }
        }
    }

    /// Timers that are started and not cancelled.
    pub fn active_timers(&self) -> usize {
        self.timers.iter().filter(|t| !t.cancelled).count()
    }

    /// Intervals of every timer ever started, in order.
    pub fn started_intervals(&self) -> Vec<Duration> {
        self.timers.iter().map(|t| t.interval).collect()
    }
}

impl WindowHost for FakeHost {
    fn modal(&mut self, request: &DialogRequest) -> Result<Option<Value>> {
        self.modal_requests.push(request.clone());
        Ok(self.modal_reply.clone())
    }

    fn box_dimension(&self, kind: BoxKind) -> Result<Vec2> {
        if self.fail_geometry {
            return Err(HostError::NoWindow);
        }
        Ok(match kind {
            BoxKind::Border => self.border,
            BoxKind::Client => self.client,
        })
    }

    fn screen_dimension(&self) -> Result<Vec2> {
        if self.fail_geometry {
            return Err(HostError::NoScreen);
        }
        Ok(self.screen)
    }

    fn move_window(&mut self, left: f32, top: f32, size: Vec2) -> Result<()> {
        self.moves.push((left, top, size));
        Ok(())
    }

    fn start_timer(&mut self, interval: Duration, callback: TimerCallback) -> Result<TimerId> {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.timers.push(FakeTimer {
            id,
            interval,
            callback: Some(callback),
            cancelled: false,
        });
        Ok(id)
    }

    fn cancel_timer(&mut self, id: TimerId) {
        if let Some(t) = self.timers.iter_mut().find(|t| t.id == id) {
            t.cancelled = true;
            t.callback = None;
        }
    }
}
