//! Window-host boundary
//!
//! A [`WindowHost`] is the window a helper operates on, plus the small
//! slice of toolkit machinery the helpers need: modal dialog creation,
//! box geometry, a move/resize request, and repeating timers. Hosts are
//! passed in explicitly; nothing in this crate reaches for a global
//! window.

use std::time::Duration;

use egui::Vec2;
use serde_json::Value;
use thiserror::Error;

use crate::dialog::DialogRequest;

/// Which rectangle of a window a dimension query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    /// Outer box, including decorations (title bar, borders).
    Border,
    /// Inner box — the content area.
    Client,
}

/// Handle for a repeating timer started on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Callback invoked on every timer fire. The host passes the timer's own
/// id so a callback can cancel itself.
pub type TimerCallback = Box<dyn FnMut(&mut dyn WindowHost, TimerId)>;

/// Failures surfaced by a window host. Helpers propagate these unchanged;
/// there is no retry or recovery layer on top.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("no current window")]
    NoWindow,
    #[error("screen metrics unavailable")]
    NoScreen,
    #[error("dialog failed: {0}")]
    Dialog(String),
    #[error("timer failed: {0}")]
    Timer(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HostError>;

/// The window a helper acts on, together with the host facilities the
/// helpers in this crate rely on.
///
/// All geometry is in the host's logical points; fractional values are
/// passed through and the host decides how to round.
pub trait WindowHost {
    /// Open a modal dialog parented to this window and block until it
    /// closes. Returns the dialog's close value, if it produced one.
    fn modal(&mut self, request: &DialogRequest) -> Result<Option<Value>>;

    /// Width and height of the requested window box.
    fn box_dimension(&self, kind: BoxKind) -> Result<Vec2>;

    /// Usable width and height of the screen this window sits on.
    fn screen_dimension(&self) -> Result<Vec2>;

    /// Move and resize this window in one request. `left`/`top` and
    /// `size` use client-box coordinate semantics.
    fn move_window(&mut self, left: f32, top: f32, size: Vec2) -> Result<()>;

    /// Start a repeating timer firing every `interval`.
    fn start_timer(&mut self, interval: Duration, callback: TimerCallback) -> Result<TimerId>;

    /// Cancel a running timer. Cancelling from inside the timer's own
    /// callback stops any further fires; unknown ids are ignored.
    fn cancel_timer(&mut self, id: TimerId);
}
