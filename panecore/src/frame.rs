//! eframe/egui host adapter
//!
//! [`FrameHost`] implements [`WindowHost`] for an eframe viewport:
//!
//! - Geometry comes from the viewport info; moves go out as viewport
//!   commands.
//! - Timers are a frame-pumped wheel. The app calls [`FrameHost::pump`]
//!   at the top of every `update()`; due callbacks fire there and the
//!   context is asked to repaint in time for the next deadline.
//! - Modal dialogs run as child processes. egui cannot nest an event
//!   loop, so this host blocks by waiting on the dialog process — the
//!   parent window does not repaint while the dialog is open. The
//!   request url names the dialog program (looked up beside the current
//!   executable, then on PATH); parameters and the requested size travel
//!   in environment variables, and the child writes its close value as
//!   JSON to the path named in [`DIALOG_RESULT_ENV`].
//!
//! The dialog side of that handshake is [`DialogSession`].

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

use egui::{Pos2, Vec2, ViewportCommand};
use serde_json::Value;

use crate::dialog::DialogRequest;
use crate::host::{BoxKind, HostError, Result, TimerCallback, TimerId, WindowHost};

/// Path the dialog process writes its close value to. Present in the
/// environment exactly when the process was spawned as a modal dialog.
pub const DIALOG_RESULT_ENV: &str = "PANE_DIALOG_RESULT";
/// Opaque request parameters, JSON-encoded.
pub const DIALOG_PARAMS_ENV: &str = "PANE_DIALOG_PARAMS";
/// Requested dialog size as "WIDTHxHEIGHT" in points.
pub const DIALOG_SIZE_ENV: &str = "PANE_DIALOG_SIZE";

struct TimerEntry {
    id: TimerId,
    interval: Duration,
    due: Instant,
    callback: TimerCallback,
}

/// [`WindowHost`] for the window behind an `egui::Context`.
pub struct FrameHost {
    ctx: egui::Context,
    timers: Vec<TimerEntry>,
    /// Timer currently executing its callback, if any.
    firing: Option<TimerId>,
    /// Ids cancelled from inside their own callback; dropped on re-arm.
    cancelled: Vec<TimerId>,
    next_timer: u64,
    result_seq: u64,
}

impl FrameHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            timers: Vec::new(),
            firing: None,
            cancelled: Vec::new(),
            next_timer: 0,
            result_seq: 0,
        }
    }

    /// Fire due timers and schedule the next wakeup.
    ///
    /// Call at the start of every `update()`. Each due timer fires at
    /// most once per pump; timers started from inside a callback first
    /// fire on a later pump.
    pub fn pump(&mut self) {
        let now = Instant::now();
        let due: Vec<TimerId> = self
            .timers
            .iter()
            .filter(|t| t.due <= now)
            .map(|t| t.id)
            .collect();
        for id in due {
            let Some(idx) = self.timers.iter().position(|t| t.id == id) else {
                // Cancelled by an earlier callback in this pump.
                continue;
            };
            let mut entry = self.timers.swap_remove(idx);
            entry.due = now + entry.interval;

            self.firing = Some(id);
            let host: &mut dyn WindowHost = self;
            (entry.callback)(host, id);
            self.firing = None;

            if let Some(pos) = self.cancelled.iter().position(|c| *c == id) {
                self.cancelled.swap_remove(pos);
            } else {
                self.timers.push(entry);
            }
        }

        if let Some(next) = self.timers.iter().map(|t| t.due).min() {
            self.ctx
                .request_repaint_after(next.saturating_duration_since(now));
        }
    }
}

impl WindowHost for FrameHost {
    fn modal(&mut self, request: &DialogRequest) -> Result<Option<Value>> {
        let program = resolve_dialog_program(&request.url);

        self.result_seq += 1;
        let result_path = std::env::temp_dir().join(format!(
            "pane_dialog_{}_{}.json",
            std::process::id(),
            self.result_seq
        ));
        let _ = fs::remove_file(&result_path);

        let mut cmd = Command::new(&program);
        cmd.env(DIALOG_RESULT_ENV, &result_path).env(
            DIALOG_SIZE_ENV,
            format!("{}x{}", request.width, request.height),
        );
        if let Some(parameters) = &request.parameters {
            cmd.env(DIALOG_PARAMS_ENV, serde_json::to_string(parameters)?);
        }

        // Blocks until the dialog closes; that wait is what makes the
        // dialog modal on this host.
        let status = cmd.status().map_err(|e| {
            HostError::Dialog(format!("cannot launch {}: {}", program.display(), e))
        })?;
        if !status.success() {
            let _ = fs::remove_file(&result_path);
            return Err(HostError::Dialog(format!(
                "{} exited with {}",
                request.url, status
            )));
        }

        match fs::read_to_string(&result_path) {
            Ok(raw) => {
                let _ = fs::remove_file(&result_path);
                Ok(Some(serde_json::from_str(&raw)?))
            }
            // No file: the dialog closed without producing a value.
            Err(_) => Ok(None),
        }
    }

    fn box_dimension(&self, kind: BoxKind) -> Result<Vec2> {
        self.ctx
            .input(|i| {
                let info = i.viewport();
                match kind {
                    BoxKind::Border => info.outer_rect,
                    BoxKind::Client => info.inner_rect,
                }
            })
            .map(|r| r.size())
            .ok_or(HostError::NoWindow)
    }

    fn screen_dimension(&self) -> Result<Vec2> {
        self.ctx
            .input(|i| i.viewport().monitor_size)
            .ok_or(HostError::NoScreen)
    }

    fn move_window(&mut self, left: f32, top: f32, size: Vec2) -> Result<()> {
        self.ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
        self.ctx
            .send_viewport_cmd(ViewportCommand::OuterPosition(Pos2::new(left, top)));
        Ok(())
    }

    fn start_timer(&mut self, interval: Duration, callback: TimerCallback) -> Result<TimerId> {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.timers.push(TimerEntry {
            id,
            interval,
            due: Instant::now() + interval,
            callback,
        });
        // Wake the event loop in time for the first fire.
        self.ctx.request_repaint_after(interval);
        Ok(id)
    }

    fn cancel_timer(&mut self, id: TimerId) {
        if let Some(idx) = self.timers.iter().position(|t| t.id == id) {
            self.timers.swap_remove(idx);
        } else if self.firing == Some(id) {
            self.cancelled.push(id);
        }
    }
}

/// Resolve a dialog url to the program to run: a sibling of the current
/// executable wins (installed layout), otherwise the OS searches PATH.
fn resolve_dialog_program(url: &str) -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(url);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(url)
}

/// Dialog-process side of the modal handshake.
///
/// A program spawned by [`FrameHost::modal`] calls
/// [`DialogSession::from_env`] at startup; `Some` means "running as a
/// dialog". The session exposes the parent's parameters and requested
/// size, and [`DialogSession::close`] writes the close value the parent
/// will receive.
pub struct DialogSession {
    result_path: PathBuf,
    parameters: Option<Value>,
    size: Option<Vec2>,
}

impl DialogSession {
    pub fn from_env() -> Option<Self> {
        let result_path = PathBuf::from(std::env::var_os(DIALOG_RESULT_ENV)?);
        let parameters = std::env::var(DIALOG_PARAMS_ENV)
            .ok()
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(v) => Some(v),
                Err(e) => {
                    eprintln!("[panecore] bad dialog parameters: {}", e);
                    None
                }
            });
        let size = std::env::var(DIALOG_SIZE_ENV)
            .ok()
            .and_then(|s| parse_size(&s));
        Some(Self {
            result_path,
            parameters,
            size,
        })
    }

    /// Opaque parameters the parent attached to the request.
    pub fn parameters(&self) -> Option<&Value> {
        self.parameters.as_ref()
    }

    /// Size the parent requested for this dialog.
    pub fn size(&self) -> Option<Vec2> {
        self.size
    }

    /// Record the dialog's close value. `None` closes without a value —
    /// the parent sees that as an absent result, not an error.
    pub fn close(self, value: Option<&Value>) -> Result<()> {
        match value {
            Some(v) => fs::write(&self.result_path, serde_json::to_string(v)?)?,
            None => {
                let _ = fs::remove_file(&self.result_path);
            }
        }
        Ok(())
    }
}

fn parse_size(s: &str) -> Option<Vec2> {
    let (w, h) = s.split_once('x')?;
    Some(Vec2::new(w.parse().ok()?, h.parse().ok()?))
}
