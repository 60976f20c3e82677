//! Modal dialog requests
//!
//! [`open_dialog`] hands a [`DialogRequest`] to the host and returns the
//! dialog's close value unchanged. Parenting to the current window is
//! implied by the host the request is sent through; blocking semantics
//! (and whether the parent keeps repainting meanwhile) belong to the
//! host, not to this module.

use serde_json::Value;

use crate::host::{Result, WindowHost};

/// Alignment code meaning "centered relative to the parent window".
/// Negative codes anchor against the parent in the host convention.
pub const ALIGN_PARENT_CENTER: i32 = -8;

/// Default dialog size in points.
pub const DIALOG_DEFAULT_WIDTH: f32 = 800.0;
pub const DIALOG_DEFAULT_HEIGHT: f32 = 600.0;

/// Window type requested for a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// Regular framed window with decorations.
    Frame,
    /// Tool window (thin frame, not shown in task switchers).
    Tool,
    /// Undecorated topmost popup.
    Popup,
}

/// Everything a host needs to show a modal dialog. Built once, passed to
/// the host, and discarded — requests are not retained anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRequest {
    /// What the dialog should display. How the url is interpreted is
    /// host-defined (a document to load, or a dialog program to run).
    pub url: String,
    pub kind: WindowKind,
    pub width: f32,
    pub height: f32,
    /// Placement strategy, normally [`ALIGN_PARENT_CENTER`].
    pub alignment: i32,
    /// Opaque payload the dialog implementation may read back.
    pub parameters: Option<Value>,
}

impl DialogRequest {
    /// Request a framed 800×600 dialog centered on its parent.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: WindowKind::Frame,
            width: DIALOG_DEFAULT_WIDTH,
            height: DIALOG_DEFAULT_HEIGHT,
            alignment: ALIGN_PARENT_CENTER,
            parameters: None,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// Open a modal dialog on `host` and return its close value, if any.
///
/// The request reaches the host as built — url, window kind, size,
/// alignment and parameters are not reinterpreted here, and host errors
/// (no window, window creation failure) come back untranslated.
pub fn open_dialog(host: &mut dyn WindowHost, request: DialogRequest) -> Result<Option<Value>> {
    host.modal(&request)
}
