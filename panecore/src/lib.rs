//! panecore — shared window-management library for pane applications
//!
//! Every helper works against an injected [`WindowHost`] rather than an
//! ambient "current window" global, so applications stay testable without
//! a running GUI. [`frame::FrameHost`] is the egui/eframe-backed host used
//! by the real apps.

pub mod center;
pub mod dialog;
pub mod frame;
pub mod host;
pub mod random;
pub mod ready;

pub use center::move_center;
pub use dialog::{open_dialog, DialogRequest};
pub use host::{HostError, WindowHost};
pub use random::random_string;
pub use ready::ready;

#[cfg(test)]
pub(crate) mod fake;
