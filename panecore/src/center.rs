//! Window centering
//!
//! Centers the host window on its screen, optionally resizing the client
//! area at the same time.

use egui::Vec2;

use crate::host::{BoxKind, Result, WindowHost};

/// Center the window on its screen.
///
/// `width` and `height` are the target *client* size; 0.0 means "keep the
/// current client size" for that axis. The outer size used for centering
/// adds the window's decoration delta (border box minus client box), and
/// the resulting origin is `((sw − nw) / 2, (sh − nh) / 2)` against the
/// screen's usable frame. Exactly one move request is issued, in
/// client-box coordinates.
///
/// A window larger than the screen gets a negative origin — no clamping
/// happens here; hosts may clamp internally.
pub fn move_center(host: &mut dyn WindowHost, width: f32, height: f32) -> Result<()> {
    let border = host.box_dimension(BoxKind::Border)?;
    let client = host.box_dimension(BoxKind::Client)?;

    let width = if width == 0.0 { client.x } else { width };
    let height = if height == 0.0 { client.y } else { height };

    // Decoration delta: how much the frame adds around the client area.
    let outer_w = width + (border.x - client.x);
    let outer_h = height + (border.y - client.y);

    let screen = host.screen_dimension()?;
    let left = (screen.x - outer_w) / 2.0;
    let top = (screen.y - outer_h) / 2.0;

    host.move_window(left, top, Vec2::new(width, height))
}
