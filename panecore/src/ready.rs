//! Deferred ready callback
//!
//! Runs a callback once the host's window handle has had a moment to
//! finish constructing. There is no readiness predicate — the helper
//! waits one short timer tick and assumes the window is usable, which is
//! the contract the apps rely on.

use std::time::Duration;

use crate::host::{Result, WindowHost};

/// Delay before the ready callback fires.
pub const READY_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Invoke `on_ready` with the host exactly once, after one
/// [`READY_POLL_INTERVAL`] tick.
///
/// The repeating timer cancels itself on its first fire, so later ticks
/// can never re-invoke the callback. The timer is internal — callers get
/// no handle and cannot cancel a pending callback. Panics from
/// `on_ready` are not caught; they propagate under whatever policy the
/// host applies to timer callbacks.
pub fn ready<F>(host: &mut dyn WindowHost, on_ready: F) -> Result<()>
where
    F: FnOnce(&mut dyn WindowHost) + 'static,
{
    let mut pending = Some(on_ready);
    host.start_timer(
        READY_POLL_INTERVAL,
        Box::new(move |host, id| {
            host.cancel_timer(id);
            if let Some(f) = pending.take() {
                f(host);
            }
        }),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeHost;
    use crate::host::BoxKind;
    use egui::vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fires_exactly_once() {
        let mut host = FakeHost::new();
        let count = Rc::new(RefCell::new(0u32));
        let seen = Rc::clone(&count);

        ready(&mut host, move |_| *seen.borrow_mut() += 1).unwrap();
        assert_eq!(*count.borrow(), 0, "must not fire before the first tick");
        assert_eq!(host.active_timers(), 1);

        host.tick();
        assert_eq!(*count.borrow(), 1);
        assert_eq!(host.active_timers(), 0, "timer cancels itself on first fire");

        // Extra ticks are no-ops once the timer is cancelled.
        host.tick();
        host.tick();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_callback_receives_the_host() {
        let mut host = FakeHost::new();
        host.client = vec2(640.0, 480.0);
        let seen = Rc::new(RefCell::new(None));
        let out = Rc::clone(&seen);

        ready(&mut host, move |h| {
            *out.borrow_mut() = Some(h.box_dimension(BoxKind::Client).unwrap());
        })
        .unwrap();
        host.tick();

        assert_eq!(*seen.borrow(), Some(vec2(640.0, 480.0)));
    }

    #[test]
    fn test_uses_poll_interval() {
        let mut host = FakeHost::new();
        ready(&mut host, |_| {}).unwrap();
        assert_eq!(host.started_intervals(), vec![READY_POLL_INTERVAL]);
    }
}
