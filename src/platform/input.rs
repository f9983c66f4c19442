//! Zoom gesture guards
//!
//! Mobile browsers zoom on a quick double tap and desktop browsers zoom on a
//! trackpad pinch, which arrives as `wheel` events with `ctrlKey` set. Both
//! get in the way of rapid answer input, so both are suppressed.

/// Tracks `touchend` timing to detect double taps
#[derive(Debug, Clone)]
pub struct DoubleTapGuard {
    /// Max gap (ms, inclusive) between two taps treated as a double tap
    window_ms: f64,
    /// Timestamp (ms) of the previous `touchend`
    last_touch_end: Option<f64>,
}

impl DoubleTapGuard {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_touch_end: None,
        }
    }

    /// Record a `touchend` at `now_ms`; returns true if it should be prevented
    pub fn on_touch_end(&mut self, now_ms: f64) -> bool {
        let block = self
            .last_touch_end
            .map(|last| now_ms - last <= self.window_ms)
            .unwrap_or(false);
        self.last_touch_end = Some(now_ms);
        block
    }
}

/// Whether a `wheel` event is a pinch-zoom gesture that should be prevented
#[inline]
pub fn wheel_zoom_blocked(ctrl_key: bool) -> bool {
    ctrl_key
}

/// Attach both guards to the document (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn install_zoom_guards(
    document: &web_sys::Document,
    window_ms: f64,
) -> Result<(), crate::AppError> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, TouchEvent, WheelEvent};

    // Non-passive so preventDefault is honoured
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    // Double tap
    {
        let guard = Rc::new(RefCell::new(DoubleTapGuard::new(window_ms)));
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            if guard.borrow_mut().on_touch_end(js_sys::Date::now()) {
                event.prevent_default();
            }
        });
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchend",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| crate::AppError::Dom(format!("touchend listener: {:?}", e)))?;
        closure.forget();
    }

    // Trackpad pinch
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: WheelEvent| {
            if wheel_zoom_blocked(event.ctrl_key()) {
                event.prevent_default();
            }
        });
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| crate::AppError::Dom(format!("wheel listener: {:?}", e)))?;
        closure.forget();
    }

    log::debug!("Zoom guards installed (double tap window {}ms)", window_ms);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tap_never_blocked() {
        let mut guard = DoubleTapGuard::new(300.0);
        assert!(!guard.on_touch_end(0.0));
    }

    #[test]
    fn test_double_tap_within_window_blocked() {
        let mut guard = DoubleTapGuard::new(300.0);
        assert!(!guard.on_touch_end(1_000.0));
        assert!(guard.on_touch_end(1_150.0));
        // Boundary is inclusive
        assert!(guard.on_touch_end(1_450.0));
    }

    #[test]
    fn test_slow_taps_not_blocked() {
        let mut guard = DoubleTapGuard::new(300.0);
        assert!(!guard.on_touch_end(1_000.0));
        assert!(!guard.on_touch_end(1_301.0));
        assert!(!guard.on_touch_end(2_000.0));
    }

    #[test]
    fn test_blocked_tap_still_updates_timestamp() {
        let mut guard = DoubleTapGuard::new(300.0);
        guard.on_touch_end(0.0);
        assert!(guard.on_touch_end(250.0));
        // Measured from the blocked tap, not the first one
        assert!(guard.on_touch_end(500.0));
    }

    #[test]
    fn test_wheel_blocked_only_with_ctrl() {
        assert!(wheel_zoom_blocked(true));
        assert!(!wheel_zoom_blocked(false));
    }
}
