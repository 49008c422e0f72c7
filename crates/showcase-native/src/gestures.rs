// Browser-style gestures the window system does not provide: double-click
// pairing and a scrollable page. Pure so host tests can include this file.

use std::time::{Duration, Instant};

pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);
pub const LINE_HEIGHT_PX: f32 = 40.0;
pub const SCROLL_PAGES: f32 = 3.0; // virtual page height in viewports

/// Pairs consecutive clicks into double-clicks.
#[derive(Default)]
pub struct ClickTimer {
    last: Option<Instant>,
}

impl ClickTimer {
    /// Register a click at `now`; true when it completes a double-click.
    pub fn click(&mut self, now: Instant) -> bool {
        match self.last.take() {
            Some(prev) if now.saturating_duration_since(prev) <= DOUBLE_CLICK_WINDOW => true,
            _ => {
                self.last = Some(now);
                false
            }
        }
    }
}

/// Scroll offset over a virtual page `SCROLL_PAGES` viewports tall, driven
/// by the mouse wheel.
pub struct VirtualScroll {
    top: f32,
    viewport_h: f32,
}

impl VirtualScroll {
    pub fn new(viewport_h: f32) -> Self {
        Self {
            top: 0.0,
            viewport_h: viewport_h.max(1.0),
        }
    }

    pub fn content_height(&self) -> f32 {
        self.viewport_h * SCROLL_PAGES
    }

    fn max_top(&self) -> f32 {
        (self.content_height() - self.viewport_h).max(0.0)
    }

    /// Positive `dy_px` scrolls down the page.
    pub fn scroll_by(&mut self, dy_px: f32) {
        self.top = (self.top + dy_px).clamp(0.0, self.max_top());
    }

    /// Keep the same relative position when the window height changes.
    pub fn set_viewport(&mut self, viewport_h: f32) {
        let frac = if self.max_top() > 0.0 {
            self.top / self.max_top()
        } else {
            0.0
        };
        self.viewport_h = viewport_h.max(1.0);
        self.top = frac * self.max_top();
    }

    /// `(scroll_top, scroll_height, viewport_height)` as a page reports them.
    pub fn metrics(&self) -> (f32, f32, f32) {
        (self.top, self.content_height(), self.viewport_h)
    }
}

/// Wheel line steps to page pixels; wheel-up (positive) scrolls up.
#[inline]
pub fn wheel_lines_to_pixels(lines_y: f32) -> f32 {
    -lines_y * LINE_HEIGHT_PX
}
