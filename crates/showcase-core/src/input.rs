//! Input staging between frames.
//!
//! Continuous signals (pointer, scroll) are kept as an always-current snapshot
//! where the last write wins. Discrete signals (clicks, keys, drag edges) go
//! into a bounded inbox that the frame orchestrator drains once per tick.

use crate::constants::{CLICK_DRAG_TOLERANCE, INBOX_CAPACITY};
use glam::Vec2;
use smallvec::SmallVec;

/// Pointer position in normalized device coordinates, both axes in [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc_x: f32,
    pub ndc_y: f32,
}

impl PointerState {
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.ndc_x, self.ndc_y)
    }
}

/// Scroll progress through the page. Only `raw` is stored; the eased value is
/// always derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw: f32,
}

impl ScrollState {
    #[inline]
    pub fn eased(&self) -> f32 {
        ease_in_out(self.raw)
    }
}

/// Symmetric ease-in/ease-out: `2t²` on the first half, mirrored on the second.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Keys the showcase reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotKey {
    HeroView,
}

impl HotKey {
    /// Map a DOM/winit logical key string to a hot key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "h" | "H" => Some(HotKey::HeroView),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown,
    PointerUp,
    Click,
    DoubleClick,
    Key(HotKey),
}

#[derive(Default)]
pub struct InputState {
    pub pointer: PointerState,
    pub scroll: ScrollState,
    inbox: SmallVec<[InputEvent; INBOX_CAPACITY]>,
    dropped: usize,
    button_down: bool,
    press_origin: Vec2,
    press_travel: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport_w: f32,
        viewport_h: f32,
    ) {
        let w = viewport_w.max(1.0);
        let h = viewport_h.max(1.0);
        self.pointer = PointerState {
            ndc_x: ((client_x / w) * 2.0 - 1.0).clamp(-1.0, 1.0),
            ndc_y: (-(client_y / h) * 2.0 + 1.0).clamp(-1.0, 1.0),
        };
        if self.button_down {
            let travel = self.pointer.as_vec2().distance(self.press_origin);
            self.press_travel = self.press_travel.max(travel);
        }
    }

    pub fn on_scroll(&mut self, scroll_top: f32, scroll_height: f32, viewport_h: f32) {
        let range = (scroll_height - viewport_h).max(1.0);
        self.scroll.raw = clamp01(scroll_top / range);
    }

    /// Queue a key press. Auto-repeat is ignored so one physical press fires once.
    pub fn on_key_down(&mut self, key: &str, repeat: bool) {
        if repeat {
            return;
        }
        if let Some(k) = HotKey::from_key(key) {
            self.push(InputEvent::Key(k));
        }
    }

    pub fn on_pointer_down(&mut self) {
        self.button_down = true;
        self.press_origin = self.pointer.as_vec2();
        self.press_travel = 0.0;
        self.push(InputEvent::PointerDown);
    }

    pub fn on_pointer_up(&mut self) {
        self.button_down = false;
        self.push(InputEvent::PointerUp);
    }

    /// Queue a click unless the press turned into a drag.
    pub fn on_click(&mut self) {
        if self.press_travel > CLICK_DRAG_TOLERANCE {
            log::debug!("[input] click suppressed after drag ({:.3})", self.press_travel);
            self.press_travel = 0.0;
            return;
        }
        self.push(InputEvent::Click);
    }

    pub fn on_double_click(&mut self) {
        self.push(InputEvent::DoubleClick);
    }

    /// Number of events discarded because the inbox was full.
    pub fn dropped_events(&self) -> usize {
        self.dropped
    }

    pub fn pending(&self) -> &[InputEvent] {
        &self.inbox
    }

    /// Take every queued event in arrival order.
    pub fn drain(&mut self) -> SmallVec<[InputEvent; INBOX_CAPACITY]> {
        std::mem::take(&mut self.inbox)
    }

    fn push(&mut self, ev: InputEvent) {
        if self.inbox.len() >= INBOX_CAPACITY {
            self.dropped += 1;
            log::warn!("[input] inbox full, dropping {:?}", ev);
            return;
        }
        self.inbox.push(ev);
    }
}
