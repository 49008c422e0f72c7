//! Frame clock.
//!
//! One `tick` per frame. Elapsed time is monotonic from clock creation and the
//! per-frame delta is clamped so a suspended tab or a stalled window does not
//! produce a single enormous simulation step on resume.

use instant::Instant;
use std::time::Duration;

/// Time inputs for one frame; read-only to every consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeSample {
    pub elapsed_ms: f64,
    pub delta_seconds: f32,
}

impl TimeSample {
    pub fn new(elapsed_ms: f64, delta_seconds: f32) -> Self {
        Self {
            elapsed_ms,
            delta_seconds,
        }
    }

    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_ms * 0.001
    }

    #[inline]
    pub fn delta_ms(&self) -> f32 {
        self.delta_seconds * 1000.0
    }

    /// `sin(elapsed_ms * freq)` evaluated in f64 so long sessions keep precision.
    #[inline]
    pub fn sin_ms(&self, freq: f64) -> f32 {
        (self.elapsed_ms * freq).sin() as f32
    }

    #[inline]
    pub fn cos_ms(&self, freq: f64) -> f32 {
        (self.elapsed_ms * freq).cos() as f32
    }
}

pub struct Clock {
    start: Instant,
    last: Instant,
    max_delta: Duration,
}

impl Clock {
    pub fn new(max_delta_seconds: f32) -> Self {
        Self::starting_at(Instant::now(), max_delta_seconds)
    }

    pub fn starting_at(start: Instant, max_delta_seconds: f32) -> Self {
        Self {
            start,
            last: start,
            max_delta: Duration::from_secs_f32(max_delta_seconds.max(0.0)),
        }
    }

    pub fn tick(&mut self) -> TimeSample {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> TimeSample {
        // Never step backwards even if the host hands us a stale instant.
        let now = if now < self.last { self.last } else { now };
        let delta = (now - self.last).min(self.max_delta);
        self.last = now;
        TimeSample {
            elapsed_ms: (now - self.start).as_secs_f64() * 1000.0,
            delta_seconds: delta.as_secs_f32(),
        }
    }
}
