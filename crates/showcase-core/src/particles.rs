//! Snow, mist and sparkle point fields.
//!
//! Positions live in flat `[x, y, z, x, y, z, ...]` buffers that are mutated in
//! place every frame and flagged dirty for the renderer. Slots are allocated
//! once and recycled forever: a particle that leaves the volume is moved back
//! in, never destroyed.

use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

/// Snap a coordinate that left `[-limit, limit]` to the opposite boundary.
/// In-range coordinates are returned unchanged.
#[inline]
pub fn wrap_coordinate(c: f32, limit: f32) -> f32 {
    if c.abs() > limit {
        -c.signum() * limit
    } else {
        c
    }
}

/// Fixed-size position buffer shared by all three fields.
pub struct PointBuffer {
    positions: Vec<f32>,
    dirty: bool,
}

impl PointBuffer {
    fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            dirty: true,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Vec3 {
        let i3 = slot * 3;
        Vec3::new(
            self.positions[i3],
            self.positions[i3 + 1],
            self.positions[i3 + 2],
        )
    }

    #[inline]
    pub fn set(&mut self, slot: usize, p: Vec3) {
        let i3 = slot * 3;
        self.positions[i3] = p.x;
        self.positions[i3 + 1] = p.y;
        self.positions[i3 + 2] = p.z;
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    /// Return the dirty flag and clear it; renderers call this before re-uploading.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn push(&mut self, p: Vec3) {
        self.positions.extend_from_slice(&[p.x, p.y, p.z]);
    }
}

#[inline]
fn symmetric(rng: &mut StdRng, half: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * half
}

pub struct SnowField {
    pub points: PointBuffer,
    velocities: Vec<Vec3>,
    rng: StdRng,
}

impl SnowField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut points = PointBuffer::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        let y_span = SNOW_RESPAWN_HEIGHT - SNOW_RESPAWN_FLOOR;
        for _ in 0..count {
            points.push(Vec3::new(
                symmetric(&mut rng, SNOW_EXTENT),
                rng.gen::<f32>() * y_span + SNOW_RESPAWN_FLOOR,
                symmetric(&mut rng, SNOW_EXTENT),
            ));
            velocities.push(Vec3::new(
                symmetric(&mut rng, SNOW_DRIFT_MAX),
                -(rng.gen::<f32>() * SNOW_FALL_SPAN + SNOW_FALL_MIN),
                symmetric(&mut rng, SNOW_DRIFT_MAX),
            ));
        }
        Self {
            points,
            velocities,
            rng,
        }
    }

    /// Place a slot explicitly; used to stage edge cases.
    pub fn place(&mut self, slot: usize, position: Vec3, velocity: Vec3) {
        self.points.set(slot, position);
        self.velocities[slot] = velocity;
        self.points.dirty = true;
    }

    pub fn velocity(&self, slot: usize) -> Vec3 {
        self.velocities[slot]
    }

    /// Advance one frame: integrate, respawn, then wrap x/z.
    pub fn step(&mut self, elapsed_seconds: f64, scroll_eased: f32) {
        let speed = 1.0 + SNOW_SCROLL_SPEEDUP * scroll_eased;
        for (i, v) in self.velocities.iter().enumerate() {
            let phase = elapsed_seconds + i as f64;
            let wind = Vec3::new(
                phase.sin() as f32 * SNOW_WIND,
                0.0,
                phase.cos() as f32 * SNOW_WIND,
            );
            let mut p = self.points.get(i) + (*v + wind) * speed;

            if p.y < SNOW_RESPAWN_FLOOR {
                p.y = SNOW_RESPAWN_HEIGHT;
                p.x = symmetric(&mut self.rng, SNOW_EXTENT);
                p.z = symmetric(&mut self.rng, SNOW_EXTENT);
            }

            p.x = wrap_coordinate(p.x, SNOW_EXTENT);
            p.z = wrap_coordinate(p.z, SNOW_EXTENT);
            self.points.set(i, p);
        }
        self.points.dirty = true;
    }
}

pub struct MistField {
    pub points: PointBuffer,
    velocities: Vec<Vec3>,
}

impl MistField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut points = PointBuffer::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(Vec3::new(
                symmetric(&mut rng, MIST_EXTENT),
                rng.gen::<f32>() * MIST_Y_SPAN + MIST_Y_MIN,
                symmetric(&mut rng, MIST_EXTENT),
            ));
            velocities.push(Vec3::new(
                symmetric(&mut rng, MIST_DRIFT_MAX),
                0.0,
                symmetric(&mut rng, MIST_DRIFT_MAX),
            ));
        }
        Self { points, velocities }
    }

    pub fn place(&mut self, slot: usize, position: Vec3, velocity: Vec3) {
        self.points.set(slot, position);
        self.velocities[slot] = Vec3::new(velocity.x, 0.0, velocity.z);
        self.points.dirty = true;
    }

    /// Horizontal drift with x/z wraparound. No time or scroll coupling.
    pub fn step(&mut self) {
        for (i, v) in self.velocities.iter().enumerate() {
            let mut p = self.points.get(i);
            p.x = wrap_coordinate(p.x + v.x, MIST_EXTENT);
            p.z = wrap_coordinate(p.z + v.z, MIST_EXTENT);
            self.points.set(i, p);
        }
        self.points.dirty = true;
    }
}

/// Static glints; only their shared opacity animates (see lighting).
pub struct SparkleField {
    pub points: PointBuffer,
}

impl SparkleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut points = PointBuffer::with_capacity(count);
        for _ in 0..count {
            points.push(Vec3::new(
                symmetric(&mut rng, SPARKLE_EXTENT),
                rng.gen::<f32>() * SPARKLE_Y_SPAN + SPARKLE_Y_MIN,
                symmetric(&mut rng, SPARKLE_EXTENT),
            ));
        }
        Self { points }
    }
}

/// Derive a per-field seed so the three layouts are independent.
#[inline]
pub fn field_seed(seed: u64, field: u64) -> u64 {
    seed ^ field.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
