// Host-side tests for the snow, mist and sparkle fields.

use glam::Vec3;
use showcase_core::*;

#[test]
fn fields_spawn_inside_their_volumes() {
    let snow = SnowField::new(500, 7);
    assert_eq!(snow.points.len(), 500);
    for p in snow.points.iter() {
        assert!(p.x.abs() <= SNOW_EXTENT && p.z.abs() <= SNOW_EXTENT);
        assert!((SNOW_RESPAWN_FLOOR..=SNOW_RESPAWN_HEIGHT).contains(&p.y));
    }
    for i in 0..500 {
        let v = snow.velocity(i);
        assert!(v.y < 0.0, "snow must fall");
        assert!(v.x.abs() <= SNOW_DRIFT_MAX && v.z.abs() <= SNOW_DRIFT_MAX);
    }

    let mist = MistField::new(200, 7);
    for p in mist.points.iter() {
        assert!(p.x.abs() <= MIST_EXTENT && p.z.abs() <= MIST_EXTENT);
        assert!((MIST_Y_MIN..=MIST_Y_MIN + MIST_Y_SPAN).contains(&p.y));
    }

    let sparkles = SparkleField::new(100, 7);
    for p in sparkles.points.iter() {
        assert!(p.x.abs() <= SPARKLE_EXTENT && p.z.abs() <= SPARKLE_EXTENT);
    }
}

#[test]
fn same_seed_gives_same_layout() {
    let a = SnowField::new(64, 99);
    let b = SnowField::new(64, 99);
    assert_eq!(a.points.as_slice(), b.points.as_slice());
    let c = SnowField::new(64, 100);
    assert_ne!(a.points.as_slice(), c.points.as_slice());
}

#[test]
fn snowflake_below_floor_respawns_at_top() {
    let mut snow = SnowField::new(4, 1);
    snow.place(2, Vec3::new(3.0, -9.99, -4.0), Vec3::new(0.0, -0.05, 0.0));
    snow.step(0.0, 0.0);
    let p = snow.points.get(2);
    assert_eq!(p.y, SNOW_RESPAWN_HEIGHT);
    assert!(p.x.abs() <= SNOW_EXTENT && p.z.abs() <= SNOW_EXTENT);
}

#[test]
fn snow_wraps_horizontally() {
    let mut snow = SnowField::new(1, 1);
    snow.place(0, Vec3::new(49.999, 10.0, -49.999), Vec3::new(0.009, -0.02, -0.009));
    snow.step(0.0, 0.0);
    let p = snow.points.get(0);
    assert!(p.x < 0.0, "x should wrap to the negative side, got {}", p.x);
    assert!(p.z > 0.0, "z should wrap to the positive side, got {}", p.z);
}

#[test]
fn scroll_speeds_up_snowfall() {
    let mut slow = SnowField::new(1, 3);
    let mut fast = SnowField::new(1, 3);
    let start = Vec3::new(0.0, 20.0, 0.0);
    let v = Vec3::new(0.0, -0.05, 0.0);
    slow.place(0, start, v);
    fast.place(0, start, v);
    slow.step(0.0, 0.0);
    fast.step(0.0, 1.0);
    let dy_slow = start.y - slow.points.get(0).y;
    let dy_fast = start.y - fast.points.get(0).y;
    assert!((dy_fast / dy_slow - (1.0 + SNOW_SCROLL_SPEEDUP)).abs() < 1e-3);
}

#[test]
fn long_run_keeps_every_flake_in_bounds() {
    let mut snow = SnowField::new(300, 11);
    for frame in 0..2_000 {
        snow.step(frame as f64 / 60.0, 1.0);
    }
    for p in snow.points.iter() {
        assert!(p.x.abs() <= SNOW_EXTENT && p.z.abs() <= SNOW_EXTENT);
        assert!(p.y >= SNOW_RESPAWN_FLOOR - 0.1 && p.y <= SNOW_RESPAWN_HEIGHT);
    }
}

#[test]
fn mist_never_moves_vertically() {
    let mut mist = MistField::new(50, 5);
    let before: Vec<f32> = mist.points.iter().map(|p| p.y).collect();
    for _ in 0..5_000 {
        mist.step();
    }
    let after: Vec<f32> = mist.points.iter().map(|p| p.y).collect();
    assert_eq!(before, after);
    for p in mist.points.iter() {
        assert!(p.x.abs() <= MIST_EXTENT && p.z.abs() <= MIST_EXTENT);
    }
}

#[test]
fn wrap_coordinate_snaps_to_opposite_edge() {
    for c in [-50.0, -12.5, 0.0, 33.0, 50.0] {
        assert_eq!(wrap_coordinate(c, 50.0), c);
    }
    assert_eq!(wrap_coordinate(50.5, 50.0), -50.0);
    assert_eq!(wrap_coordinate(-50.5, 50.0), 50.0);
}

#[test]
fn step_marks_buffers_dirty_once() {
    let mut snow = SnowField::new(8, 2);
    snow.points.take_dirty();
    snow.step(0.0, 0.0);
    assert!(snow.points.take_dirty());
    assert!(!snow.points.take_dirty());
}
