// Host-side tests driving the full per-frame update deterministically.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod state {
    include!("../src/state.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}
mod scene {
    include!("../src/scene.rs");
}
mod tween {
    include!("../src/tween.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod update {
    include!("../src/update.rs");
}

use camera::{Camera, CameraRig};
use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::Scene;
use state::{AppState, ViewportSize};
use update::{advance_frame, TweenSet};

struct World {
    state: AppState,
    scene: Scene,
    rig: CameraRig,
    tweens: TweenSet,
}

impl World {
    fn new() -> Self {
        let viewport = ViewportSize {
            width: 1200.0,
            height: 800.0,
        };
        let mut rng = StdRng::seed_from_u64(7);
        Self {
            state: AppState::new(viewport),
            scene: Scene::new(&mut rng, viewport.width, [1.0, 0.93, 0.93]),
            rig: CameraRig::new(Camera::new(
                1200.0 / 800.0,
                CAMERA_FOV_DEG.to_radians(),
                CAMERA_ZNEAR,
                CAMERA_ZFAR,
            )),
            tweens: TweenSet::new(),
        }
    }

    fn run(&mut self, seconds: f32, steps: usize) {
        let dt = seconds / steps as f32;
        for _ in 0..steps {
            advance_frame(
                &self.state,
                &mut self.scene,
                &mut self.rig,
                &mut self.tweens,
                dt,
            );
        }
    }
}

#[test]
fn idle_world_only_spins() {
    let mut w = World::new();
    w.run(5.0, 300);

    assert_eq!(w.rig.scroll_y, 0.0);
    assert!(w.rig.parallax.length() < 1e-6);
    assert_eq!(w.tweens.active_count(), 0);
    for mesh in &w.scene.meshes {
        assert!((mesh.rotation.x - IDLE_SPIN_X_PER_SEC * 5.0).abs() < 1e-3);
        assert!((mesh.rotation.y - IDLE_SPIN_Y_PER_SEC * 5.0).abs() < 1e-3);
        assert_eq!(mesh.rotation.z, 0.0);
    }
}

#[test]
fn scroll_crossing_triggers_one_tween_and_moves_the_camera() {
    let mut w = World::new();

    // Repeated events inside section 0: nothing fires
    assert_eq!(w.state.apply_scroll(100.0), None);
    assert_eq!(w.state.apply_scroll(300.0), None);
    assert_eq!(w.tweens.active_count(), 0);

    // Crossing into section 1 fires exactly once
    if let Some(section) = w.state.apply_scroll(800.0) {
        w.tweens.trigger(section);
    }
    assert_eq!(w.state.apply_scroll(820.0), None);
    assert_eq!(w.tweens.active_count(), 1);

    w.run(0.1, 6);
    assert_eq!(w.rig.scroll_y, -(820.0 / 800.0) * SECTION_SPACING);
}

#[test]
fn completed_section_tween_adds_exact_deltas_on_top_of_spin() {
    let mut w = World::new();
    if let Some(section) = w.state.apply_scroll(800.0) {
        w.tweens.trigger(section);
    }

    // Run past the tween duration in small frames
    let total = TWEEN_DURATION_SEC + 1.0;
    w.run(total, 600);
    assert_eq!(w.tweens.active_count(), 0);

    let kicked = &w.scene.meshes[1];
    assert!((kicked.rotation.x - (IDLE_SPIN_X_PER_SEC * total + TWEEN_DELTA_X)).abs() < 1e-2);
    assert!((kicked.rotation.y - (IDLE_SPIN_Y_PER_SEC * total + TWEEN_DELTA_Y)).abs() < 1e-2);
    assert!((kicked.rotation.z - TWEEN_DELTA_Z).abs() < 1e-2);

    // Untouched meshes keep spinning only
    for other in [&w.scene.meshes[0], &w.scene.meshes[2]] {
        assert!((other.rotation.x - IDLE_SPIN_X_PER_SEC * total).abs() < 1e-2);
        assert_eq!(other.rotation.z, 0.0);
    }
}

#[test]
fn spin_and_tween_commute() {
    // Same inputs, different interleavings of the additive updates must land
    // on the same rotation.
    let mut a = World::new();
    if let Some(s) = a.state.apply_scroll(800.0) {
        a.tweens.trigger(s);
    }
    a.run(3.0, 300);

    let mut b = World::new();
    if let Some(s) = b.state.apply_scroll(800.0) {
        b.tweens.trigger(s);
    }
    b.run(3.0, 150);

    let ra = a.scene.meshes[1].rotation;
    let rb = b.scene.meshes[1].rotation;
    assert!((ra - rb).length() < 1e-2);
}

#[test]
fn fast_scroll_past_the_end_stays_on_the_last_mesh() {
    let mut w = World::new();
    if let Some(section) = w.state.apply_scroll(80_000.0) {
        w.tweens.trigger(section);
    }
    assert_eq!(w.state.scroll.section, SECTION_COUNT - 1);
    assert_eq!(w.tweens.active_count(), 1);

    w.run(TWEEN_DURATION_SEC + 0.1, 200);
    let last = &w.scene.meshes[SECTION_COUNT - 1];
    assert!(last.rotation.z > TWEEN_DELTA_Z - 1e-2);
}

#[test]
fn parallax_follows_pointer_during_full_frames() {
    let mut w = World::new();
    w.state.apply_pointer(1200.0, 0.0);
    assert_eq!(w.state.pointer.x, 0.5);
    assert_eq!(w.state.pointer.y, -0.5);

    w.run(5.0, 300);
    // Inverted on the vertical axis
    assert!((w.rig.parallax.x - 0.5).abs() < 1e-3);
    assert!((w.rig.parallax.y - 0.5).abs() < 1e-3);
}

#[test]
fn tween_triggering_out_of_range_is_ignored() {
    let mut w = World::new();
    w.tweens.trigger(99);
    assert_eq!(w.tweens.active_count(), 0);
}
