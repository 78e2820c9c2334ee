use crate::camera::CameraRig;
use crate::constants::SECTION_COUNT;
use crate::scene::Scene;
use crate::state::AppState;
use crate::tween::RotationTween;

/// Live section tweens, grouped per mesh. Re-crossing a boundary while a
/// tween is still running stacks a second one; all increments are additive so
/// order never matters.
pub struct TweenSet {
    slots: Vec<Vec<RotationTween>>,
}

impl TweenSet {
    pub fn new() -> Self {
        Self {
            slots: (0..SECTION_COUNT).map(|_| Vec::new()).collect(),
        }
    }

    pub fn trigger(&mut self, section: usize) {
        if let Some(slot) = self.slots.get_mut(section) {
            slot.push(RotationTween::section_spin());
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    fn advance(&mut self, scene: &mut Scene, dt_sec: f32) {
        for (mesh, slot) in scene.meshes.iter_mut().zip(&mut self.slots) {
            for tween in slot.iter_mut() {
                mesh.rotation += tween.advance(dt_sec);
            }
            slot.retain(|t| !t.finished());
        }
    }
}

/// One frame of scene arithmetic, platform-free so tests can run finite
/// deterministic iterations:
/// 1. camera rig follows the scroll offset directly,
/// 2. parallax eases toward the pointer,
/// 3. meshes idle-spin,
/// 4. live section tweens add their eased increments.
pub fn advance_frame(
    state: &AppState,
    scene: &mut Scene,
    rig: &mut CameraRig,
    tweens: &mut TweenSet,
    dt_sec: f32,
) {
    rig.follow_scroll(state.scroll.raw_offset, state.viewport.height);
    rig.ease_parallax(state.pointer, dt_sec);
    scene.idle_spin(dt_sec);
    tweens.advance(scene, dt_sec);
}
