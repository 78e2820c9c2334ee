use crate::constants::{TWEEN_DELTA_X, TWEEN_DELTA_Y, TWEEN_DELTA_Z, TWEEN_DURATION_SEC};
use glam::Vec3;

/// Cubic ease-in-out timing curve on [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// A time-boxed, eased, purely additive rotation animation.
///
/// The tween never owns the rotation it animates; each `advance` returns the
/// increment for that step and the caller adds it onto the mesh's single
/// authoritative rotation field. The idle spin adds onto the same field, and
/// both stay commutative additions by contract.
#[derive(Clone, Debug)]
pub struct RotationTween {
    elapsed: f32,
    duration: f32,
    total: Vec3,
    applied: Vec3,
}

impl RotationTween {
    pub fn new(total: Vec3, duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(f32::EPSILON),
            total,
            applied: Vec3::ZERO,
        }
    }

    /// The fixed rotation kick fired when the scroll crosses into a section.
    pub fn section_spin() -> Self {
        Self::new(
            Vec3::new(TWEEN_DELTA_X, TWEEN_DELTA_Y, TWEEN_DELTA_Z),
            TWEEN_DURATION_SEC,
        )
    }

    /// Advance by `dt_sec` and return the additive rotation increment for this
    /// step. The final step tops up to the exact total, so the cumulative sum
    /// over a completed tween carries no float drift.
    pub fn advance(&mut self, dt_sec: f32) -> Vec3 {
        if self.finished() {
            return Vec3::ZERO;
        }
        self.elapsed = (self.elapsed + dt_sec.max(0.0)).min(self.duration);
        let target = if self.elapsed >= self.duration {
            self.total
        } else {
            self.total * ease_in_out_cubic(self.elapsed / self.duration)
        };
        let step = target - self.applied;
        self.applied = target;
        step
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    pub fn applied(&self) -> Vec3 {
        self.applied
    }
}
