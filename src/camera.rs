use crate::constants::{CAMERA_LOCAL_Z, PARALLAX_RATE, SECTION_SPACING};
use crate::state::PointerOffset;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera. Fixed local placement inside the rig;
/// only the aspect ratio changes after construction (on resize).
#[derive(Clone, Debug)]
pub struct Camera {
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub local_z: f32,
}

impl Camera {
    pub fn new(aspect: f32, fovy_radians: f32, znear: f32, zfar: f32) -> Self {
        Self {
            aspect,
            fovy_radians,
            znear,
            zfar,
            local_z: CAMERA_LOCAL_Z,
        }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width.max(1.0) / height.max(1.0);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
}

/// Two-level camera transform: the outer rig carries scroll-follow translation
/// and smoothed parallax; the inner camera sits at a fixed local z. Keeping
/// the levels separate lets the direct scroll mapping and the lagging parallax
/// compose without interfering.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    /// Smoothed parallax offset, eased toward the pointer each frame.
    pub parallax: Vec2,
    /// Direct scroll-follow vertical translation (world units).
    pub scroll_y: f32,
}

impl CameraRig {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            parallax: Vec2::ZERO,
            scroll_y: 0.0,
        }
    }

    /// Tie vertical position to scroll distance: one viewport height of scroll
    /// descends exactly one section spacing. Direct assignment, so this is
    /// frame-rate independent by construction.
    pub fn follow_scroll(&mut self, raw_offset: f32, viewport_height: f32) {
        self.scroll_y = -(raw_offset / viewport_height.max(1.0)) * SECTION_SPACING;
    }

    /// Exponentially ease the parallax offset toward the pointer (inverted on
    /// the vertical axis). The blend factor scales with dt so the lag has a
    /// constant time constant regardless of frame rate.
    pub fn ease_parallax(&mut self, pointer: PointerOffset, dt_sec: f32) {
        let target = Vec2::new(pointer.x, -pointer.y);
        let alpha = (PARALLAX_RATE * dt_sec).min(1.0);
        self.parallax += (target - self.parallax) * alpha;
    }

    /// World-space eye position: rig translation plus the camera's local z.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.parallax.x,
            self.scroll_y + self.parallax.y,
            self.camera.local_z,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        let target = Vec3::new(eye.x, eye.y, eye.z - 1.0);
        Mat4::look_at_rh(eye, target, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }
}
