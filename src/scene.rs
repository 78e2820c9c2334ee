use crate::constants::{
    IDLE_SPIN_X_PER_SEC, IDLE_SPIN_Y_PER_SEC, LAYOUT_BREAKPOINT_PX, PARTICLE_COUNT,
    PARTICLE_SPREAD, SECTION_COUNT, SECTION_SPACING, WIDE_LAYOUT_X,
};
use crate::geometry::GeometryKind;
use glam::Vec3;
use rand::Rng;

/// Texture group a section mesh draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialKind {
    Water,
    Stone,
    Lava,
}

/// One renderable scroll-section object. Built once; only `position.x` (via
/// the responsive layout) and `rotation` change afterwards.
#[derive(Clone, Debug)]
pub struct SectionMesh {
    pub geometry: GeometryKind,
    pub material: MaterialKind,
    pub position: Vec3,
    /// Single authoritative rotation. The idle spin and any live section
    /// tweens both add into this; the two must stay commutative additions.
    pub rotation: Vec3,
}

/// Fixed-size background point set, sampled once at startup across a vertical
/// band spanning all sections. Positions are never regenerated; only the tint
/// is runtime-configurable.
#[derive(Clone, Debug)]
pub struct ParticleCloud {
    pub positions: Vec<[f32; 3]>,
    pub tint: [f32; 3],
}

impl ParticleCloud {
    pub fn generate(rng: &mut impl Rng, tint: [f32; 3]) -> Self {
        let positions = (0..PARTICLE_COUNT)
            .map(|_| {
                [
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                    SECTION_SPACING * 0.5
                        - rng.gen::<f32>() * PARTICLE_SPREAD * SECTION_SPACING * 3.0,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                ]
            })
            .collect();
        Self { positions, tint }
    }
}

#[derive(Clone)]
pub struct Scene {
    pub meshes: [SectionMesh; SECTION_COUNT],
    pub particles: ParticleCloud,
}

impl Scene {
    /// Build the three stacked section meshes (sphere, cone, torus-knot) and
    /// the particle field, then place them for the given viewport width.
    pub fn new(rng: &mut impl Rng, viewport_width: f32, tint: [f32; 3]) -> Self {
        let build = |i: usize, geometry, material| SectionMesh {
            geometry,
            material,
            position: Vec3::new(0.0, -SECTION_SPACING * i as f32, 0.0),
            rotation: Vec3::ZERO,
        };
        let mut scene = Self {
            meshes: [
                build(0, GeometryKind::Sphere, MaterialKind::Lava),
                build(1, GeometryKind::Cone, MaterialKind::Stone),
                build(2, GeometryKind::TorusKnot, MaterialKind::Water),
            ],
            particles: ParticleCloud::generate(rng, tint),
        };
        scene.apply_layout(viewport_width);
        scene
    }

    /// Responsive breakpoint rule: narrow viewports stack the meshes on the
    /// center axis, wide viewports alternate them left and right. Pure
    /// function of the width; idempotent.
    pub fn apply_layout(&mut self, viewport_width: f32) {
        for (i, mesh) in self.meshes.iter_mut().enumerate() {
            mesh.position.x = if viewport_width <= LAYOUT_BREAKPOINT_PX {
                0.0
            } else {
                WIDE_LAYOUT_X[i]
            };
        }
    }

    /// Continuous per-frame idle rotation, independent of section tweens.
    pub fn idle_spin(&mut self, dt_sec: f32) {
        for mesh in &mut self.meshes {
            mesh.rotation.x += dt_sec * IDLE_SPIN_X_PER_SEC;
            mesh.rotation.y += dt_sec * IDLE_SPIN_Y_PER_SEC;
        }
    }
}
