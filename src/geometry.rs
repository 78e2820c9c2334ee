use std::f32::consts::PI;

/// Interleaved vertex: 32 bytes, position / normal / uv.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 24,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };

    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// CPU-side indexed triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// The three section primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    Sphere,
    Cone,
    TorusKnot,
}

impl GeometryKind {
    pub fn build(self) -> MeshData {
        match self {
            GeometryKind::Sphere => sphere(1.0, 32, 32),
            GeometryKind::Cone => cone(1.5, 2.0, 4),
            GeometryKind::TorusKnot => torus_knot(0.8, 0.35, 100, 16, 2, 3),
        }
    }
}

/// UV sphere centered at the origin.
pub fn sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::default();

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();

            mesh.vertices.push(Vertex::new(
                [x * radius, y * radius, z * radius],
                [x, y, z],
                [seg as f32 / segments as f32, ring as f32 / rings as f32],
            ));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            mesh.indices.push(current);
            mesh.indices.push(next);
            mesh.indices.push(current + 1);

            mesh.indices.push(current + 1);
            mesh.indices.push(next);
            mesh.indices.push(next + 1);
        }
    }

    mesh
}

/// Cone centered at the origin: apex at +height/2, capped base at -height/2.
/// Low radial counts (the landing scene uses 4) give the faceted look, so the
/// side normals are averaged per column rather than per face.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;
    // Slope of the side surface in the (radial, y) plane
    let slope = radius / height;

    // Side: one ring at the base plus a duplicated apex per column so each
    // column keeps its own normal and uv.
    for seg in 0..=radial_segments {
        let theta = 2.0 * PI * seg as f32 / radial_segments as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        let normal = normalize([cos_t, slope, sin_t]);

        mesh.vertices.push(Vertex::new(
            [0.0, half, 0.0],
            normal,
            [seg as f32 / radial_segments as f32, 0.0],
        ));
        mesh.vertices.push(Vertex::new(
            [radius * cos_t, -half, radius * sin_t],
            normal,
            [seg as f32 / radial_segments as f32, 1.0],
        ));
    }
    for seg in 0..radial_segments {
        let apex = seg * 2;
        let base = apex + 1;
        mesh.indices.push(apex);
        mesh.indices.push(base + 2);
        mesh.indices.push(base);
    }

    // Base cap, facing -Y
    let cap_center = mesh.vertices.len() as u32;
    mesh.vertices
        .push(Vertex::new([0.0, -half, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]));
    for seg in 0..=radial_segments {
        let theta = 2.0 * PI * seg as f32 / radial_segments as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        mesh.vertices.push(Vertex::new(
            [radius * cos_t, -half, radius * sin_t],
            [0.0, -1.0, 0.0],
            [cos_t * 0.5 + 0.5, sin_t * 0.5 + 0.5],
        ));
    }
    for seg in 0..radial_segments {
        mesh.indices.push(cap_center);
        mesh.indices.push(cap_center + 1 + seg);
        mesh.indices.push(cap_center + 2 + seg);
    }

    mesh
}

fn knot_point(u: f32, radius: f32, p: f32, q: f32) -> [f32; 3] {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    [
        radius * (2.0 + cs) * 0.5 * cu,
        radius * (2.0 + cs) * 0.5 * su,
        radius * qu_over_p.sin() * 0.5,
    ]
}

/// (p, q) torus knot swept with a circular tube, Frenet-style frame.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    let (pf, qf) = (p as f32, q as f32);

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * pf * 2.0 * PI;
        let p1 = knot_point(u, radius, pf, qf);
        let p2 = knot_point(u + 0.01, radius, pf, qf);

        // Approximate frame from neighboring points on the curve
        let tangent = sub(p2, p1);
        let mut normal = add(p2, p1);
        let binormal = normalize(cross(tangent, normal));
        normal = normalize(cross(binormal, tangent));

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * 2.0 * PI;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();

            let pos = [
                p1[0] + cx * normal[0] + cy * binormal[0],
                p1[1] + cx * normal[1] + cy * binormal[1],
                p1[2] + cx * normal[2] + cy * binormal[2],
            ];
            mesh.vertices.push(Vertex::new(
                pos,
                normalize(sub(pos, p1)),
                [
                    i as f32 / tubular_segments as f32,
                    j as f32 / radial_segments as f32,
                ],
            ));
        }
    }

    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = (radial_segments + 1) * (j - 1) + (i - 1);
            let b = (radial_segments + 1) * j + (i - 1);
            let c = (radial_segments + 1) * j + i;
            let d = (radial_segments + 1) * (j - 1) + i;

            mesh.indices.push(a);
            mesh.indices.push(b);
            mesh.indices.push(d);

            mesh.indices.push(b);
            mesh.indices.push(c);
            mesh.indices.push(d);
        }
    }

    mesh
}

#[inline]
fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt().max(1e-6);
    [v[0] / len, v[1] / len, v[2] / len]
}
