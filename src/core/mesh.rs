use glam::{Mat3, Mat4, Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use super::profile::outward_normal;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list with per-vertex normals.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let idx = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(position, normal));
        idx
    }

    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.vertices.len() as u32;
        for c in corners {
            self.push(c, normal);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Transform positions by `m` and normals by its inverse transpose.
    pub fn apply(&mut self, m: Mat4) {
        let normal_m = Mat3::from_mat4(m).inverse().transpose();
        for v in &mut self.vertices {
            let p = m.transform_point3(Vec3::from(v.position));
            let n = (normal_m * Vec3::from(v.normal)).normalize_or_zero();
            v.position = p.to_array();
            v.normal = n.to_array();
        }
    }

    pub fn transformed(mut self, m: Mat4) -> Self {
        self.apply(m);
        self
    }

    /// Axis-aligned bounds as `(min, max)`; `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Revolve a `(radius, height)` profile around the Y axis.
///
/// Produces `profile.len() * (segments + 1)` vertices; the seam column is
/// duplicated so each ring closes on itself. Normals come from the profile
/// tangent (central difference, one-sided at the ends).
pub fn lathe(profile: &[Vec2], segments: usize) -> MeshData {
    let mut mesh = MeshData::new();
    let segments = segments.max(3);
    let n = profile.len();
    if n < 2 {
        return mesh;
    }
    for i in 0..n {
        let prev = profile[i.saturating_sub(1)];
        let next = profile[(i + 1).min(n - 1)];
        let n2 = outward_normal(next - prev);
        let p = profile[i];
        for j in 0..=segments {
            let theta = j as f32 / segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            mesh.push(
                Vec3::new(p.x * s, p.y, p.x * c),
                Vec3::new(n2.x * s, n2.y, n2.x * c),
            );
        }
    }
    let stride = (segments + 1) as u32;
    for i in 0..(n - 1) as u32 {
        for j in 0..segments as u32 {
            let a = i * stride + j;
            let b = a + stride;
            let c = b + 1;
            let d = a + 1;
            mesh.indices.extend_from_slice(&[a, d, c, a, c, b]);
        }
    }
    mesh
}

/// Upper half of an ellipse from `(rx, 0)` to `(-rx, 0)`, counter-clockwise.
pub fn half_ellipse(rx: f32, ry: f32, steps: usize) -> Vec<Vec2> {
    let steps = steps.max(2);
    (0..=steps)
        .map(|k| {
            let phi = k as f32 / steps as f32 * PI;
            Vec2::new(rx * phi.cos(), ry * phi.sin())
        })
        .collect()
}

/// Extrude a convex, counter-clockwise outline along Z, centred on z = 0.
///
/// Caps are fanned from the first outline point; side walls are flat shaded.
pub fn extrude(outline: &[Vec2], depth: f32) -> MeshData {
    let mut mesh = MeshData::new();
    if outline.len() < 3 {
        return mesh;
    }
    let zf = depth * 0.5;
    let zb = -zf;

    let front: Vec<u32> = outline
        .iter()
        .map(|p| mesh.push(p.extend(zf), Vec3::Z))
        .collect();
    for k in 1..front.len() - 1 {
        mesh.indices
            .extend_from_slice(&[front[0], front[k], front[k + 1]]);
    }
    let back: Vec<u32> = outline
        .iter()
        .map(|p| mesh.push(p.extend(zb), Vec3::NEG_Z))
        .collect();
    for k in 1..back.len() - 1 {
        mesh.indices
            .extend_from_slice(&[back[0], back[k + 1], back[k]]);
    }

    for k in 0..outline.len() {
        let a = outline[k];
        let b = outline[(k + 1) % outline.len()];
        let edge = b - a;
        if edge.length_squared() < 1e-12 {
            continue;
        }
        let n = Vec2::new(edge.y, -edge.x).normalize().extend(0.0);
        mesh.push_quad([a.extend(zf), a.extend(zb), b.extend(zb), b.extend(zf)], n);
    }
    mesh
}

/// Axis-aligned box centred on the origin.
pub fn cuboid(size: Vec3) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::new();
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    for (n, u, v) in faces {
        let c = n * h;
        let du = u * h;
        let dv = v * h;
        mesh.push_quad([c - du - dv, c + du - dv, c + du + dv, c - du + dv], n);
    }
    mesh
}

/// Torus around the Y axis (ring in the XZ plane).
pub fn torus(radius: f32, tube: f32, ring_segments: usize, tube_segments: usize) -> MeshData {
    let mut mesh = MeshData::new();
    let rs = ring_segments.max(3);
    let ts = tube_segments.max(3);
    for i in 0..=rs {
        let u = i as f32 / rs as f32 * TAU;
        let (su, cu) = u.sin_cos();
        let center = Vec3::new(radius * cu, 0.0, radius * su);
        for j in 0..=ts {
            let v = j as f32 / ts as f32 * TAU;
            let (sv, cv) = v.sin_cos();
            let n = Vec3::new(cv * cu, sv, cv * su);
            mesh.push(center + n * tube, n);
        }
    }
    let stride = (ts + 1) as u32;
    for i in 0..rs as u32 {
        for j in 0..ts as u32 {
            let a = i * stride + j;
            let b = a + stride;
            mesh.indices
                .extend_from_slice(&[a, a + 1, b + 1, a, b + 1, b]);
        }
    }
    mesh
}
