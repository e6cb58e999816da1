use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::PI;

use super::constants::*;
use super::mesh::{cuboid, extrude, half_ellipse, lathe, torus, MeshData};
use super::profile::{surface_at, HELMET_PROFILE};
use super::rig::{Camera, LightRig, PointLight};

/// Which helmet a scene shows: the single hero or one gallery slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelmetVariant {
    Hero,
    Gallery { index: usize },
}

impl HelmetVariant {
    pub fn is_hero(self) -> bool {
        matches!(self, HelmetVariant::Hero)
    }

    pub fn color(self) -> u32 {
        match self {
            HelmetVariant::Hero => ACCENT,
            HelmetVariant::Gallery { index } => palette_color(index),
        }
    }

    /// Uniform scale applied to the unit helmet by the root transform.
    pub fn scale(self) -> f32 {
        match self {
            HelmetVariant::Hero => HERO_SCALE,
            HelmetVariant::Gallery { .. } => GALLERY_SCALE,
        }
    }

    pub fn camera(self) -> Camera {
        let z = match self {
            HelmetVariant::Hero => HERO_CAMERA_Z,
            HelmetVariant::Gallery { .. } => GALLERY_CAMERA_Z,
        };
        Camera::looking_at_origin(z, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn light_rig(self) -> LightRig {
        match self {
            HelmetVariant::Hero => LightRig {
                ambient_color: Vec3::ONE,
                ambient_intensity: HERO_AMBIENT,
                points: [
                    PointLight {
                        position: HERO_KEY_POS,
                        color: srgb_to_linear(ACCENT),
                        intensity: HERO_KEY_INTENSITY,
                    },
                    PointLight {
                        position: HERO_FILL_POS,
                        color: Vec3::ONE,
                        intensity: HERO_FILL_INTENSITY,
                    },
                ],
            },
            HelmetVariant::Gallery { .. } => LightRig {
                ambient_color: Vec3::ONE,
                ambient_intensity: GALLERY_AMBIENT,
                points: [
                    PointLight {
                        position: GALLERY_KEY_POS,
                        color: Vec3::ONE,
                        intensity: GALLERY_KEY_INTENSITY,
                    },
                    PointLight::OFF,
                ],
            },
        }
    }
}

/// Palette entry for a gallery slot; indices past the end wrap around.
#[inline]
pub fn palette_color(index: usize) -> u32 {
    PALETTE[index % PALETTE.len()]
}

/// Convert a `0xRRGGBB` sRGB color to linear RGB.
pub fn srgb_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xFF) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}

/// Physically parameterized surface description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub base_color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    /// 0 = opaque, 1 = fully transmissive.
    pub transmission: f32,
    pub iridescence: f32,
}

impl Material {
    fn solid(hex: u32, metalness: f32, roughness: f32) -> Self {
        Self {
            base_color: srgb_to_linear(hex),
            metalness,
            roughness,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            transmission: 0.0,
            iridescence: 0.0,
        }
    }

    pub fn opacity(&self) -> f32 {
        (1.0 - 0.7 * self.transmission.clamp(0.0, 1.0)).clamp(0.0, 1.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.transmission > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartKind {
    Shell,
    Visor,
    Vent,
    Trim,
    Spoiler,
}

#[derive(Clone, Debug)]
pub struct HelmetPart {
    pub kind: PartKind,
    pub mesh: MeshData,
    pub material: Material,
}

/// Every mesh of one helmet, in unit helmet space. The renderer applies a
/// single root transform to all parts so the helmet moves as a rigid whole.
#[derive(Clone, Debug)]
pub struct HelmetModel {
    pub variant: HelmetVariant,
    pub parts: Vec<HelmetPart>,
}

impl HelmetModel {
    pub fn part(&self, kind: PartKind) -> Option<&HelmetPart> {
        self.parts.iter().find(|p| p.kind == kind)
    }

    pub fn count(&self, kind: PartKind) -> usize {
        self.parts.iter().filter(|p| p.kind == kind).count()
    }
}

/// Build the helmet for a mount point; a missing mount builds nothing.
pub fn build_for_mount<M>(mount: Option<M>, variant: HelmetVariant) -> Option<(M, HelmetModel)> {
    let mount = mount?;
    Some((mount, build_helmet(variant)))
}

/// Pass a renderer setup result through; when it failed, hand every mounted
/// surface to `discard` so the page is left as authored.
pub fn discard_mounts_on_failure<M, T, E>(
    mounts: &[M],
    setup: Result<T, E>,
    mut discard: impl FnMut(&M),
) -> Result<T, E> {
    if setup.is_err() {
        mounts.iter().for_each(&mut discard);
    }
    setup
}

pub fn build_helmet(variant: HelmetVariant) -> HelmetModel {
    let color = variant.color();
    let hero = variant.is_hero();

    let mut parts = vec![
        HelmetPart {
            kind: PartKind::Shell,
            mesh: lathe(&HELMET_PROFILE, SHELL_SEGMENTS),
            material: shell_material(color, hero),
        },
        HelmetPart {
            kind: PartKind::Visor,
            mesh: visor_mesh(),
            material: visor_material(),
        },
    ];
    for angle in vent_angles(VENT_COUNT) {
        parts.push(HelmetPart {
            kind: PartKind::Vent,
            mesh: vent_mesh(angle),
            material: Material::solid(TRIM_COLOR, 0.9, 0.1),
        });
    }
    if hero {
        for mesh in trim_rings() {
            parts.push(HelmetPart {
                kind: PartKind::Trim,
                mesh,
                material: Material::solid(TRIM_COLOR, 0.9, 0.1),
            });
        }
        parts.push(HelmetPart {
            kind: PartKind::Spoiler,
            mesh: spoiler_mesh(),
            material: Material {
                emissive_intensity: 0.1,
                ..shell_material(color, true)
            },
        });
    }
    HelmetModel { variant, parts }
}

fn shell_material(color: u32, hero: bool) -> Material {
    let base = srgb_to_linear(color);
    let (metalness, roughness, glow, iridescence) = if hero {
        (0.7, 0.3, 0.2, 0.35)
    } else {
        (0.8, 0.2, 0.3, 0.2)
    };
    Material {
        base_color: base,
        metalness,
        roughness,
        emissive: base,
        emissive_intensity: glow,
        transmission: 0.0,
        iridescence,
    }
}

fn visor_material() -> Material {
    Material {
        transmission: 0.6,
        iridescence: 0.8,
        ..Material::solid(VISOR_COLOR, 0.1, 0.05)
    }
}

fn visor_mesh() -> MeshData {
    let outline = half_ellipse(VISOR_RADIUS_X, VISOR_RADIUS_Y, VISOR_ARC_STEPS);
    extrude(&outline, VISOR_DEPTH).transformed(
        Mat4::from_translation(VISOR_OFFSET) * Mat4::from_rotation_x(VISOR_TILT),
    )
}

/// Angles (radians about Y, 0 = front) of the vent row, evenly spread over
/// `VENT_ARC` and centred on the front of the crown.
pub fn vent_angles(count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = VENT_ARC / (n - 1) as f32;
            (0..n).map(|k| -VENT_ARC * 0.5 + k as f32 * step).collect()
        }
    }
}

/// Placement of a vent on the shell surface: rotate around the helmet, then
/// tilt the box so its local Y follows the surface normal.
pub fn vent_transform(angle: f32) -> Mat4 {
    let (p, n) = surface_at(VENT_CROWN_HEIGHT);
    let tilt = n.x.atan2(n.y);
    Mat4::from_rotation_y(angle)
        * Mat4::from_translation(Vec3::new(0.0, p.y, p.x))
        * Mat4::from_rotation_x(tilt)
}

fn vent_mesh(angle: f32) -> MeshData {
    cuboid(VENT_SIZE).transformed(vent_transform(angle))
}

fn trim_rings() -> [MeshData; 2] {
    let neck = HELMET_PROFILE[0];
    let (belt, _) = surface_at(-0.06);
    [
        torus(neck.x, TRIM_TUBE_RADIUS, TRIM_RING_SEGMENTS, TRIM_TUBE_SEGMENTS)
            .transformed(Mat4::from_translation(Vec3::new(0.0, neck.y, 0.0))),
        torus(
            belt.x + TRIM_TUBE_RADIUS * 0.5,
            TRIM_TUBE_RADIUS,
            TRIM_RING_SEGMENTS,
            TRIM_TUBE_SEGMENTS,
        )
        .transformed(Mat4::from_translation(Vec3::new(0.0, belt.y, 0.0))),
    ]
}

fn spoiler_mesh() -> MeshData {
    // Trapezoid fin extruded across the back of the crown.
    let outline = [
        Vec2::new(-0.18, 0.0),
        Vec2::new(0.18, 0.0),
        Vec2::new(0.1, 0.12),
        Vec2::new(-0.1, 0.12),
    ];
    let (p, n) = surface_at(0.55);
    let tilt = n.x.atan2(n.y);
    extrude(&outline, SPOILER_WIDTH).transformed(
        Mat4::from_rotation_y(PI)
            * Mat4::from_translation(Vec3::new(0.0, p.y, p.x - SPOILER_DEPTH * 0.5))
            * Mat4::from_rotation_x(tilt)
            * Mat4::from_rotation_y(PI * 0.5),
    )
}
