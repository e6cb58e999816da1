// Host-side tests for the procedural helmet scene.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod profile {
        include!("../src/core/profile.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod rig {
        include!("../src/core/rig.rs");
    }
    pub mod helmet {
        include!("../src/core/helmet.rs");
    }
}

use crate::core::constants::*;
use crate::core::helmet::*;
use crate::core::mesh::*;
use crate::core::profile::*;
use glam::{Vec2, Vec3};

fn assert_unit_normals(mesh: &MeshData, what: &str) {
    for (i, v) in mesh.vertices.iter().enumerate() {
        let len = Vec3::from(v.normal).length();
        assert!((len - 1.0).abs() < 1e-4, "{what}: normal {i} has length {len}");
    }
}

fn assert_indices_in_range(mesh: &MeshData) {
    let n = mesh.vertices.len() as u32;
    assert_eq!(mesh.indices.len() % 3, 0);
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn missing_mount_builds_nothing() {
    assert!(build_for_mount::<()>(None, HelmetVariant::Hero).is_none());
    assert!(build_for_mount::<&str>(None, HelmetVariant::Gallery { index: 4 }).is_none());
}

#[test]
fn present_mount_gets_a_helmet() {
    let (mount, model) =
        build_for_mount(Some("hero-3d"), HelmetVariant::Hero).expect("mount present");
    assert_eq!(mount, "hero-3d");
    assert_eq!(model.variant, HelmetVariant::Hero);
    assert_eq!(model.count(PartKind::Shell), 1);
}

#[test]
fn failed_renderer_setup_discards_every_mount() {
    let mounts = ["hero-3d", "helmet-0", "helmet-1"];
    let mut removed = Vec::new();
    let result: Result<(), &str> =
        discard_mounts_on_failure(&mounts, Err("no adapter"), |m| removed.push(*m));
    assert_eq!(result, Err("no adapter"));
    assert_eq!(removed, mounts);
}

#[test]
fn successful_renderer_setup_keeps_mounts() {
    let mounts = ["hero-3d"];
    let mut removed = 0;
    let result: Result<u32, &str> = discard_mounts_on_failure(&mounts, Ok(1), |_| removed += 1);
    assert_eq!(result, Ok(1));
    assert_eq!(removed, 0);
}

#[test]
fn lathe_vertex_count_matches_profile_and_segments() {
    let mesh = lathe(&HELMET_PROFILE, SHELL_SEGMENTS);
    assert_eq!(
        mesh.vertices.len(),
        HELMET_PROFILE.len() * (SHELL_SEGMENTS + 1)
    );
    assert_eq!(
        mesh.triangle_count(),
        (HELMET_PROFILE.len() - 1) * SHELL_SEGMENTS * 2
    );
    assert_indices_in_range(&mesh);
}

#[test]
fn lathe_of_short_profile_is_empty() {
    let mesh = lathe(&[Vec2::new(1.0, 0.0)], 16);
    assert!(mesh.vertices.is_empty());
    assert!(mesh.bounds().is_none());
}

#[test]
fn every_part_has_unit_normals_and_valid_indices() {
    for variant in [HelmetVariant::Hero, HelmetVariant::Gallery { index: 3 }] {
        let model = build_helmet(variant);
        for part in &model.parts {
            assert!(!part.mesh.vertices.is_empty());
            assert_unit_normals(&part.mesh, &format!("{:?}", part.kind));
            assert_indices_in_range(&part.mesh);
        }
    }
}

#[test]
fn visor_sits_in_front_of_shell() {
    let model = build_helmet(HelmetVariant::Hero);
    let (_, shell_max) = model
        .part(PartKind::Shell)
        .and_then(|p| p.mesh.bounds())
        .expect("shell");
    let (visor_min, visor_max) = model
        .part(PartKind::Visor)
        .and_then(|p| p.mesh.bounds())
        .expect("visor");
    assert!(visor_max.z > shell_max.z);
    assert!(visor_min.z > 0.0);
}

#[test]
fn hero_carries_trim_and_spoiler_gallery_does_not() {
    let hero = build_helmet(HelmetVariant::Hero);
    assert_eq!(hero.count(PartKind::Vent), VENT_COUNT);
    assert_eq!(hero.count(PartKind::Trim), 2);
    assert_eq!(hero.count(PartKind::Spoiler), 1);

    let gallery = build_helmet(HelmetVariant::Gallery { index: 0 });
    assert_eq!(gallery.count(PartKind::Vent), VENT_COUNT);
    assert_eq!(gallery.count(PartKind::Trim), 0);
    assert_eq!(gallery.count(PartKind::Spoiler), 0);
}

#[test]
fn gallery_palette_cycles() {
    for i in 0..PALETTE.len() * 3 {
        assert_eq!(palette_color(i), PALETTE[i % PALETTE.len()]);
    }
    assert_eq!(HelmetVariant::Gallery { index: 7 }.color(), PALETTE[0]);
    assert_eq!(HelmetVariant::Hero.color(), ACCENT);
}

#[test]
fn visor_is_the_only_transparent_part() {
    let model = build_helmet(HelmetVariant::Hero);
    for part in &model.parts {
        assert_eq!(
            part.material.is_transparent(),
            part.kind == PartKind::Visor,
            "{:?}",
            part.kind
        );
    }
}

#[test]
fn variants_use_their_scale_camera_and_lights() {
    let hero = HelmetVariant::Hero;
    let gallery = HelmetVariant::Gallery { index: 0 };
    assert_eq!(hero.scale(), HERO_SCALE);
    assert_eq!(gallery.scale(), GALLERY_SCALE);
    assert!((hero.camera().eye.z - HERO_CAMERA_Z).abs() < 1e-6);
    assert!((gallery.camera().eye.z - GALLERY_CAMERA_Z).abs() < 1e-6);
    assert_eq!(hero.light_rig().points[1].intensity, HERO_FILL_INTENSITY);
    assert_eq!(gallery.light_rig().points[1].intensity, 0.0);
}

#[test]
fn vents_spread_symmetrically_around_the_front() {
    let angles = vent_angles(VENT_COUNT);
    assert_eq!(angles.len(), VENT_COUNT);
    assert!(angles[VENT_COUNT / 2].abs() < 1e-6);
    assert!((angles[0] + angles[VENT_COUNT - 1]).abs() < 1e-6);
    assert!(vent_angles(0).is_empty());
}

#[test]
fn srgb_conversion_keeps_extremes() {
    assert_eq!(srgb_to_linear(0x000000), Vec3::ZERO);
    let white = srgb_to_linear(0xFFFFFF);
    assert!((white - Vec3::ONE).abs().max_element() < 1e-5);
}
