// Host-side tests for per-instance helmet motion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}

use constants::*;
use glam::{Vec2, Vec3};
use motion::*;

const FRAME: f32 = 1.0 / 60.0;

fn run(m: &mut HelmetMotion, frames: usize) {
    for _ in 0..frames {
        m.tick(FRAME);
    }
}

#[test]
fn easing_converges_on_pointer_target() {
    let mut m = HelmetMotion::new(MotionRole::Hero);
    let target = Vec2::new(POINTER_PITCH_MAX, -POINTER_YAW_MAX);
    m.set_target(target);
    let mut last_err = f32::MAX;
    for _ in 0..200 {
        run(&mut m, 1);
        let err = (target - m.eased()).length();
        assert!(err < last_err, "residual must shrink every frame");
        last_err = err;
    }
    assert!(last_err < 1e-3);
}

#[test]
fn first_frame_closes_five_percent_of_residual() {
    let mut m = HelmetMotion::new(MotionRole::Hero);
    m.set_target(Vec2::new(0.2, 0.4));
    m.tick(0.0);
    let e = m.eased();
    assert!((e.x - 0.2 * ROTATION_DAMPING).abs() < 1e-6);
    assert!((e.y - 0.4 * ROTATION_DAMPING).abs() < 1e-6);
}

#[test]
fn hero_auto_rotates_every_frame() {
    let mut m = HelmetMotion::new(MotionRole::Hero);
    run(&mut m, 100);
    assert!((m.rotation().y - 100.0 * HERO_AUTO_ROTATE).abs() < 1e-4);
}

#[test]
fn gallery_idle_rotation_pauses_while_hovered() {
    let mut m = HelmetMotion::new(MotionRole::Gallery { index: 2 });
    run(&mut m, 10);
    let idle_yaw = m.rotation().y;
    assert!((idle_yaw - 10.0 * GALLERY_IDLE_ROTATE).abs() < 1e-5);

    m.set_hovered(true);
    run(&mut m, 1);
    // Only the spin moves yaw while hovered.
    assert!((m.rotation().y - (idle_yaw + m.spin_velocity())).abs() < 1e-5);
}

#[test]
fn hover_spin_accelerates_to_cap() {
    let mut m = HelmetMotion::new(MotionRole::Gallery { index: 0 });
    m.set_hovered(true);
    let mut last = 0.0;
    for _ in 0..100 {
        run(&mut m, 1);
        assert!(m.spin_velocity() >= last);
        assert!(m.spin_velocity() <= HOVER_SPIN_MAX);
        last = m.spin_velocity();
    }
    assert_eq!(m.spin_velocity(), HOVER_SPIN_MAX);
    assert_eq!(m.hover_intensity(), 1.0);
}

#[test]
fn spin_decays_monotonically_after_leave_without_sign_change() {
    let mut m = HelmetMotion::new(MotionRole::Gallery { index: 1 });
    m.set_hovered(true);
    run(&mut m, 40);
    m.set_hovered(false);

    let mut last = m.spin_velocity();
    assert!(last > 0.0);
    for _ in 0..400 {
        run(&mut m, 1);
        let v = m.spin_velocity();
        assert!(v >= 0.0, "spin velocity changed sign");
        assert!(v <= last, "spin velocity grew after leave");
        last = v;
    }
    assert!(last < 1e-6);
    assert_eq!(m.hover_intensity(), 0.0);
}

#[test]
fn tumble_vanishes_at_rest() {
    let mut m = HelmetMotion::new(MotionRole::Gallery { index: 0 });
    run(&mut m, 5);
    let r = m.rotation();
    assert_eq!(r.x, m.eased().x);
    assert_eq!(r.z, 0.0);
}

#[test]
fn tumble_couples_pitch_and_roll_while_spinning() {
    let mut m = HelmetMotion::new(MotionRole::Gallery { index: 0 });
    m.set_hovered(true);
    run(&mut m, 60);
    let r = m.rotation();
    assert!(r.x.abs() <= TUMBLE_PITCH + 1e-6);
    assert!(r.z.abs() <= TUMBLE_ROLL + 1e-6);
    assert!(r.x != 0.0 || r.z != 0.0);
}

#[test]
fn gallery_bob_is_phase_shifted_by_index() {
    let mut a = HelmetMotion::new(MotionRole::Gallery { index: 0 });
    let mut b = HelmetMotion::new(MotionRole::Gallery { index: 3 });
    a.tick(1.0);
    b.tick(1.0);
    assert!(a.float_offset().abs() <= FLOAT_AMPLITUDE);
    assert!(b.float_offset().abs() <= FLOAT_AMPLITUDE);
    assert!((a.float_offset() - b.float_offset()).abs() > 1e-4);
}

#[test]
fn model_matrix_applies_bob_and_scale() {
    let mut m = HelmetMotion::new(MotionRole::Hero);
    m.tick(0.7);
    let mat = m.model_matrix(1.2);
    let origin = mat.transform_point3(Vec3::ZERO);
    assert!((origin.y - m.float_offset()).abs() < 1e-6);
    let (scale, _, _) = mat.to_scale_rotation_translation();
    assert!((scale - Vec3::splat(1.2)).abs().max_element() < 1e-4);
}
