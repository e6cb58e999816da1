use glam::{EulerRot, Mat4, Vec2, Vec3};

use crate::constants::*;

/// Which loop rules apply to a helmet instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionRole {
    Hero,
    Gallery { index: usize },
}

/// Per-instance animation state, advanced once per display refresh by `tick`.
///
/// Pointer easing and auto-rotation are tracked separately: the eased part
/// converges on the pointer target, the auto part accumulates without bound.
#[derive(Clone, Debug)]
pub struct HelmetMotion {
    role: MotionRole,
    eased: Vec2,
    target: Vec2,
    auto_yaw: f32,
    spin: f32,
    spin_velocity: f32,
    hovered: bool,
    hover_intensity: f32,
    float_phase: f32,
    float_offset: f32,
    elapsed: f32,
    rotation: Vec3,
}

impl HelmetMotion {
    pub fn new(role: MotionRole) -> Self {
        let float_phase = match role {
            MotionRole::Hero => 0.0,
            MotionRole::Gallery { index } => index as f32 * GALLERY_FLOAT_PHASE_STEP,
        };
        Self {
            role,
            eased: Vec2::ZERO,
            target: Vec2::ZERO,
            auto_yaw: 0.0,
            spin: 0.0,
            spin_velocity: 0.0,
            hovered: false,
            hover_intensity: 0.0,
            float_phase,
            float_offset: 0.0,
            elapsed: 0.0,
            rotation: Vec3::ZERO,
        }
    }

    /// Target rotation as `(pitch, yaw)`.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Advance one display refresh. `dt` (seconds) only drives the bob clock;
    /// easing, spin and auto-rotation step once per call.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        self.eased += (self.target - self.eased) * ROTATION_DAMPING;

        self.float_offset = (self.elapsed * FLOAT_SPEED + self.float_phase).sin() * FLOAT_AMPLITUDE;

        if self.hovered {
            self.spin_velocity = (self.spin_velocity + HOVER_SPIN_ACCEL).min(HOVER_SPIN_MAX);
            self.spin += self.spin_velocity;
            self.hover_intensity = (self.hover_intensity + HOVER_INTENSITY_STEP).min(1.0);
        } else {
            self.spin_velocity *= SPIN_DECAY;
            self.spin += self.spin_velocity;
            self.hover_intensity = (self.hover_intensity - HOVER_INTENSITY_STEP).max(0.0);
        }

        self.auto_yaw += match self.role {
            MotionRole::Hero => HERO_AUTO_ROTATE,
            MotionRole::Gallery { .. } if self.hovered => 0.0,
            MotionRole::Gallery { .. } => GALLERY_IDLE_ROTATE,
        };

        // Tumble cross terms fade out with the spin velocity.
        let tumble = (self.spin_velocity / HOVER_SPIN_MAX).clamp(0.0, 1.0);
        let (s, c) = self.spin.sin_cos();
        self.rotation = Vec3::new(
            self.eased.x + s * TUMBLE_PITCH * tumble,
            self.eased.y + self.auto_yaw + self.spin,
            c * TUMBLE_ROLL * tumble,
        );
    }

    /// Root transform for the helmet: bob, then rotation, then uniform scale.
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.float_offset, 0.0))
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
            * Mat4::from_scale(Vec3::splat(scale))
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Pointer-eased `(pitch, yaw)` before auto-rotation and tumble.
    pub fn eased(&self) -> Vec2 {
        self.eased
    }

    pub fn spin_velocity(&self) -> f32 {
        self.spin_velocity
    }

    /// Eased 0..1 follower of the hover flag. Not consumed by rendering.
    pub fn hover_intensity(&self) -> f32 {
        self.hover_intensity
    }

    pub fn float_offset(&self) -> f32 {
        self.float_offset
    }
}
