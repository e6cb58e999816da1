use crate::constants::{MAX_PIXEL_RATIO, POINTER_PITCH_MAX, POINTER_YAW_MAX};
use glam::Vec2;

/// Map a client-space pointer position to [-1, 1] on both axes, y pointing up.
///
/// Coordinates outside the viewport clamp to the edge; an empty viewport
/// reports the centre.
#[inline]
pub fn normalized_pointer(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return Vec2::ZERO;
    }
    let x = (client_x / viewport_w) * 2.0 - 1.0;
    let y = -(client_y / viewport_h) * 2.0 + 1.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Target rotation for a normalized pointer: `x` is pitch, `y` is yaw.
#[inline]
pub fn target_rotation(pointer: Vec2) -> Vec2 {
    if pointer.is_nan() {
        return Vec2::ZERO;
    }
    let p = pointer.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    Vec2::new(p.y * POINTER_PITCH_MAX, p.x * POINTER_YAW_MAX)
}

/// Backing-store size for a square surface, with the device pixel ratio capped.
#[inline]
pub fn backing_px(css_px: u32, device_pixel_ratio: f64) -> u32 {
    let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    ((css_px as f64 * ratio).round() as u32).max(1)
}
