use glam::Vec3;

// Scene geometry, palette, camera and light tuning shared by the builder and renderer.

// Shell revolution
pub const SHELL_SEGMENTS: usize = 48;

// Visor (extruded half-ellipse)
pub const VISOR_RADIUS_X: f32 = 0.78;
pub const VISOR_RADIUS_Y: f32 = 0.38;
pub const VISOR_DEPTH: f32 = 0.06;
pub const VISOR_ARC_STEPS: usize = 24;
pub const VISOR_OFFSET: Vec3 = Vec3::new(0.0, 0.08, 1.0); // in front of the shell
pub const VISOR_TILT: f32 = -0.12; // radians about X

// Vents around the crown
pub const VENT_COUNT: usize = 5;
pub const VENT_SIZE: Vec3 = Vec3::new(0.16, 0.05, 0.26);
pub const VENT_CROWN_HEIGHT: f32 = 0.82; // normalized profile height of the vent row
pub const VENT_ARC: f32 = 1.6; // radians spanned by the row, centred on the front

// Hero-only trim
pub const TRIM_TUBE_RADIUS: f32 = 0.035;
pub const TRIM_RING_SEGMENTS: usize = 64;
pub const TRIM_TUBE_SEGMENTS: usize = 12;
pub const SPOILER_WIDTH: f32 = 0.5;
pub const SPOILER_DEPTH: f32 = 0.08;

// Variant scale and camera placement
pub const HERO_SCALE: f32 = 1.2;
pub const GALLERY_SCALE: f32 = 0.8;
pub const HERO_CAMERA_Z: f32 = 5.0;
pub const GALLERY_CAMERA_Z: f32 = 3.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Gallery palette, one entry per season and reused cyclically
pub const PALETTE: [u32; 7] = [
    0xCCFF00, // 2025
    0x4444FF, // 2024
    0xFF6644, // 2023
    0xAA44FF, // 2022
    0xFF4444, // 2021
    0x44FF88, // 2020
    0xFF8844, // 2019
];
pub const ACCENT: u32 = 0xCCFF00;
pub const TRIM_COLOR: u32 = 0x0A0A0A;
pub const VISOR_COLOR: u32 = 0x10141C;

// Light rigs
pub const HERO_AMBIENT: f32 = 0.5;
pub const HERO_KEY_POS: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const HERO_KEY_INTENSITY: f32 = 1.0;
pub const HERO_FILL_POS: Vec3 = Vec3::new(-5.0, -5.0, 5.0);
pub const HERO_FILL_INTENSITY: f32 = 0.5;
pub const GALLERY_AMBIENT: f32 = 0.6;
pub const GALLERY_KEY_POS: Vec3 = Vec3::new(3.0, 3.0, 3.0);
pub const GALLERY_KEY_INTENSITY: f32 = 1.0;
