// Motion, surface and tween tuning constants for the page front-end.
//
// Per-frame factors assume one update per display refresh; the helmet loops
// apply them once per `requestAnimationFrame` tick rather than scaling by dt.
// Fraction of the residual rotation closed each frame
pub const ROTATION_DAMPING: f32 = 0.05;

// Continuous auto-rotation (radians per frame)
pub const HERO_AUTO_ROTATE: f32 = 0.005;
pub const GALLERY_IDLE_ROTATE: f32 = 0.01;

// Pointer-follow swing limits (radians)
pub const POINTER_YAW_MAX: f32 = 0.5;
pub const POINTER_PITCH_MAX: f32 = 0.3;

// Vertical bob
pub const FLOAT_AMPLITUDE: f32 = 0.08;
pub const FLOAT_SPEED: f32 = 1.2; // radians per second
pub const GALLERY_FLOAT_PHASE_STEP: f32 = 0.9; // per gallery index

// Hover spin and tumble
pub const HOVER_SPIN_ACCEL: f32 = 0.002; // added to spin velocity per frame
pub const HOVER_SPIN_MAX: f32 = 0.06;
pub const SPIN_DECAY: f32 = 0.95; // multiplicative, per frame
pub const TUMBLE_PITCH: f32 = 0.2;
pub const TUMBLE_ROLL: f32 = 0.1;
pub const HOVER_INTENSITY_STEP: f32 = 0.1;

// Render surfaces (CSS pixels)
pub const HERO_SURFACE_PX: u32 = 400;
pub const GALLERY_SURFACE_PX: u32 = 280;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Menu icon
pub const MENU_TWEEN_SEC: f32 = 0.3;
pub const MENU_BAR_ANGLE_DEG: f32 = 45.0;
pub const MENU_BAR_SHIFT_PX: f32 = 7.0;

// Gallery wrapper hover pulse
pub const HOVER_SCALE: f32 = 1.05;
pub const HOVER_SCALE_SEC: f32 = 0.3;

// Scroll effects
pub const COUNTER_DURATION_SEC: f32 = 2.0;
pub const COUNTER_START: &str = "top 85%";
pub const PARALLAX_FACTOR: f32 = 0.3;

// Transition overlay
pub const OVERLAY_COVER_SEC: f32 = 0.25;
pub const OVERLAY_REVEAL_SEC: f32 = 0.35;

// Longest frame step fed to tweens (tab switches stall requestAnimationFrame)
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// DOM markers
pub const HERO_MOUNT_ID: &str = "hero-3d";
pub const GALLERY_ITEM: &str = ".helmet-item";
pub const GALLERY_MOUNT: &str = ".helmet-3d";
pub const HERO_SECTION: &str = ".hero";
pub const HERO_IMAGE: &str = ".hero-image-wrapper";
pub const STAT_NUMBER: &str = ".stat-number";
pub const HAMBURGER: &str = ".hamburger";
pub const TRANSITION_OVERLAY_ID: &str = "page-transition";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
