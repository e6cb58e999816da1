pub mod constants;
pub mod counter;
pub mod helmet;
pub mod hover;
pub mod menu;
pub mod mesh;
pub mod motion;
pub mod navigation;
pub mod profile;
pub mod rig;
pub mod scroll;
pub mod style;
pub mod transition;
pub mod tween;

pub use helmet::{build_for_mount, HelmetModel, HelmetVariant};
pub use motion::{HelmetMotion, MotionRole};
pub use style::Props;
pub use tween::Timeline;

// Shaders bundled as string constants
pub static HELMET_WGSL: &str = include_str!("../../shaders/helmet.wgsl");
