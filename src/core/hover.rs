use crate::constants::{HOVER_SCALE, HOVER_SCALE_SEC};

use super::style::Props;
use super::tween::{Ease, Tween};

/// Scale pulse on a hovered gallery wrapper, layered over whatever the
/// wrapper's own animation currently shows.
#[derive(Clone, Debug)]
pub struct HoverPulse {
    scale: Tween<f32>,
}

impl Default for HoverPulse {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverPulse {
    pub fn new() -> Self {
        Self {
            scale: Tween::settled(1.0, Ease::Power2Out),
        }
    }

    /// Head for the hovered scale on enter, back to 1 on leave, from the
    /// current value.
    pub fn set_hovered(&mut self, entered: bool) {
        let to = if entered { HOVER_SCALE } else { 1.0 };
        self.scale.retarget(to, HOVER_SCALE_SEC);
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        self.scale.advance(dt)
    }

    pub fn factor(&self) -> f32 {
        self.scale.value()
    }

    /// Settled back at 1 after a leave.
    pub fn is_resting(&self) -> bool {
        self.scale.is_complete() && self.scale.target() == 1.0
    }
}

/// What an element shows: its own props with the pulse multiplied into the
/// scale.
#[inline]
pub fn compose(props: Props, pulse: f32) -> Props {
    props.with_scale_factor(pulse)
}
