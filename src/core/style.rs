use super::tween::Lerp;

/// Animatable element properties. Offsets are relative to the element's
/// natural layout: `x`/`y` in px, `rotation` in degrees, `blur` in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Props {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation: f32,
    pub blur: f32,
}

impl Props {
    pub const NATURAL: Props = Props {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotation: 0.0,
        blur: 0.0,
    };

    /// CSS `transform` value, translate then rotate then scale.
    pub fn transform_css(&self) -> String {
        if self.x == 0.0 && self.y == 0.0 && self.rotation == 0.0 && self.scale == 1.0 {
            return "none".to_string();
        }
        format!(
            "translate({:.3}px, {:.3}px) rotate({:.3}deg) scale({:.4})",
            self.x, self.y, self.rotation, self.scale
        )
    }

    pub fn filter_css(&self) -> String {
        if self.blur <= 0.0 {
            "none".to_string()
        } else {
            format!("blur({:.3}px)", self.blur)
        }
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }

    pub fn with_scale_factor(mut self, factor: f32) -> Self {
        self.scale *= factor;
        self
    }
}

impl Default for Props {
    fn default() -> Self {
        Props::NATURAL
    }
}

impl Lerp for Props {
    fn lerp(self, to: Self, t: f32) -> Self {
        Props {
            opacity: self.opacity.lerp(to.opacity, t),
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            scale: self.scale.lerp(to.scale, t),
            rotation: self.rotation.lerp(to.rotation, t),
            blur: self.blur.lerp(to.blur, t),
        }
    }
}
