use std::f32::consts::TAU;

/// Easing curves, named after the GSAP eases the page was designed with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    Power3Out,
    /// Overshoot amount.
    BackOut(f32),
    /// Amplitude, period.
    ElasticOut(f32, f32),
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
            Ease::ElasticOut(amplitude, period) => {
                let a = amplitude.max(1.0);
                let p = period.max(1e-3);
                let shift = p / TAU * (1.0 / a).asin();
                a * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / p).sin() + 1.0
            }
        }
    }
}

pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// Time-based interpolation between two values with an optional start delay.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: f32,
    delay: f32,
    elapsed: f32,
    ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            elapsed: 0.0,
            ease,
        }
    }

    /// A finished tween resting on `value`.
    pub fn settled(value: T, ease: Ease) -> Self {
        Self::new(value, value, 0.0, ease)
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn progress(&self) -> f32 {
        let t = self.elapsed - self.delay;
        if t < 0.0 {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            (t / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> T {
        self.from.lerp(self.to, self.ease.apply(self.progress()))
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Advance by `dt` seconds (already time-scaled) and return the new value.
    pub fn advance(&mut self, dt: f32) -> T {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.delay + self.duration);
        }
        self.value()
    }

    /// Redirect toward `to`, starting from the current value.
    pub fn retarget(&mut self, to: T, duration: f32) {
        self.from = self.value();
        self.to = to;
        self.duration = duration.max(0.0);
        self.delay = 0.0;
        self.elapsed = 0.0;
    }
}

/// Global clock scaling for every time-based tween; 0 freezes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    time_scale: f32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl Timeline {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(0.0),
        }
    }

    /// Reduced-motion preference stops the clock entirely.
    pub fn for_reduced_motion(reduced: bool) -> Self {
        Self::new(if reduced { 0.0 } else { 1.0 })
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale <= 0.0
    }

    #[inline]
    pub fn scale(&self, dt: f32) -> f32 {
        dt.max(0.0) * self.time_scale
    }
}
