// Declarative scroll bindings and the scheduler that evaluates them.
//
// Each binding is a descriptor (trigger window, mode, effect, timing). One
// `ScrollScheduler::update` pass per frame turns the current scroll position
// and elapsed time into style updates; no per-element callbacks are kept.

use super::counter::CountUp;
use super::style::Props;
use super::tween::{Ease, Lerp};

/// Where a trigger fires: an edge of the trigger element meeting a fraction
/// of the viewport height, e.g. `"top 80%"` or `"bottom top"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPoint {
    pub element_fraction: f32,
    pub viewport_fraction: f32,
}

impl TriggerPoint {
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split_whitespace();
        let element_fraction = keyword_fraction(parts.next()?)?;
        let viewport_fraction = keyword_fraction(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            element_fraction,
            viewport_fraction,
        })
    }

    /// Document scroll offset at which this point is reached.
    pub fn scroll_position(&self, layout: TriggerLayout, viewport_height: f32) -> f32 {
        layout.top + self.element_fraction * layout.height
            - self.viewport_fraction * viewport_height
    }
}

fn keyword_fraction(word: &str) -> Option<f32> {
    match word {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        w => {
            let pct = w.strip_suffix('%')?.parse::<f32>().ok()?;
            pct.is_finite().then_some(pct / 100.0)
        }
    }
}

/// Trigger element geometry in document coordinates (px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerLayout {
    pub top: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerMode {
    /// Play over time once the start is crossed; optionally play backward
    /// when scrolling back above the start.
    Play { reverse_on_leave_back: bool },
    /// Progress follows the scroll fraction within [start, end] directly.
    Scrub,
    /// Track the page scroll offset itself, from the top of the document and
    /// without an upper bound. The trigger only anchors the binding.
    Follow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Interpolate from `from` to `to`.
    Props { from: Props, to: Props },
    /// Vertical drift of `factor` px per px scrolled.
    Parallax { factor: f32 },
    /// Count a number up inside its label.
    Count(CountUp),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BindingSpec {
    pub start: TriggerPoint,
    pub end: Option<TriggerPoint>,
    pub mode: TriggerMode,
    pub effect: Effect,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StyleUpdate<K> {
    Props(K, Props),
    Text(K, String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Direction {
    Forward,
    Backward,
    Idle,
}

/// Linear playhead over [0, 1]; easing is applied when sampling.
#[derive(Clone, Copy, Debug)]
struct Playhead {
    position: f32,
    direction: Direction,
    delay_left: f32,
}

impl Playhead {
    fn advance(&mut self, dt: f32, duration: f32) -> bool {
        if self.direction == Direction::Idle || dt <= 0.0 {
            return false;
        }
        let mut dt = dt;
        if self.delay_left > 0.0 {
            let used = dt.min(self.delay_left);
            self.delay_left -= used;
            dt -= used;
            if dt <= 0.0 {
                return false;
            }
        }
        let step = if duration > 0.0 { dt / duration } else { 1.0 };
        let before = self.position;
        match self.direction {
            Direction::Forward => {
                self.position = (self.position + step).min(1.0);
                if self.position >= 1.0 {
                    self.direction = Direction::Idle;
                }
            }
            Direction::Backward => {
                self.position = (self.position - step).max(0.0);
                if self.position <= 0.0 {
                    self.direction = Direction::Idle;
                }
            }
            Direction::Idle => {}
        }
        self.position != before
    }
}

struct Binding<K> {
    target: K,
    trigger: K,
    spec: BindingSpec,
    layout: TriggerLayout,
    playhead: Playhead,
    entered: bool,
    last_sample: Option<f32>,
}

impl<K: Copy> Binding<K> {
    fn window(&self, viewport_height: f32) -> (f32, f32) {
        let start = self.spec.start.scroll_position(self.layout, viewport_height);
        let end = self
            .spec
            .end
            .map(|e| e.scroll_position(self.layout, viewport_height))
            .unwrap_or(start);
        (start, end)
    }

    fn sample(&self, progress: f32, window_len: f32) -> StyleUpdate<K> {
        let eased = self.spec.ease.apply(progress);
        match &self.spec.effect {
            Effect::Props { from, to } => StyleUpdate::Props(self.target, from.lerp(*to, eased)),
            Effect::Parallax { factor } => StyleUpdate::Props(
                self.target,
                Props {
                    y: factor * window_len.max(0.0) * eased,
                    ..Props::NATURAL
                },
            ),
            Effect::Count(count) => StyleUpdate::Text(self.target, count.text_at(eased)),
        }
    }
}

/// Scrub progress for a scroll offset inside `[start, end]`.
#[inline]
pub fn scrub_progress(scroll: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return if scroll >= start { 1.0 } else { 0.0 };
    }
    ((scroll - start) / (end - start)).clamp(0.0, 1.0)
}

pub struct ScrollScheduler<K> {
    bindings: Vec<Binding<K>>,
}

impl<K: Copy + PartialEq> Default for ScrollScheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq> ScrollScheduler<K> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Register a binding and return the style its target starts with.
    pub fn register(
        &mut self,
        target: K,
        trigger: K,
        spec: BindingSpec,
        layout: TriggerLayout,
    ) -> Option<StyleUpdate<K>> {
        let binding = Binding {
            target,
            trigger,
            playhead: Playhead {
                position: 0.0,
                direction: Direction::Idle,
                delay_left: 0.0,
            },
            entered: false,
            last_sample: None,
            layout,
            spec,
        };
        // Play bindings render their start state immediately; scroll-coupled
        // ones wait for the first scroll sample.
        let initial = match binding.spec.mode {
            TriggerMode::Play { .. } => Some(binding.sample(0.0, 0.0)),
            TriggerMode::Scrub | TriggerMode::Follow => None,
        };
        self.bindings.push(binding);
        initial
    }

    /// Re-measure trigger geometry, e.g. after a resize.
    pub fn relayout(&mut self, mut measure: impl FnMut(K) -> Option<TriggerLayout>) {
        for b in &mut self.bindings {
            if let Some(layout) = measure(b.trigger) {
                b.layout = layout;
                b.last_sample = None;
            }
        }
    }

    /// One scheduler pass: react to the scroll offset, advance play tweens by
    /// `dt` (already time-scaled) and push every changed style into `out`.
    pub fn update(
        &mut self,
        scroll_y: f32,
        viewport_height: f32,
        dt: f32,
        out: &mut Vec<StyleUpdate<K>>,
    ) {
        for b in &mut self.bindings {
            let (start, end) = b.window(viewport_height);
            match b.spec.mode {
                TriggerMode::Play {
                    reverse_on_leave_back,
                } => {
                    if !b.entered && scroll_y >= start {
                        b.entered = true;
                        if b.playhead.position < 1.0 {
                            b.playhead.direction = Direction::Forward;
                            b.playhead.delay_left = if b.playhead.position <= 0.0 {
                                b.spec.delay
                            } else {
                                0.0
                            };
                        }
                    } else if b.entered && reverse_on_leave_back && scroll_y < start {
                        b.entered = false;
                        if b.playhead.position > 0.0 {
                            b.playhead.direction = Direction::Backward;
                        } else {
                            b.playhead.direction = Direction::Idle;
                        }
                        b.playhead.delay_left = 0.0;
                    }
                    if b.playhead.advance(dt, b.spec.duration) {
                        out.push(b.sample(b.playhead.position, end - start));
                    }
                }
                TriggerMode::Scrub => {
                    let p = scrub_progress(scroll_y, start, end);
                    if b.last_sample != Some(p) {
                        b.last_sample = Some(p);
                        out.push(b.sample(p, end - start));
                    }
                }
                TriggerMode::Follow => {
                    let scrolled = scroll_y.max(0.0);
                    if b.last_sample != Some(scrolled) {
                        b.last_sample = Some(scrolled);
                        out.push(b.sample(1.0, scrolled));
                    }
                }
            }
        }
    }

    /// Progress of every binding targeting `target`: linear 0..1 for play and
    /// scrub bindings, the followed offset in px for follow bindings.
    pub fn progress_of(&self, target: K) -> Vec<f32> {
        self.bindings
            .iter()
            .filter(|b| b.target == target)
            .map(|b| match b.spec.mode {
                TriggerMode::Play { .. } => b.playhead.position,
                TriggerMode::Scrub | TriggerMode::Follow => b.last_sample.unwrap_or(0.0),
            })
            .collect()
    }
}

/// Entrance animation for one marker class: elements start offset by `from`
/// and settle to their natural state when their trigger is crossed.
#[derive(Clone, Copy, Debug)]
pub struct Entrance {
    pub selector: &'static str,
    pub from: Props,
    pub start: &'static str,
    pub end: Option<&'static str>,
    pub duration: f32,
    pub stagger: f32,
    pub ease: Ease,
    pub reverse_on_leave_back: bool,
}

impl Entrance {
    /// Binding for the `index`-th element matched by `selector`.
    pub fn binding(&self, index: usize) -> Option<BindingSpec> {
        Some(BindingSpec {
            start: TriggerPoint::parse(self.start)?,
            end: match self.end {
                Some(e) => Some(TriggerPoint::parse(e)?),
                None => None,
            },
            mode: TriggerMode::Play {
                reverse_on_leave_back: self.reverse_on_leave_back,
            },
            effect: Effect::Props {
                from: self.from,
                to: Props::NATURAL,
            },
            duration: self.duration,
            delay: self.stagger * index as f32,
            ease: self.ease,
        })
    }
}

const HIDDEN: Props = Props {
    opacity: 0.0,
    ..Props::NATURAL
};

pub const ENTRANCES: [Entrance; 8] = [
    Entrance {
        selector: ".section",
        from: Props { y: 50.0, ..HIDDEN },
        start: "top 80%",
        end: Some("top 20%"),
        duration: 1.0,
        stagger: 0.0,
        ease: Ease::Power3Out,
        reverse_on_leave_back: true,
    },
    Entrance {
        selector: ".stat-card",
        from: Props { y: 30.0, ..HIDDEN },
        start: "top 85%",
        end: None,
        duration: 0.8,
        stagger: 0.1,
        ease: Ease::Power2Out,
        reverse_on_leave_back: false,
    },
    Entrance {
        selector: ".off-track-card",
        from: Props { scale: 0.9, ..HIDDEN },
        start: "top 85%",
        end: None,
        duration: 0.8,
        stagger: 0.15,
        ease: Ease::BackOut(1.4),
        reverse_on_leave_back: false,
    },
    Entrance {
        selector: ".helmet-item",
        from: Props {
            y: 40.0,
            rotation: 5.0,
            ..HIDDEN
        },
        start: "top 90%",
        end: None,
        duration: 0.8,
        stagger: 0.1,
        ease: Ease::Power3Out,
        reverse_on_leave_back: false,
    },
    Entrance {
        selector: ".partner-logo",
        from: Props { scale: 0.8, ..HIDDEN },
        start: "top 90%",
        end: None,
        duration: 0.6,
        stagger: 0.08,
        ease: Ease::ElasticOut(1.0, 0.5),
        reverse_on_leave_back: false,
    },
    Entrance {
        selector: ".social-post",
        from: Props { x: -30.0, ..HIDDEN },
        start: "top 90%",
        end: None,
        duration: 0.7,
        stagger: 0.1,
        ease: Ease::Power2Out,
        reverse_on_leave_back: false,
    },
    Entrance {
        selector: ".section-title",
        from: Props {
            x: -50.0,
            blur: 4.0,
            ..HIDDEN
        },
        start: "top 85%",
        end: None,
        duration: 1.0,
        stagger: 0.0,
        ease: Ease::Power3Out,
        reverse_on_leave_back: false,
    },
    Entrance {
        selector: ".result-item",
        from: Props { x: -20.0, ..HIDDEN },
        start: "top 90%",
        end: None,
        duration: 0.6,
        stagger: 0.1,
        ease: Ease::Power2Out,
        reverse_on_leave_back: false,
    },
];

/// Hero image drift: `factor` px per px of page scroll, measured from the top
/// of the document and never capped.
pub fn parallax_binding(factor: f32) -> BindingSpec {
    BindingSpec {
        start: TriggerPoint {
            element_fraction: 0.0,
            viewport_fraction: 0.0,
        },
        end: None,
        mode: TriggerMode::Follow,
        effect: Effect::Parallax { factor },
        duration: 0.0,
        delay: 0.0,
        ease: Ease::Linear,
    }
}

/// Count-up binding for a label; `None` when the label holds no digits.
pub fn counter_binding(label: &str, start: &str, duration: f32) -> Option<BindingSpec> {
    Some(BindingSpec {
        start: TriggerPoint::parse(start)?,
        end: None,
        mode: TriggerMode::Play {
            reverse_on_leave_back: false,
        },
        effect: Effect::Count(CountUp::parse(label)?),
        duration,
        delay: 0.0,
        ease: Ease::Power1Out,
    })
}
