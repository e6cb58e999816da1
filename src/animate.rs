use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::hover::{self, HoverPulse};
use crate::core::menu::MenuState;
use crate::core::navigation::{navigation_for, Navigation};
use crate::core::scroll::{BindingSpec, ScrollScheduler, StyleUpdate};
use crate::core::transition::{Phase, TransitionOverlay};
use crate::core::{Props, Timeline};
use crate::dom;
use crate::frame::FrameDriver;
use crate::overlay;
use fnv::FnvHashMap;
use instant::Instant;
use web_sys as web;

/// An animated element. Its inline style is `props` with the scale
/// multiplied by the hover pulse, written only when something changed.
struct ElementSlot {
    el: web::HtmlElement,
    props: Props,
    hover_scale: f32,
    dirty: bool,
}

struct MenuBinding {
    state: MenuState,
    bars: [usize; 3],
    button: web::Element,
}

struct TransitionBinding {
    overlay: web::HtmlElement,
    state: TransitionOverlay<web::Element>,
}

/// The page tween engine: scroll bindings, menu icon, hover pulses and the
/// navigation overlay, all advanced by one clock.
pub struct Animator {
    timeline: Timeline,
    reduced_motion: bool,
    slots: Vec<ElementSlot>,
    scheduler: ScrollScheduler<usize>,
    menu: Option<MenuBinding>,
    hover_pulses: FnvHashMap<usize, HoverPulse>,
    transition: Option<TransitionBinding>,
    updates: Vec<StyleUpdate<usize>>,
    last_instant: Instant,
}

impl Animator {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            timeline: Timeline::for_reduced_motion(reduced_motion),
            reduced_motion,
            slots: Vec::new(),
            scheduler: ScrollScheduler::new(),
            menu: None,
            hover_pulses: FnvHashMap::default(),
            transition: None,
            updates: Vec::new(),
            last_instant: Instant::now(),
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn binding_count(&self) -> usize {
        self.scheduler.len()
    }

    /// Slot for `el`, reusing an existing one for the same element.
    pub fn track(&mut self, el: &web::HtmlElement) -> usize {
        if let Some(i) = self.slots.iter().position(|s| &s.el == el) {
            return i;
        }
        self.slots.push(ElementSlot {
            el: el.clone(),
            props: Props::NATURAL,
            hover_scale: 1.0,
            dirty: false,
        });
        self.slots.len() - 1
    }

    fn set_props(&mut self, key: usize, props: Props) {
        if let Some(slot) = self.slots.get_mut(key) {
            if slot.props != props {
                slot.props = props;
                slot.dirty = true;
            }
        }
    }

    fn apply(&mut self, update: StyleUpdate<usize>) {
        match update {
            StyleUpdate::Props(key, props) => self.set_props(key, props),
            StyleUpdate::Text(key, text) => {
                if let Some(slot) = self.slots.get(key) {
                    slot.el.set_text_content(Some(&text));
                }
            }
        }
    }

    /// Bind `target` to a scroll trigger measured on `trigger`.
    pub fn register_scroll(
        &mut self,
        target: &web::HtmlElement,
        trigger: &web::HtmlElement,
        spec: BindingSpec,
    ) {
        let target = self.track(target);
        let trigger_key = self.track(trigger);
        let layout = dom::layout_of(trigger);
        if let Some(initial) = self.scheduler.register(target, trigger_key, spec, layout) {
            self.apply(initial);
            // Start states must land before the first paint.
            self.flush();
        }
    }

    /// Re-measure every trigger, e.g. after a window resize.
    pub fn relayout(&mut self) {
        let slots = &self.slots;
        self.scheduler
            .relayout(|key| slots.get(key).map(|s| dom::layout_of(&s.el)));
    }

    /// Drive the hamburger `button` and its three bar elements.
    pub fn bind_menu(&mut self, button: web::Element, bars: [web::HtmlElement; 3]) {
        let bars = [
            self.track(&bars[0]),
            self.track(&bars[1]),
            self.track(&bars[2]),
        ];
        _ = button.set_attribute("aria-expanded", "false");
        self.menu = Some(MenuBinding {
            state: MenuState::new(),
            bars,
            button,
        });
    }

    pub fn toggle_menu(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            let open = menu.state.toggle();
            _ = menu
                .button
                .set_attribute("aria-expanded", if open { "true" } else { "false" });
            _ = menu.button.class_list().toggle_with_force("open", open);
            log::debug!("[menu] open={}", open);
        }
    }

    /// Hover enter/leave on a gallery wrapper: pulse its scale.
    pub fn hover(&mut self, el: &web::HtmlElement, entered: bool) {
        let key = self.track(el);
        self.hover_pulses
            .entry(key)
            .or_default()
            .set_hovered(entered);
    }

    pub fn bind_transition(&mut self, overlay: web::HtmlElement) {
        overlay::hide(&overlay);
        self.transition = Some(TransitionBinding {
            overlay,
            state: TransitionOverlay::new(),
        });
    }

    /// Move to an in-page destination, through the overlay when there is one
    /// and motion is allowed.
    pub fn navigate(&mut self, destination: web::Element) {
        let how = navigation_for(self.transition.is_some(), self.reduced_motion);
        match (how, self.transition.as_mut()) {
            (Navigation::Overlay, Some(t)) => {
                overlay::show(&t.overlay, t.state.opacity());
                t.state.start(destination);
            }
            _ => dom::scroll_to(&destination, true),
        }
    }

    fn step_menu(&mut self, dt: f32) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        if menu.state.is_settled() {
            return;
        }
        let values = menu.state.advance(dt);
        let keys = menu.bars;
        for (key, props) in keys.into_iter().zip(values) {
            self.set_props(key, props);
        }
    }

    fn step_hover(&mut self, dt: f32) {
        for (&key, pulse) in self.hover_pulses.iter_mut() {
            let scale = pulse.advance(dt);
            if let Some(slot) = self.slots.get_mut(key) {
                if slot.hover_scale != scale {
                    slot.hover_scale = scale;
                    slot.dirty = true;
                }
            }
        }
        self.hover_pulses.retain(|_, p| !p.is_resting());
    }

    fn step_transition(&mut self, dt: f32) {
        let Some(t) = self.transition.as_mut() else {
            return;
        };
        if t.state.phase() == Phase::Idle {
            return;
        }
        if let Some(destination) = t.state.advance(dt) {
            dom::scroll_to(&destination, false);
        }
        if t.state.phase() == Phase::Idle {
            overlay::hide(&t.overlay);
        } else {
            overlay::show(&t.overlay, t.state.opacity());
        }
    }

    fn flush(&mut self) {
        for slot in self.slots.iter_mut().filter(|s| s.dirty) {
            dom::apply_props(&slot.el, &hover::compose(slot.props, slot.hover_scale));
            slot.dirty = false;
        }
    }
}

impl FrameDriver for Animator {
    fn frame(&mut self) {
        let now = Instant::now();
        let raw_dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let dt = self.timeline.scale(raw_dt);

        if let Some(window) = web::window() {
            let (_, viewport_h) = dom::viewport_size(&window);
            let scroll_y = dom::scroll_y(&window);
            let mut updates = std::mem::take(&mut self.updates);
            self.scheduler.update(scroll_y, viewport_h, dt, &mut updates);
            for update in updates.drain(..) {
                self.apply(update);
            }
            self.updates = updates;
        }

        self.step_menu(dt);
        self.step_hover(dt);
        self.step_transition(dt);
        self.flush();
    }
}
