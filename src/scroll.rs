use crate::animate::Animator;
use crate::constants::{
    COUNTER_DURATION_SEC, COUNTER_START, HERO_IMAGE, HERO_SECTION, PARALLAX_FACTOR, STAT_NUMBER,
};
use crate::core::scroll::{counter_binding, parallax_binding, ENTRANCES};
use crate::dom;
use web_sys as web;

/// Register every scroll-driven effect found on the page. Missing markers
/// register nothing. Under reduced motion nothing is registered, so content
/// keeps its natural state and text.
pub fn wire_scroll_effects(document: &web::Document, animator: &mut Animator) {
    if animator.reduced_motion() {
        log::info!("[scroll] reduced motion, scroll effects off");
        return;
    }

    for entrance in ENTRANCES.iter() {
        for (i, el) in dom::query_all(document, entrance.selector).iter().enumerate() {
            if let Some(spec) = entrance.binding(i) {
                animator.register_scroll(el, el, spec);
            }
        }
    }

    if let (Some(hero), Some(image)) = (
        dom::query_one(document, HERO_SECTION),
        dom::query_one(document, HERO_IMAGE),
    ) {
        animator.register_scroll(&image, &hero, parallax_binding(PARALLAX_FACTOR));
    }

    for el in dom::query_all(document, STAT_NUMBER) {
        let label = el.text_content().unwrap_or_default();
        if let Some(spec) = counter_binding(&label, COUNTER_START, COUNTER_DURATION_SEC) {
            animator.register_scroll(&el, &el, spec);
        }
    }

    log::info!("[scroll] {} bindings", animator.binding_count());
}
