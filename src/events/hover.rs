use crate::animate::Animator;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Hover on a gallery item flags its helmet and pulses the wrapper scale.
pub fn wire_gallery_hover(
    item: &web::HtmlElement,
    hovered: Rc<Cell<bool>>,
    animator: &Rc<RefCell<Animator>>,
) {
    for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
        let hovered = hovered.clone();
        let animator = animator.clone();
        let el = item.clone();
        dom::add_listener(item, event, move |_ev| {
            hovered.set(entered);
            animator.borrow_mut().hover(&el, entered);
        });
    }
}
