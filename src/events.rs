mod anchors;
mod hover;
mod pointer;

pub use anchors::wire_anchor_links;
pub use hover::wire_gallery_hover;
pub use pointer::wire_pointer_target;

use crate::animate::Animator;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-measure scroll triggers whenever the window is resized.
pub fn wire_relayout_on_resize(window: &web::Window, animator: &Rc<RefCell<Animator>>) {
    let animator = animator.clone();
    dom::add_listener(window, "resize", move |_ev| {
        animator.borrow_mut().relayout();
    });
}
