use crate::animate::Animator;
use crate::constants::HAMBURGER;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hook the hamburger button to the menu icon animation. A button without
/// three bar spans is left alone.
pub fn wire_menu(document: &web::Document, animator: &Rc<RefCell<Animator>>) {
    let Some(button) = dom::query_one(document, HAMBURGER) else {
        return;
    };
    let spans = dom::query_all_in(&button, "span");
    let [a, b, c] = match spans.as_slice() {
        [a, b, c, ..] => [a.clone(), b.clone(), c.clone()],
        _ => {
            log::warn!("[menu] {} needs three bar spans", HAMBURGER);
            return;
        }
    };
    animator.borrow_mut().bind_menu(button.clone().into(), [a, b, c]);

    let animator = animator.clone();
    dom::add_listener(&button, "click", move |_ev| {
        animator.borrow_mut().toggle_menu();
    });
}
