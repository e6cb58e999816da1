use crate::animate::Animator;
use crate::constants::ANCHOR_LINKS;
use crate::core::navigation::anchor_target;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// In-page links navigate through the animator instead of jumping.
pub fn wire_anchor_links(document: &web::Document, animator: &Rc<RefCell<Animator>>) {
    let links = dom::query_all(document, ANCHOR_LINKS);
    for link in &links {
        let animator = animator.clone();
        let anchor = link.clone();
        dom::add_listener(link, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let target = dom::window_document().and_then(|d| {
                anchor_target(&href, |selector| d.query_selector(selector).ok().flatten())
            });
            if let Some(target) = target {
                animator.borrow_mut().navigate(target);
            }
        });
    }
    log::info!("[anchors] {} in-page links", links.len());
}
