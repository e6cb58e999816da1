use crate::core::navigation::lazy_source;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Swap `data-src` into `src` the first time each image scrolls into view.
/// Pages without `IntersectionObserver` keep their images as authored.
pub fn wire_lazy_images(document: &web::Document) {
    let images = dom::query_all(document, "img");
    if images.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let intersecting = entry.is_intersecting();
                let target = entry.target();
                if let Some(img) = target.dyn_ref::<web::HtmlImageElement>() {
                    if let Some(src) = lazy_source(intersecting, img.dataset().get("src")) {
                        img.set_src(&src);
                    }
                }
                if intersecting {
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer = match web::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(o) => o,
        Err(_) => {
            log::info!("[lazy] IntersectionObserver unavailable");
            return;
        }
    };
    for img in &images {
        observer.observe(img);
    }
    callback.forget();
    log::info!("[lazy] observing {} images", images.len());
}
