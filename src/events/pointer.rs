use crate::dom;
use crate::input;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window as a normalized position shared
/// by every helmet instance.
pub fn wire_pointer_target(window: &web::Window, pointer: Rc<Cell<Vec2>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(w) = web::window() else {
            return;
        };
        let (vw, vh) = dom::viewport_size(&w);
        pointer.set(input::normalized_pointer(
            ev.client_x() as f32,
            ev.client_y() as f32,
            vw,
            vh,
        ));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
