use crate::constants::REDUCED_MOTION_QUERY;
use crate::core::scroll::TriggerLayout;
use crate::core::Props;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Every element matching `selector`; an invalid selector matches nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Attach a listener for the page lifetime.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Document-relative geometry from layout offsets, so transforms applied by
/// the animations do not move the trigger.
pub fn layout_of(el: &web::HtmlElement) -> TriggerLayout {
    let mut top = 0.0_f32;
    let mut cur = Some(el.clone());
    while let Some(node) = cur {
        top += node.offset_top() as f32;
        cur = node
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    TriggerLayout {
        top,
        height: el.offset_height() as f32,
    }
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

pub fn apply_props(el: &web::HtmlElement, props: &Props) {
    let style = el.style();
    _ = style.set_property("opacity", &props.opacity_css());
    _ = style.set_property("transform", &props.transform_css());
    _ = style.set_property("filter", &props.filter_css());
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Append a square canvas of `css_px` CSS pixels to `container`, with its
/// backing store sized for the capped device pixel ratio.
pub fn mount_canvas(
    document: &web::Document,
    container: &web::Element,
    css_px: u32,
) -> Option<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let px = input::backing_px(css_px, dpr);
    canvas.set_width(px);
    canvas.set_height(px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_px));
    _ = style.set_property("height", &format!("{}px", css_px));
    container.append_child(&canvas).ok()?;
    Some(canvas)
}

/// Keep a canvas backing store in step with the device pixel ratio (zoom,
/// moving between displays).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css_px: u32) {
    if let Some(w) = web::window() {
        let px = input::backing_px(css_px, w.device_pixel_ratio());
        if canvas.width() != px || canvas.height() != px {
            canvas.set_width(px);
            canvas.set_height(px);
        }
    }
}

pub fn scroll_to(el: &web::Element, smooth: bool) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(if smooth {
        web::ScrollBehavior::Smooth
    } else {
        web::ScrollBehavior::Instant
    });
    opts.set_block(web::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
