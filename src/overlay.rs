use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement, opacity: f32) {
    let style = el.style();
    _ = style.set_property("visibility", "visible");
    _ = style.set_property("pointer-events", "auto");
    _ = style.set_property("opacity", &format!("{:.4}", opacity.clamp(0.0, 1.0)));
    _ = el.class_list().add_1("active");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    let style = el.style();
    _ = style.set_property("opacity", "0");
    _ = style.set_property("pointer-events", "none");
    // fallback for pages that only style the class
    _ = style.set_property("visibility", "hidden");
    _ = el.class_list().remove_1("active");
}
