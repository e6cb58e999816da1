use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{HelmetMotion, HelmetVariant, MotionRole};
use crate::dom;
use crate::input;
use crate::render::HelmetRenderer;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Anything advanced once per display refresh.
pub trait FrameDriver {
    fn frame(&mut self);
}

/// Run `driver` on every animation frame for the lifetime of the page.
pub fn start_loop<T: FrameDriver + 'static>(driver: Rc<RefCell<T>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        driver.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// One mounted helmet: its motion state, its surface and the shared inputs
/// it reads each frame.
pub struct HelmetView {
    pub motion: HelmetMotion,
    pub scale: f32,
    pub canvas: web::HtmlCanvasElement,
    pub css_px: u32,
    pub renderer: HelmetRenderer,
    pub pointer: Rc<Cell<Vec2>>,
    pub hovered: Option<Rc<Cell<bool>>>,
    pub last_instant: Instant,
}

impl HelmetView {
    pub fn new(
        variant: HelmetVariant,
        canvas: web::HtmlCanvasElement,
        css_px: u32,
        renderer: HelmetRenderer,
        pointer: Rc<Cell<Vec2>>,
        hovered: Option<Rc<Cell<bool>>>,
    ) -> Self {
        let role = match variant {
            HelmetVariant::Hero => MotionRole::Hero,
            HelmetVariant::Gallery { index } => MotionRole::Gallery { index },
        };
        Self {
            motion: HelmetMotion::new(role),
            scale: variant.scale(),
            canvas,
            css_px,
            renderer,
            pointer,
            hovered,
            last_instant: Instant::now(),
        }
    }
}

impl FrameDriver for HelmetView {
    fn frame(&mut self) {
        self.motion
            .set_target(input::target_rotation(self.pointer.get()));
        if let Some(h) = &self.hovered {
            self.motion.set_hovered(h.get());
        }
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.motion.tick(dt);

        dom::sync_canvas_backing_size(&self.canvas, self.css_px);
        self.renderer
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        match self.renderer.render(self.motion.model_matrix(self.scale)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::error!("[render] {:?}", e),
        }
    }
}
