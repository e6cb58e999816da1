#![cfg(target_arch = "wasm32")]
use crate::animate::Animator;
use crate::constants::{
    GALLERY_ITEM, GALLERY_MOUNT, GALLERY_SURFACE_PX, HERO_MOUNT_ID, HERO_SURFACE_PX,
    TRANSITION_OVERLAY_ID,
};
use crate::core::helmet::discard_mounts_on_failure;
use crate::core::{build_for_mount, HelmetModel, HelmetVariant};
use crate::frame::HelmetView;
use crate::render::{GpuContext, HelmetRenderer};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animate;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod lazy;
mod menu;
mod overlay;
mod render;
mod scroll;

/// A mount point that received a canvas and a helmet model.
struct Mount {
    canvas: web::HtmlCanvasElement,
    css_px: u32,
    model: HelmetModel,
    hovered: Option<Rc<Cell<bool>>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("helmet-site starting");

    when_dom_ready(|| {
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
    });
    Ok(())
}

fn when_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = dom::window_document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    dom::add_listener(&document, "DOMContentLoaded", move |_ev| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion(&window);
    let animator = Rc::new(RefCell::new(Animator::new(reduced_motion)));
    if let Some(el) = document
        .get_element_by_id(TRANSITION_OVERLAY_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        animator.borrow_mut().bind_transition(el);
    }
    scroll::wire_scroll_effects(&document, &mut animator.borrow_mut());
    menu::wire_menu(&document, &animator);
    events::wire_anchor_links(&document, &animator);
    events::wire_relayout_on_resize(&window, &animator);
    lazy::wire_lazy_images(&document);
    frame::start_loop(animator.clone());

    let pointer = Rc::new(Cell::new(Vec2::ZERO));
    events::wire_pointer_target(&window, pointer.clone());

    let mounts = collect_mounts(&document, &animator);
    log::info!(
        "[init] reduced_motion={} helmet mounts={}",
        reduced_motion,
        mounts.len()
    );
    if mounts.is_empty() {
        return Ok(());
    }
    let canvases: Vec<web::HtmlCanvasElement> =
        mounts.iter().map(|m| m.canvas.clone()).collect();
    let started = start_renderers(mounts, pointer).await;
    discard_mounts_on_failure(&canvases, started, |canvas| canvas.remove())
}

fn collect_mounts(document: &web::Document, animator: &Rc<RefCell<Animator>>) -> Vec<Mount> {
    let mut mounts = Vec::new();

    let hero = document.get_element_by_id(HERO_MOUNT_ID);
    if let Some((container, model)) = build_for_mount(hero, HelmetVariant::Hero) {
        if let Some(canvas) = dom::mount_canvas(document, &container, HERO_SURFACE_PX) {
            mounts.push(Mount {
                canvas,
                css_px: HERO_SURFACE_PX,
                model,
                hovered: None,
            });
        }
    }

    for (index, item) in dom::query_all(document, GALLERY_ITEM).iter().enumerate() {
        let hovered = Rc::new(Cell::new(false));
        events::wire_gallery_hover(item, hovered.clone(), animator);

        let container = item.query_selector(GALLERY_MOUNT).ok().flatten();
        let Some((container, model)) = build_for_mount(container, HelmetVariant::Gallery { index })
        else {
            continue;
        };
        if let Some(canvas) = dom::mount_canvas(document, &container, GALLERY_SURFACE_PX) {
            mounts.push(Mount {
                canvas,
                css_px: GALLERY_SURFACE_PX,
                model,
                hovered: Some(hovered),
            });
        }
    }
    mounts
}

async fn start_renderers(mounts: Vec<Mount>, pointer: Rc<Cell<Vec2>>) -> anyhow::Result<()> {
    let instance = wgpu::Instance::default();
    let mut surfaces = Vec::with_capacity(mounts.len());
    for mount in mounts {
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(mount.canvas.clone()))
            .map_err(|e| anyhow::anyhow!(format!("create_surface error: {:?}", e)))?;
        surfaces.push((mount, surface));
    }
    let probe = surfaces
        .first()
        .map(|(_, s)| s)
        .ok_or_else(|| anyhow::anyhow!("no surfaces"))?;
    let gpu = Rc::new(GpuContext::new(&instance, probe).await?);

    let count = surfaces.len();
    for (mount, surface) in surfaces {
        let renderer = HelmetRenderer::new(
            gpu.clone(),
            surface,
            mount.canvas.width(),
            mount.canvas.height(),
            &mount.model,
        );
        let view = HelmetView::new(
            mount.model.variant,
            mount.canvas,
            mount.css_px,
            renderer,
            pointer.clone(),
            mount.hovered,
        );
        frame::start_loop(Rc::new(RefCell::new(view)));
    }
    log::info!("[init] {} helmet renderers running", count);
    Ok(())
}
