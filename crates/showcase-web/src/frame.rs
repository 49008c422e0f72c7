use crate::dom::DomHost;
use crate::render;
use showcase_core::{FrameView, SceneRenderer, Showcase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keeps the simulation running when WebGPU is unavailable.
struct Headless;

impl SceneRenderer for Headless {
    fn render(&mut self, _frame: &FrameView<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct FrameContext<'a> {
    pub show: Rc<RefCell<Showcase>>,
    pub host: DomHost,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let mut show = self.show.borrow_mut();
        match self.gpu.as_mut() {
            Some(gpu) => {
                gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
                show.tick(&mut self.host, gpu);
            }
            None => show.tick(&mut self.host, &mut Headless),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
