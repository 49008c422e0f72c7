#![cfg(target_arch = "wasm32")]
use showcase_core::{ShowcaseConfig, Showcase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod fetch;
mod frame;
mod render;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let defaults = ShowcaseConfig::default();
    let model_url = viewport::model_url(
        canvas.get_attribute("data-model").as_deref(),
        &defaults.model_path,
    );
    let config = defaults.with_model_path(model_url.clone());
    let show = Rc::new(RefCell::new(Showcase::new(config)));
    show.borrow_mut().resize(width, height);

    events::wire_input_handlers(show.clone(), canvas.clone());

    // Model arrives out of band; the showcase runs with the placeholder until then.
    {
        let show = show.clone();
        spawn_local(async move {
            let result = fetch::fetch_model(&model_url).await;
            show.borrow_mut().on_model_loaded(result);
        });
    }

    // Initialize WebGPU (leak a canvas clone to satisfy 'static lifetime for surface)
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };

    let host = dom::DomHost::new(document, canvas.clone());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        show,
        host,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
