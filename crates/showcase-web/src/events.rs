use crate::dom;
use crate::viewport;
use showcase_core::Showcase;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

fn listen<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

fn page_scroll(window: &web::Window) -> Option<(f32, f32, f32)> {
    let top = window.scroll_y().ok()? as f32;
    let viewport_h = window.inner_height().ok()?.as_f64()? as f32;
    let height = window.document()?.document_element()?.scroll_height() as f32;
    Some((top, height, viewport_h))
}

fn track_pointer(show: &RefCell<Showcase>, canvas: &web::HtmlCanvasElement, ev: &web::MouseEvent) {
    let rect = canvas.get_bounding_client_rect();
    let (x, y) = viewport::local_point(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    );
    show.borrow_mut()
        .input
        .on_pointer_move(x, y, rect.width() as f32, rect.height() as f32);
}

/// Forward DOM events into the showcase inbox. Handlers only stage input;
/// all reactions happen on the next frame.
pub fn wire_input_handlers(show: Rc<RefCell<Showcase>>, canvas: web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        log::error!("[events] no window; input disabled");
        return;
    };

    // Pointer position is tracked page-wide so hover clears when leaving the canvas.
    {
        let show = show.clone();
        let canvas_m = canvas.clone();
        listen(&window, "pointermove", move |ev: web::PointerEvent| {
            track_pointer(&show, &canvas_m, &ev);
        });
    }
    {
        let show = show.clone();
        let canvas_m = canvas.clone();
        listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
            track_pointer(&show, &canvas_m, &ev);
            show.borrow_mut().input.on_pointer_down();
        });
    }
    {
        let show = show.clone();
        listen(&window, "pointerup", move |_ev: web::PointerEvent| {
            show.borrow_mut().input.on_pointer_up();
        });
    }
    {
        let show = show.clone();
        listen(&canvas, "click", move |_ev: web::MouseEvent| {
            show.borrow_mut().input.on_click();
        });
    }
    {
        let show = show.clone();
        listen(&canvas, "dblclick", move |_ev: web::MouseEvent| {
            show.borrow_mut().input.on_double_click();
        });
    }
    {
        let show = show.clone();
        listen(&window, "keydown", move |ev: web::KeyboardEvent| {
            show.borrow_mut().input.on_key_down(&ev.key(), ev.repeat());
        });
    }
    {
        let show = show.clone();
        let wnd = window.clone();
        listen(&window, "scroll", move |_ev: web::Event| {
            if let Some((top, height, vh)) = page_scroll(&wnd) {
                show.borrow_mut().input.on_scroll(top, height, vh);
            }
        });
    }
    {
        let show = show.clone();
        let canvas_r = canvas.clone();
        listen(&window, "resize", move |_ev: web::Event| {
            let (w, h) = dom::sync_canvas_backing_size(&canvas_r);
            show.borrow_mut().resize(w, h);
        });
    }

    // Pick up an initial scroll offset (reload mid-page).
    if let Some((top, height, vh)) = page_scroll(&window) {
        show.borrow_mut().input.on_scroll(top, height, vh);
    }
}
