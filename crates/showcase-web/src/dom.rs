use crate::viewport;
use showcase_core::{CursorStyle, HostSurface, StatusMessage};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size; returns the pixel size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = viewport::backing_size(rect.width(), rect.height(), dpr);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    (w, h)
}

/// Page feedback: `#status` text/colour, canvas cursor, document fullscreen.
pub struct DomHost {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    status: Option<web::HtmlElement>,
}

impl DomHost {
    pub fn new(document: web::Document, canvas: web::HtmlCanvasElement) -> Self {
        let status = document
            .get_element_by_id("status")
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if status.is_none() {
            log::warn!("[dom] no #status element; status updates are dropped");
        }
        Self {
            document,
            canvas,
            status,
        }
    }
}

impl HostSurface for DomHost {
    fn set_status(&mut self, status: StatusMessage) {
        let Some(el) = &self.status else {
            return;
        };
        el.set_text_content(Some(status.text()));
        let _ = el.style().set_property("color", &status.color().css());
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        let value = match cursor {
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
        };
        let _ = self.canvas.style().set_property("cursor", value);
    }

    fn toggle_fullscreen(&mut self) {
        if self.document.fullscreen_element().is_some() {
            self.document.exit_fullscreen();
            return;
        }
        if let Some(root) = self.document.document_element() {
            if let Err(e) = root.request_fullscreen() {
                log::warn!("[dom] fullscreen request rejected: {:?}", e);
            }
        }
    }
}
