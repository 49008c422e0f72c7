use showcase_core::{load_model_bytes, LoadError, ModelScene};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn fetch_error(e: JsValue) -> LoadError {
    LoadError::Fetch(format!("{:?}", e))
}

/// Download and parse the model. Any failure becomes a `LoadError`.
pub async fn fetch_model(url: &str) -> Result<ModelScene, LoadError> {
    let window = web::window().ok_or_else(|| LoadError::Fetch("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_error)?
        .dyn_into()
        .map_err(fetch_error)?;
    if !resp.ok() {
        return Err(LoadError::Fetch(format!(
            "{} {} ({})",
            resp.status(),
            resp.status_text(),
            url
        )));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    log::info!("[model] fetched {} bytes from {}", bytes.len(), url);
    load_model_bytes(&bytes)
}
