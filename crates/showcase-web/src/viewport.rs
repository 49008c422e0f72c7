// Pure viewport helpers shared by the DOM wiring. No web-sys types here so
// host-side tests can include this file directly.

/// Backing-store pixel size for a CSS box at a device pixel ratio. Never 0.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Client (CSS px) coordinates relative to an element's top-left corner.
#[inline]
pub fn local_point(client_x: f64, client_y: f64, left: f64, top: f64) -> (f32, f32) {
    ((client_x - left) as f32, (client_y - top) as f32)
}

/// Model URL from the canvas `data-model` attribute, or `default` when the
/// attribute is missing or blank.
pub fn model_url(attribute: Option<&str>, default: &str) -> String {
    match attribute.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => default.to_string(),
    }
}
