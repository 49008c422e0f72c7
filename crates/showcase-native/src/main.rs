//! Desktop front-end: a winit window rendering the showcase with wgpu.
//!
//! Usage: `showcase-native [path/to/model.glb]`. Logging follows `RUST_LOG`
//! (default `info`).

mod gestures;
mod gpu;

use gestures::{wheel_lines_to_pixels, ClickTimer, VirtualScroll};
use gpu::GpuState;
use showcase_core::{load_model_file, CursorStyle, HostSurface, Showcase, ShowcaseConfig, StatusMessage};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::window::{CursorIcon, Fullscreen, Window, WindowBuilder};

const WINDOW_TITLE: &str = "Frostwyrm";
const DEFAULT_MODEL_PATH: &str = "model/icy_dragon.glb";

/// Status goes to the title bar; there is no page to write into.
struct WindowHost<'w> {
    window: &'w Window,
}

impl HostSurface for WindowHost<'_> {
    fn set_status(&mut self, status: StatusMessage) {
        self.window
            .set_title(&format!("{WINDOW_TITLE} | {}", status.text()));
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.window.set_cursor_icon(match cursor {
            CursorStyle::Default => CursorIcon::Default,
            CursorStyle::Pointer => CursorIcon::Pointer,
        });
    }

    fn toggle_fullscreen(&mut self) {
        let next = match self.window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        self.window.set_fullscreen(next);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let model_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());
    let config = ShowcaseConfig::default().with_model_path(model_path.clone());

    // Decode off the event-loop thread; the result is picked up between frames.
    let (load_tx, load_rx) = mpsc::channel();
    thread::Builder::new()
        .name("model-loader".into())
        .spawn(move || {
            log::info!("[model] loading {}", model_path);
            if load_tx.send(load_model_file(&model_path)).is_err() {
                log::debug!("[model] window closed before load finished");
            }
        })?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;
    let window = &window;

    let mut gpu = pollster::block_on(GpuState::new(window))?;
    let mut host = WindowHost { window };
    let mut show = Showcase::new(config);
    let size = window.inner_size();
    show.resize(size.width, size.height);

    let mut scroll = VirtualScroll::new(size.height as f32);
    let (top, height, viewport) = scroll.metrics();
    show.input.on_scroll(top, height, viewport);
    let mut clicks = ClickTimer::default();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                show.resize(size.width, size.height);
                scroll.set_viewport(size.height as f32);
                let (top, height, viewport) = scroll.metrics();
                show.input.on_scroll(top, height, viewport);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = window.inner_size();
                show.input.on_pointer_move(
                    position.x as f32,
                    position.y as f32,
                    size.width as f32,
                    size.height as f32,
                );
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => show.input.on_pointer_down(),
                ElementState::Released => {
                    show.input.on_pointer_up();
                    show.input.on_click();
                    if clicks.click(Instant::now()) {
                        show.input.on_double_click();
                    }
                }
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => wheel_lines_to_pixels(lines),
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                scroll.scroll_by(dy);
                let (top, height, viewport) = scroll.metrics();
                show.input.on_scroll(top, height, viewport);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Key::Character(text) = &event.logical_key {
                        show.input.on_key_down(text.as_str(), event.repeat);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                show.tick(&mut host, &mut gpu);
                if gpu.out_of_memory() {
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if let Ok(result) = load_rx.try_recv() {
                show.on_model_loaded(result);
            }
            window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
