use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use super::{Handler, Host, HostError, Subscription, WindowEvent, WindowEventKind};

/// Host backed by the browser's global `window`.
pub struct WebHost {
    window: Window,
}

impl WebHost {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        Ok(Self { window })
    }
}

fn inner_width(window: &Window) -> f64 {
    match window.inner_width().ok().and_then(|w| w.as_f64()) {
        Some(width) => width,
        None => {
            tracing::warn!("window.innerWidth is not a number; treating viewport as 0px");
            0.0
        }
    }
}

impl Host for WebHost {
    fn viewport_width(&self) -> f64 {
        inner_width(&self.window)
    }

    fn listen(&self, kind: WindowEventKind, handler: Handler) -> Subscription {
        let listener = match kind {
            WindowEventKind::Resize => {
                let window = self.window.clone();
                EventListener::new(&self.window, "resize", move |_| {
                    handler(&WindowEvent::Resize {
                        width: inner_width(&window),
                    });
                })
            }
            WindowEventKind::KeyDown => EventListener::new(&self.window, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    handler(&WindowEvent::KeyDown { key: event.key() });
                }
            }),
        };
        tracing::debug!("Registered window {:?} listener", kind);
        Subscription::new(move || {
            drop(listener);
            tracing::debug!("Released window {:?} listener", kind);
        })
    }
}
