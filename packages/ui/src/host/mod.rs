//! # Window host: viewport measurement and scoped listeners
//!
//! The dialog needs two things from its environment: the current viewport
//! width and window-level `resize`/`keydown` events. Both go through the
//! [`Host`] trait so the same component logic runs against the browser
//! ([`WebHost`], wasm32 only) and against [`MemoryHost`] in tests.
//!
//! Listeners are handed out as [`Subscription`] guards. A listener stays
//! registered exactly as long as its guard is alive; dropping the guard
//! deregisters it.

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use thiserror::Error;

mod memory;
pub use memory::MemoryHost;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebHost;

/// Window events the dialog listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowEventKind {
    Resize,
    KeyDown,
}

/// Payload delivered to a listener.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// The viewport was resized; `width` is measured at dispatch time.
    Resize { width: f64 },
    KeyDown { key: String },
}

impl WindowEvent {
    pub fn kind(&self) -> WindowEventKind {
        match self {
            WindowEvent::Resize { .. } => WindowEventKind::Resize,
            WindowEvent::KeyDown { .. } => WindowEventKind::KeyDown,
        }
    }
}

pub type Handler = Rc<dyn Fn(&WindowEvent)>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window is available")]
    NoWindow,
}

/// Source of viewport measurements and window events.
pub trait Host {
    /// Current viewport width in logical pixels.
    fn viewport_width(&self) -> f64;

    /// Register `handler` for `kind`. The listener lives until the returned
    /// guard is dropped.
    fn listen(&self, kind: WindowEventKind, handler: Handler) -> Subscription;
}

/// Guard for a registered listener. Dropping it releases the listener.
#[must_use = "dropping a Subscription immediately deregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Cloneable handle to a [`Host`], suitable for Dioxus context.
#[derive(Clone)]
pub struct SharedHost(Rc<dyn Host>);

impl SharedHost {
    pub fn new(host: impl Host + 'static) -> Self {
        Self(Rc::new(host))
    }

    /// The host for the current platform: the browser window on wasm32,
    /// an in-memory host everywhere else.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match WebHost::new() {
                Ok(host) => return Self::new(host),
                Err(e) => tracing::error!("Falling back to in-memory host: {}", e),
            }
        }
        Self::new(MemoryHost::default())
    }
}

impl Host for SharedHost {
    fn viewport_width(&self) -> f64 {
        self.0.viewport_width()
    }

    fn listen(&self, kind: WindowEventKind, handler: Handler) -> Subscription {
        self.0.listen(kind, handler)
    }
}

impl PartialEq for SharedHost {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedHost")
            .field(&self.viewport_width())
            .finish()
    }
}

/// The host provided by an ancestor, or the platform host if none was.
pub fn use_host() -> SharedHost {
    let provided = try_use_context::<SharedHost>();
    use_hook(move || provided.unwrap_or_else(SharedHost::platform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscription_releases_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        let sub = Subscription::new({
            let released = released.clone();
            move || released.set(released.get() + 1)
        });
        assert_eq!(released.get(), 0);
        drop(sub);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(
            WindowEvent::Resize { width: 10.0 }.kind(),
            WindowEventKind::Resize
        );
        assert_eq!(
            WindowEvent::KeyDown {
                key: "Escape".into()
            }
            .kind(),
            WindowEventKind::KeyDown
        );
    }

    #[test]
    fn test_shared_host_equality_is_identity() {
        let a = SharedHost::new(MemoryHost::default());
        let b = a.clone();
        let c = SharedHost::new(MemoryHost::default());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
