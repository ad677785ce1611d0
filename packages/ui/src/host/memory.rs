use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{Handler, Host, Subscription, WindowEvent, WindowEventKind};

const DEFAULT_WIDTH: f64 = 1024.0;

/// In-memory Host for testing and non-browser fallback.
#[derive(Clone)]
pub struct MemoryHost {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    width: f64,
    next_id: u64,
    listeners: Vec<Listener>,
}

struct Listener {
    id: u64,
    kind: WindowEventKind,
    handler: Handler,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }
}

impl MemoryHost {
    pub fn with_width(width: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                width,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Change the viewport width and fire a resize event.
    pub fn resize(&self, width: f64) {
        self.inner.borrow_mut().width = width;
        self.dispatch(&WindowEvent::Resize { width });
    }

    pub fn press_key(&self, key: &str) {
        self.dispatch(&WindowEvent::KeyDown {
            key: key.to_string(),
        });
    }

    /// Deliver `event` to every listener of its kind.
    pub fn dispatch(&self, event: &WindowEvent) {
        // Snapshot so handlers can release subscriptions while we iterate
        let handlers: Vec<Handler> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == event.kind())
            .map(|l| l.handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    pub fn listener_count(&self, kind: WindowEventKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }
}

impl Host for MemoryHost {
    fn viewport_width(&self) -> f64 {
        self.inner.borrow().width
    }

    fn listen(&self, kind: WindowEventKind, handler: Handler) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push(Listener { id, kind, handler });
            id
        };
        let inner: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|l| l.id != id);
            }
        })
    }
}
