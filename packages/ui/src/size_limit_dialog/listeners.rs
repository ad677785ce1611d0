use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::host::{Host, SharedHost, Subscription, WindowEvent, WindowEventKind};
use crate::layout::LayoutMode;

const ESCAPE_KEY: &str = "Escape";

struct Callbacks {
    layout: Cell<LayoutMode>,
    on_layout: Box<dyn Fn(LayoutMode)>,
    on_dismiss: Box<dyn Fn()>,
}

/// Window listeners backing a mounted dialog.
///
/// The resize subscription lives as long as this value. The keydown
/// subscription exists only while the dialog is visible and is one-shot:
/// after it has reported an Escape it ignores further presses until it is
/// released and acquired again. Dropping the controller releases whatever
/// is still registered.
pub struct DialogListeners {
    host: SharedHost,
    callbacks: Rc<Callbacks>,
    escape: RefCell<Option<Subscription>>,
    _resize: Subscription,
}

impl DialogListeners {
    /// Measure the viewport once and start tracking resizes.
    ///
    /// `on_layout` fires when a resize changes the layout mode; `on_dismiss`
    /// fires for the first Escape press of each visible period.
    pub fn new(
        host: SharedHost,
        on_layout: impl Fn(LayoutMode) + 'static,
        on_dismiss: impl Fn() + 'static,
    ) -> Self {
        let callbacks = Rc::new(Callbacks {
            layout: Cell::new(LayoutMode::for_width(host.viewport_width())),
            on_layout: Box::new(on_layout),
            on_dismiss: Box::new(on_dismiss),
        });

        let resize = host.listen(WindowEventKind::Resize, {
            let callbacks = callbacks.clone();
            Rc::new(move |event: &WindowEvent| {
                if let WindowEvent::Resize { width } = event {
                    let mode = LayoutMode::for_width(*width);
                    if callbacks.layout.replace(mode) != mode {
                        tracing::debug!("Dialog layout changed to {:?} at {}px", mode, width);
                        (callbacks.on_layout)(mode);
                    }
                }
            })
        });

        Self {
            host,
            callbacks,
            escape: RefCell::new(None),
            _resize: resize,
        }
    }

    #[cfg(test)]
    pub(crate) fn layout(&self) -> LayoutMode {
        self.callbacks.layout.get()
    }

    #[cfg(test)]
    pub(crate) fn is_listening_for_escape(&self) -> bool {
        self.escape.borrow().is_some()
    }

    /// Acquire or release the Escape listener to match `visible`.
    ///
    /// Acquiring while a listener is already held is a no-op, so a spent
    /// listener stays spent until a `false` call releases it.
    pub fn set_visible(&self, visible: bool) {
        let mut escape = self.escape.borrow_mut();
        match (visible, escape.is_some()) {
            (true, false) => {
                let callbacks = self.callbacks.clone();
                let armed = Cell::new(true);
                *escape = Some(self.host.listen(
                    WindowEventKind::KeyDown,
                    Rc::new(move |event: &WindowEvent| {
                        let is_escape =
                            matches!(event, WindowEvent::KeyDown { key } if key == ESCAPE_KEY);
                        if is_escape && armed.replace(false) {
                            (callbacks.on_dismiss)();
                        }
                    }),
                ));
            }
            (false, true) => {
                escape.take();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    struct Fixture {
        host: MemoryHost,
        dismissed: Rc<Cell<u32>>,
        layouts: Rc<RefCell<Vec<LayoutMode>>>,
    }

    impl Fixture {
        fn new(width: f64) -> Self {
            Self {
                host: MemoryHost::with_width(width),
                dismissed: Rc::new(Cell::new(0)),
                layouts: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn listeners(&self) -> DialogListeners {
            let dismissed = self.dismissed.clone();
            let layouts = self.layouts.clone();
            DialogListeners::new(
                SharedHost::new(self.host.clone()),
                move |mode| layouts.borrow_mut().push(mode),
                move || dismissed.set(dismissed.get() + 1),
            )
        }
    }

    #[test]
    fn test_initial_measurement() {
        assert_eq!(Fixture::new(599.0).listeners().layout(), LayoutMode::Compact);
        assert_eq!(Fixture::new(600.0).listeners().layout(), LayoutMode::Compact);
        assert_eq!(Fixture::new(601.0).listeners().layout(), LayoutMode::Wide);
    }

    #[test]
    fn test_resize_listener_lives_while_hidden() {
        let fx = Fixture::new(1024.0);
        let listeners = fx.listeners();

        assert_eq!(fx.host.listener_count(WindowEventKind::Resize), 1);
        assert_eq!(fx.host.listener_count(WindowEventKind::KeyDown), 0);

        fx.host.resize(480.0);
        assert_eq!(listeners.layout(), LayoutMode::Compact);
        fx.host.resize(500.0);
        fx.host.resize(800.0);
        assert_eq!(listeners.layout(), LayoutMode::Wide);

        // Only transitions are reported
        assert_eq!(
            *fx.layouts.borrow(),
            vec![LayoutMode::Compact, LayoutMode::Wide]
        );
    }

    #[test]
    fn test_escape_dismisses_only_while_visible() {
        let fx = Fixture::new(1024.0);
        let listeners = fx.listeners();

        fx.host.press_key(ESCAPE_KEY);
        assert_eq!(fx.dismissed.get(), 0);

        listeners.set_visible(true);
        fx.host.press_key("Enter");
        assert_eq!(fx.dismissed.get(), 0);
        fx.host.press_key(ESCAPE_KEY);
        assert_eq!(fx.dismissed.get(), 1);

        listeners.set_visible(false);
        fx.host.press_key(ESCAPE_KEY);
        assert_eq!(fx.dismissed.get(), 1);
        assert_eq!(fx.host.listener_count(WindowEventKind::KeyDown), 0);
    }

    #[test]
    fn test_escape_listener_is_one_shot() {
        let fx = Fixture::new(1024.0);
        let listeners = fx.listeners();

        listeners.set_visible(true);
        fx.host.press_key(ESCAPE_KEY);
        fx.host.press_key(ESCAPE_KEY);
        assert_eq!(fx.dismissed.get(), 1);

        // Still visible on the next render: the spent listener is not re-armed
        listeners.set_visible(true);
        fx.host.press_key(ESCAPE_KEY);
        assert_eq!(fx.dismissed.get(), 1);

        listeners.set_visible(false);
        listeners.set_visible(true);
        fx.host.press_key(ESCAPE_KEY);
        assert_eq!(fx.dismissed.get(), 2);
    }

    #[test]
    fn test_repeated_visible_does_not_duplicate_listener() {
        let fx = Fixture::new(1024.0);
        let listeners = fx.listeners();

        listeners.set_visible(true);
        listeners.set_visible(true);
        assert!(listeners.is_listening_for_escape());
        assert_eq!(fx.host.listener_count(WindowEventKind::KeyDown), 1);

        fx.host.press_key(ESCAPE_KEY);
        assert_eq!(fx.dismissed.get(), 1);
    }

    #[test]
    fn test_drop_while_visible_releases_everything() {
        let fx = Fixture::new(1024.0);
        let listeners = fx.listeners();
        listeners.set_visible(true);
        assert_eq!(fx.host.listener_count(WindowEventKind::KeyDown), 1);

        drop(listeners);

        assert_eq!(fx.host.listener_count(WindowEventKind::Resize), 0);
        assert_eq!(fx.host.listener_count(WindowEventKind::KeyDown), 0);
        fx.host.press_key(ESCAPE_KEY);
        fx.host.resize(300.0);
        assert_eq!(fx.dismissed.get(), 0);
        assert!(fx.layouts.borrow().is_empty());
    }
}
