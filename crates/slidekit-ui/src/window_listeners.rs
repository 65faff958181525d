//! Window-level continuation listener registry.
//!
//! While a pointer or touch drag is active, the slider needs to observe
//! move/release events anywhere in the window, not just over the track. This
//! module owns that process-wide (UI-thread-wide) resource: the host forwards
//! its window-level events through the `dispatch_*` functions, which no-op
//! unless a matching registration is active. At most one registration exists
//! at a time, and it is scoped: dropping the [`WindowListenerGuard`] returned
//! by `register_*` deterministically unregisters the handlers, so every exit
//! path of a drag session (release, forced stop, controller teardown)
//! releases the listeners.

use std::cell::RefCell;
use std::rc::Rc;

use slidekit_foundation::{PointerEvent, TouchEvent};

use crate::state::ContinuationModality;

thread_local! {
    static WINDOW_LISTENERS: RefCell<ListenerRegistry> = RefCell::new(ListenerRegistry::new());
}

type PointerHandler = Rc<dyn Fn(&PointerEvent)>;
type TouchHandler = Rc<dyn Fn(&TouchEvent)>;

enum Handlers {
    Pointer {
        on_move: PointerHandler,
        on_up: PointerHandler,
    },
    Touch {
        on_move: TouchHandler,
        on_end: TouchHandler,
    },
}

impl Handlers {
    fn modality(&self) -> ContinuationModality {
        match self {
            Handlers::Pointer { .. } => ContinuationModality::Pointer,
            Handlers::Touch { .. } => ContinuationModality::Touch,
        }
    }
}

struct Registration {
    id: u64,
    handlers: Handlers,
}

struct ListenerRegistry {
    next_id: u64,
    active: Option<Registration>,
}

impl ListenerRegistry {
    fn new() -> Self {
        Self {
            next_id: 0,
            active: None,
        }
    }

    fn register(&mut self, handlers: Handlers) -> u64 {
        if let Some(previous) = &self.active {
            log::warn!(
                "replacing active {:?} window listeners; a drag session leaked its guard",
                previous.handlers.modality()
            );
        }
        self.next_id += 1;
        let id = self.next_id;
        self.active = Some(Registration { id, handlers });
        id
    }

    fn unregister(&mut self, id: u64) {
        if self.active.as_ref().is_some_and(|active| active.id == id) {
            self.active = None;
        }
    }
}

/// Scoped ownership of the window listener registration.
///
/// Dropping the guard unregisters the handlers; a guard whose registration
/// was already replaced unregisters nothing.
#[must_use = "dropping the guard immediately would unregister the listeners"]
#[derive(Debug)]
pub struct WindowListenerGuard {
    id: u64,
}

impl Drop for WindowListenerGuard {
    fn drop(&mut self) {
        WINDOW_LISTENERS.with(|registry| registry.borrow_mut().unregister(self.id));
    }
}

/// Registers move/release handlers for an active pointer drag.
pub fn register_pointer_listeners(
    on_move: impl Fn(&PointerEvent) + 'static,
    on_up: impl Fn(&PointerEvent) + 'static,
) -> WindowListenerGuard {
    let id = WINDOW_LISTENERS.with(|registry| {
        registry.borrow_mut().register(Handlers::Pointer {
            on_move: Rc::new(on_move),
            on_up: Rc::new(on_up),
        })
    });
    WindowListenerGuard { id }
}

/// Registers move/end handlers for an active touch drag.
pub fn register_touch_listeners(
    on_move: impl Fn(&TouchEvent) + 'static,
    on_end: impl Fn(&TouchEvent) + 'static,
) -> WindowListenerGuard {
    let id = WINDOW_LISTENERS.with(|registry| {
        registry.borrow_mut().register(Handlers::Touch {
            on_move: Rc::new(on_move),
            on_end: Rc::new(on_end),
        })
    });
    WindowListenerGuard { id }
}

/// The modality currently holding the window listeners, if any.
pub fn active_modality() -> Option<ContinuationModality> {
    WINDOW_LISTENERS.with(|registry| {
        registry
            .borrow()
            .active
            .as_ref()
            .map(|active| active.handlers.modality())
    })
}

/// Forwards a window-level pointer move to the active pointer registration.
/// Ignored while no pointer drag is in progress.
pub fn dispatch_pointer_move(event: &PointerEvent) {
    if let Some(handler) = active_pointer_handler(|handlers| match handlers {
        Handlers::Pointer { on_move, .. } => Some(on_move.clone()),
        Handlers::Touch { .. } => None,
    }) {
        handler(event);
    }
}

/// Forwards a window-level pointer release to the active pointer
/// registration. Ignored while no pointer drag is in progress.
pub fn dispatch_pointer_up(event: &PointerEvent) {
    if let Some(handler) = active_pointer_handler(|handlers| match handlers {
        Handlers::Pointer { on_up, .. } => Some(on_up.clone()),
        Handlers::Touch { .. } => None,
    }) {
        handler(event);
    }
}

/// Forwards a window-level touch move to the active touch registration.
pub fn dispatch_touch_move(event: &TouchEvent) {
    if let Some(handler) = active_touch_handler(|handlers| match handlers {
        Handlers::Touch { on_move, .. } => Some(on_move.clone()),
        Handlers::Pointer { .. } => None,
    }) {
        handler(event);
    }
}

/// Forwards a window-level touch end/cancel to the active touch
/// registration.
pub fn dispatch_touch_end(event: &TouchEvent) {
    if let Some(handler) = active_touch_handler(|handlers| match handlers {
        Handlers::Touch { on_end, .. } => Some(on_end.clone()),
        Handlers::Pointer { .. } => None,
    }) {
        handler(event);
    }
}

// The handler is cloned out of the registry before it runs so the handler
// itself may register or unregister without re-entering the borrow.
fn active_pointer_handler(
    select: impl Fn(&Handlers) -> Option<PointerHandler>,
) -> Option<PointerHandler> {
    WINDOW_LISTENERS.with(|registry| {
        registry
            .borrow()
            .active
            .as_ref()
            .and_then(|active| select(&active.handlers))
    })
}

fn active_touch_handler(
    select: impl Fn(&Handlers) -> Option<TouchHandler>,
) -> Option<TouchHandler> {
    WINDOW_LISTENERS.with(|registry| {
        registry
            .borrow()
            .active
            .as_ref()
            .and_then(|active| select(&active.handlers))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::Point;
    use std::cell::Cell;

    #[test]
    fn dispatch_reaches_the_registered_handlers() {
        let moves = Rc::new(Cell::new(0));
        let ups = Rc::new(Cell::new(0));
        let guard = register_pointer_listeners(
            {
                let moves = moves.clone();
                move |_| moves.set(moves.get() + 1)
            },
            {
                let ups = ups.clone();
                move |_| ups.set(ups.get() + 1)
            },
        );

        dispatch_pointer_move(&PointerEvent::moved(Point::ZERO));
        dispatch_pointer_move(&PointerEvent::moved(Point::ZERO));
        dispatch_pointer_up(&PointerEvent::up(Point::ZERO));
        assert_eq!(moves.get(), 2);
        assert_eq!(ups.get(), 1);

        drop(guard);
        dispatch_pointer_move(&PointerEvent::moved(Point::ZERO));
        assert_eq!(moves.get(), 2);
    }

    #[test]
    fn events_outside_a_session_are_dropped() {
        let hits = Rc::new(Cell::new(0));
        dispatch_pointer_move(&PointerEvent::moved(Point::ZERO));
        assert_eq!(active_modality(), None);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn touch_registration_ignores_pointer_events() {
        let hits = Rc::new(Cell::new(0));
        let _guard = register_touch_listeners(
            {
                let hits = hits.clone();
                move |_| hits.set(hits.get() + 1)
            },
            |_| {},
        );
        assert_eq!(active_modality(), Some(ContinuationModality::Touch));

        dispatch_pointer_move(&PointerEvent::moved(Point::ZERO));
        assert_eq!(hits.get(), 0);

        dispatch_touch_move(&TouchEvent::moved(Point::ZERO));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn a_new_registration_replaces_the_previous_one() {
        let first = Rc::new(Cell::new(0));
        let stale_guard = register_pointer_listeners(
            {
                let first = first.clone();
                move |_| first.set(first.get() + 1)
            },
            |_| {},
        );

        let second = Rc::new(Cell::new(0));
        let _guard = register_pointer_listeners(
            {
                let second = second.clone();
                move |_| second.set(second.get() + 1)
            },
            |_| {},
        );

        dispatch_pointer_move(&PointerEvent::moved(Point::ZERO));
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);

        // the stale guard must not tear down the replacement registration
        drop(stale_guard);
        dispatch_pointer_move(&PointerEvent::moved(Point::ZERO));
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn a_handler_may_drop_its_own_guard() {
        let slot: Rc<RefCell<Option<WindowListenerGuard>>> = Rc::new(RefCell::new(None));
        let guard = register_pointer_listeners(|_| {}, {
            let slot = slot.clone();
            move |_| {
                slot.borrow_mut().take();
            }
        });
        *slot.borrow_mut() = Some(guard);

        dispatch_pointer_up(&PointerEvent::up(Point::ZERO));
        assert_eq!(active_modality(), None);
    }
}
