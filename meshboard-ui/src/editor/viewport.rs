// Window size tracking for the drawing surface.
//
// `WindowEvents` stands in for the window: it knows its inner size and fans
// resize notifications out to registered listeners. A `ViewportTracker`
// reads the size on mount and subscribes; dropping the tracker drops its
// `ListenerGuard`, which removes the callback again.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use meshboard_core::Size;
use tracing::{debug, info, trace};

type ListenerId = u64;
type ResizeCallback = Rc<dyn Fn(Size)>;

struct Registry {
    inner_size: Size,
    next_id: ListenerId,
    listeners: Vec<(ListenerId, ResizeCallback)>,
}

#[derive(Clone)]
pub struct WindowEvents {
    registry: Rc<RefCell<Registry>>,
}

impl WindowEvents {
    pub fn new(inner_size: Size) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                inner_size,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn inner_size(&self) -> Size {
        self.registry.borrow().inner_size
    }

    /// Record a new window size and notify every listener.
    pub fn resize(&self, size: Size) {
        let callbacks: Vec<ResizeCallback> = {
            let mut registry = self.registry.borrow_mut();
            registry.inner_size = size;
            registry.listeners.iter().map(|(_, cb)| cb.clone()).collect()
        };
        info!(
            width = size.width,
            height = size.height,
            listeners = callbacks.len(),
            "window resized"
        );

        // Registry is released first so a callback may add or drop listeners.
        for callback in callbacks {
            callback(size);
        }
    }

    pub fn add_resize_listener(&self, callback: impl Fn(Size) + 'static) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(callback)));
        debug!(id, total = registry.listeners.len(), "resize listener added");

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Removes its resize listener when dropped.
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            trace!(id = self.id, "window already gone, nothing to remove");
            return;
        };
        let mut registry = registry.borrow_mut();
        registry.listeners.retain(|(id, _)| *id != self.id);
        debug!(
            id = self.id,
            remaining = registry.listeners.len(),
            "resize listener removed"
        );
    }
}

/// Mirrors the window size for as long as it is alive.
pub struct ViewportTracker {
    size: Rc<Cell<Size>>,
    _listener: ListenerGuard,
}

impl ViewportTracker {
    pub fn mount(window: &WindowEvents) -> Self {
        let size = Rc::new(Cell::new(window.inner_size()));
        let sink = size.clone();
        let listener = window.add_resize_listener(move |new_size| sink.set(new_size));

        let initial = size.get();
        debug!(
            width = initial.width,
            height = initial.height,
            "viewport tracker mounted"
        );

        Self {
            size,
            _listener: listener,
        }
    }

    pub fn size(&self) -> Size {
        self.size.get()
    }
}
