//! Scoped event listeners.
//!
//! [`EventBus::subscribe`] returns a [`Subscription`] guard. The listener
//! stays registered exactly as long as the guard lives: dropping it, or
//! calling [`Subscription::unsubscribe`], removes the listener. The guard
//! holds only a weak reference, so it may outlive the bus.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`). Listeners may
//! subscribe or unsubscribe while an event is being emitted; such changes
//! take effect from the next emit.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Identifies one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Something listeners can be removed from.
pub trait ListenerRegistry {
    /// Removes a listener. Returns false if it was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;

    fn contains(&self, id: ListenerId) -> bool;
}

type Listener<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct BusInner<E> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener<E>)>>,
}

impl<E> ListenerRegistry for BusInner<E> {
    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        before != listeners.len()
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(existing, _)| *existing == id)
    }
}

/// A single-threaded list of listeners for events of type `E`.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tailor_search::EventBus;
///
/// let bus: EventBus<u32> = EventBus::new();
/// let total = Rc::new(Cell::new(0));
///
/// let sink = Rc::clone(&total);
/// let subscription = bus.subscribe(move |n: &u32| sink.set(sink.get() + n));
/// bus.emit(&2);
/// drop(subscription);
/// bus.emit(&5);
///
/// assert_eq!(total.get(), 2);
/// assert_eq!(bus.listener_count(), 0);
/// ```
pub struct EventBus<E> {
    inner: Rc<BusInner<E>>,
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

impl<E: 'static> EventBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(BusInner {
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers a listener for as long as the returned guard lives.
    #[must_use = "dropping the subscription removes the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        let listener: Listener<E> = Rc::new(RefCell::new(listener));
        self.inner.listeners.borrow_mut().push((id, listener));
        trace!(id = id.0, "listener added");

        let registry: Rc<dyn ListenerRegistry> = self.inner.clone();
        Subscription {
            id,
            registry: Some(Rc::downgrade(&registry)),
        }
    }

    /// Calls every listener registered when the emit starts.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            // A listener that re-emits into itself is skipped on the inner call.
            match listener.try_borrow_mut() {
                Ok(mut callback) => callback(event),
                Err(_) => trace!("skipping re-entrant listener"),
            }
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Guard that removes its listener when dropped.
pub struct Subscription {
    id: ListenerId,
    registry: Option<Weak<dyn ListenerRegistry>>,
}

impl Subscription {
    /// The listener this guard controls.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|registry| registry.contains(self.id))
    }

    /// Removes the listener now. Calling it again does nothing.
    pub fn unsubscribe(&mut self) {
        if let Some(registry) = self.registry.take().and_then(|weak| weak.upgrade()) {
            if registry.remove_listener(self.id) {
                trace!(id = self.id.0, "listener removed");
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// A position in the component's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `point` is inside, edges included.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// A pointer press anywhere in the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}
