//! # Event streams
//!
//! ## Overview
//!
//! A [Signal] fans a value out to every connected subscriber. Consumers only ever see a
//! `&Signal`, which lets them [connect](Signal::connect) and [wait](Signal::wait); firing is
//! reserved for the owner of the signal inside this crate.
//!
//! ## Example
//!
//! ```
//! use input_actions::{InputActions, InputObject, InputState, KeyCode, LocalDelivery};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let delivery = Rc::new(LocalDelivery::new());
//! let mut actions = InputActions::new(delivery.clone());
//! let jump = actions.register("jump", |_, _, _| {}, &[KeyCode::Space.into()]);
//!
//! let jumps = Rc::new(Cell::new(0));
//! let counter = jumps.clone();
//! let conn = jump.began().connect(move |_| counter.set(counter.get() + 1));
//!
//! delivery.deliver(&InputObject::key(KeyCode::Space, InputState::Begin));
//! assert_eq!(jumps.get(), 1);
//!
//! conn.disconnect();
//! delivery.deliver(&InputObject::key(KeyCode::Space, InputState::Begin));
//! assert_eq!(jumps.get(), 1);
//! ```
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use futures::channel::oneshot;

type Slot<T> = Rc<dyn Fn(&T)>;

struct Slots<T> {
    next_id: u64,
    slots: Vec<(u64, Slot<T>)>,
    waiters: Vec<oneshot::Sender<T>>,
}

trait Disconnect {
    fn disconnect(&mut self, id: u64) -> bool;
    fn is_connected(&self, id: u64) -> bool;
}

impl<T> Disconnect for Slots<T> {
    fn disconnect(&mut self, id: u64) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(sid, _)| *sid != id);

        return self.slots.len() != before;
    }

    fn is_connected(&self, id: u64) -> bool {
        self.slots.iter().any(|(sid, _)| *sid == id)
    }
}

/// A multi-subscriber broadcast of values of type `T`.
pub struct Signal<T> {
    inner: Rc<RefCell<Slots<T>>>,
}

impl<T: Clone + 'static> Signal<T> {
    pub(crate) fn new() -> Self {
        let slots = Slots { next_id: 0, slots: vec![], waiters: vec![] };

        Signal { inner: Rc::new(RefCell::new(slots)) }
    }

    /// Call `f` with every value fired on this signal until the returned [Connection] is
    /// disconnected.
    pub fn connect<F>(&self, f: F) -> Connection
    where
        F: Fn(&T) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.slots.push((id, Rc::new(f)));

        let slots: Rc<RefCell<dyn Disconnect>> = self.inner.clone();

        Connection { id, slots: Rc::downgrade(&slots) }
    }

    /// Get a receiver that completes with the next value fired on this signal.
    ///
    /// If the signal is dropped before firing again, the receiver is cancelled.
    pub fn wait(&self) -> oneshot::Receiver<T> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().waiters.push(tx);

        return rx;
    }

    /// The number of connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().slots.len()
    }

    /// Deliver `value` to every subscriber, and then to every pending waiter.
    ///
    /// Subscribers are snapshotted before any are called, so they may freely connect or
    /// disconnect while the signal is firing.
    pub(crate) fn fire(&self, value: &T) {
        let (slots, waiters) = {
            let mut inner = self.inner.borrow_mut();
            let slots: Vec<Slot<T>> = inner.slots.iter().map(|(_, s)| s.clone()).collect();
            let waiters = std::mem::take(&mut inner.waiters);

            (slots, waiters)
        };

        for slot in slots {
            slot(value);
        }

        for waiter in waiters {
            // The receiving end may have given up waiting.
            let _ = waiter.send(value.clone());
        }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();

        f.debug_struct("Signal")
            .field("subscribers", &inner.slots.len())
            .field("waiters", &inner.waiters.len())
            .finish()
    }
}

/// A subscription to a [Signal].
///
/// Dropping a `Connection` does not disconnect it; call [Connection::disconnect].
pub struct Connection {
    id: u64,
    slots: Weak<RefCell<dyn Disconnect>>,
}

impl Connection {
    /// Stop receiving values. Disconnecting more than once does nothing.
    pub fn disconnect(&self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().disconnect(self.id);
        }
    }

    /// Whether this subscription is still receiving values.
    pub fn is_connected(&self) -> bool {
        match self.slots.upgrade() {
            Some(slots) => slots.borrow().is_connected(self.id),
            None => false,
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fire_reaches_all() {
        let signal = Signal::<u32>::new();
        let total = Rc::new(Cell::new(0));

        let t1 = total.clone();
        let t2 = total.clone();
        signal.connect(move |v| t1.set(t1.get() + v));
        signal.connect(move |v| t2.set(t2.get() + v * 10));
        assert_eq!(signal.subscriber_count(), 2);

        signal.fire(&3);
        assert_eq!(total.get(), 33);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<u32>::new();
        let seen = Rc::new(Cell::new(0));

        let s = seen.clone();
        let conn = signal.connect(move |v| s.set(*v));
        assert!(conn.is_connected());

        conn.disconnect();
        assert!(!conn.is_connected());
        assert_eq!(signal.subscriber_count(), 0);

        signal.fire(&5);
        assert_eq!(seen.get(), 0);

        // Disconnecting again is harmless.
        conn.disconnect();

        // A connection outliving its signal is simply disconnected.
        drop(signal);
        assert!(!conn.is_connected());
    }

    #[test]
    fn test_connect_while_firing() {
        let signal = Rc::new(Signal::<u32>::new());
        let calls = Rc::new(Cell::new(0));

        let inner_signal = signal.clone();
        let c = calls.clone();
        signal.connect(move |_| {
            c.set(c.get() + 1);

            let c = c.clone();
            inner_signal.connect(move |_| c.set(c.get() + 100));
        });

        // The subscriber added during the first fire only sees later values.
        signal.fire(&0);
        assert_eq!(calls.get(), 1);
        assert_eq!(signal.subscriber_count(), 2);

        signal.fire(&0);
        assert_eq!(calls.get(), 102);
    }

    #[test]
    fn test_wait() {
        let signal = Signal::<&'static str>::new();
        let mut rx = signal.wait();
        assert_eq!(rx.try_recv(), Ok(None));

        signal.fire(&"first");
        signal.fire(&"second");
        assert_eq!(rx.try_recv(), Ok(Some("first")));

        // Waiting is one-shot, and dropping the signal cancels pending waits.
        let mut rx = signal.wait();
        drop(signal);
        assert!(rx.try_recv().is_err());

        let signal = Signal::<u8>::new();
        let rx = signal.wait();
        signal.fire(&7);
        assert_eq!(futures::executor::block_on(rx), Ok(7));
    }
}
