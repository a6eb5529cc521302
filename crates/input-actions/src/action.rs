//! # Actions
//!
//! ## Overview
//!
//! An [Action] is a single named, rebindable input action. It owns the set of physical inputs it
//! is bound to, an optional modifier key that must be held for it to respond, and three event
//! streams for when it begins, changes, and ends.
//!
//! When the [InputDelivery] service reports a transition, the action checks its modifier key,
//! fires the matching event stream, updates whether it is active, and finally forwards the raw
//! transition to the callback it was created with.
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::delivery::{ActionHandler, InputDelivery};
use crate::input::{InputIdentifier, InputObject, InputState, ModifierKey};
use crate::signal::Signal;

/// The callback an action forwards every accepted transition to.
pub type ActionCallback = Box<dyn Fn(&str, InputState, &InputObject)>;

/// The payload of an action's event streams.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionEvent {
    /// The name of the action that fired.
    pub name: String,

    /// The input that caused it to fire.
    pub input: InputObject,
}

struct ActionInner {
    name: String,
    delivery: Rc<dyn InputDelivery>,
    handler: ActionHandler,
    callback: ActionCallback,

    modifier: Cell<Option<ModifierKey>>,
    bound_to: RefCell<Vec<InputIdentifier>>,
    is_bound: Cell<bool>,
    active: Cell<bool>,

    began: Signal<ActionEvent>,
    changed: Signal<ActionEvent>,
    ended: Signal<ActionEvent>,
}

impl ActionInner {
    fn dispatch(&self, state: InputState, input: &InputObject) {
        if let Some(key) = self.modifier.get() {
            if !input.is_modifier_key_down(key) {
                trace!(action = %self.name, modifier = %key, "modifier not held, ignoring input");
                return;
            }
        }

        let event = ActionEvent { name: self.name.clone(), input: input.clone() };

        match state {
            InputState::Begin => {
                self.began.fire(&event);
                self.active.set(true);
            },
            InputState::Change => {
                self.changed.fire(&event);
            },
            InputState::End => {
                self.ended.fire(&event);
                self.active.set(false);
            },
        }

        (self.callback)(&self.name, state, input);
    }
}

impl Drop for ActionInner {
    fn drop(&mut self) {
        if self.is_bound.get() {
            self.delivery.unbind_action(&self.name);
            debug!(action = %self.name, "dropped bound action");
        }
    }
}

/// A handle to a named input action.
///
/// Handles are cheap to clone, and every clone refers to the same action. The delivery service
/// only holds a weak reference, and dropping the last handle unbinds the action.
#[derive(Clone)]
pub struct Action {
    inner: Rc<ActionInner>,
}

impl Action {
    /// Create a new, unbound and inactive action.
    ///
    /// Nothing is registered with `delivery` until the action is [rebound](Action::rebind).
    pub fn new(
        name: impl Into<String>,
        delivery: Rc<dyn InputDelivery>,
        callback: ActionCallback,
        modifier: Option<ModifierKey>,
    ) -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<ActionInner>| {
            let weak = weak.clone();
            let handler: ActionHandler =
                Rc::new(move |_: &str, state: InputState, input: &InputObject| {
                    if let Some(inner) = weak.upgrade() {
                        inner.dispatch(state, input);
                    }
                });

            ActionInner {
                name: name.into(),
                delivery,
                handler,
                callback,
                modifier: Cell::new(modifier),
                bound_to: RefCell::new(vec![]),
                is_bound: Cell::new(false),
                active: Cell::new(false),
                began: Signal::new(),
                changed: Signal::new(),
                ended: Signal::new(),
            }
        });

        Action { inner }
    }

    /// The name of this action.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The inputs this action was last bound to.
    pub fn bound_inputs(&self) -> Vec<InputIdentifier> {
        self.inner.bound_to.borrow().clone()
    }

    /// Whether this action is currently registered with the delivery service.
    pub fn is_bound(&self) -> bool {
        self.inner.is_bound.get()
    }

    /// Whether this action has begun and not yet ended.
    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    /// The modifier key that must be held for this action to respond.
    pub fn modifier_key(&self) -> Option<ModifierKey> {
        self.inner.modifier.get()
    }

    /// Fires when a bound input begins.
    pub fn began(&self) -> &Signal<ActionEvent> {
        &self.inner.began
    }

    /// Fires when a bound input changes while held.
    pub fn changed(&self) -> &Signal<ActionEvent> {
        &self.inner.changed
    }

    /// Fires when a bound input ends.
    pub fn ended(&self) -> &Signal<ActionEvent> {
        &self.inner.ended
    }

    /// Replace the inputs this action is bound to.
    ///
    /// Any previous binding is removed from the delivery service first, so rebinding to the same
    /// inputs is harmless. Rebinding to no inputs leaves the action unbound. Character keys are
    /// stored lowercase.
    pub fn rebind(&self, inputs: &[InputIdentifier]) {
        let inner = &self.inner;

        if inner.is_bound.get() {
            inner.delivery.unbind_action(&inner.name);
            inner.is_bound.set(false);
        }

        let inputs: Vec<InputIdentifier> = inputs.iter().map(|id| id.normalized()).collect();
        *inner.bound_to.borrow_mut() = inputs.clone();

        if inputs.is_empty() {
            debug!(action = %inner.name, "rebound action to no inputs");
            return;
        }

        inner.delivery.bind_action(&inner.name, inner.handler.clone(), false, &inputs);
        inner.is_bound.set(true);
    }

    /// Replace the modifier key filter. This only affects input delivered afterwards.
    pub fn set_modifier_key(&self, modifier: Option<ModifierKey>) {
        self.inner.modifier.set(modifier);
    }

    /// Remove this action from the delivery service. Does nothing if it isn't bound.
    ///
    /// The action keeps its [bound inputs](Action::bound_inputs), so it can be inspected or
    /// rebound later.
    pub fn unbind(&self) {
        let inner = &self.inner;

        if inner.is_bound.get() {
            inner.delivery.unbind_action(&inner.name);
            inner.is_bound.set(false);
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.inner.name)
            .field("bound_to", &self.inner.bound_to.borrow())
            .field("is_bound", &self.inner.is_bound.get())
            .field("active", &self.inner.active.get())
            .field("modifier", &self.inner.modifier.get())
            .finish()
    }
}
