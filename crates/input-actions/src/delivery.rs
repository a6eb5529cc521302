//! # Input delivery
//!
//! ## Overview
//!
//! Actions don't watch devices themselves. Instead, they register a handler with an
//! [InputDelivery] service under their name, and the service calls that handler whenever one of
//! the bound inputs changes state. Game engines provide their own service; [LocalDelivery] is an
//! in-process implementation for tests, tools, and terminal applications.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::input::{InputIdentifier, InputObject, InputState};

/// A handler invoked with the action name, the transition, and the input that caused it.
pub type ActionHandler = Rc<dyn Fn(&str, InputState, &InputObject)>;

/// A service that routes physical input transitions to named action handlers.
///
/// Methods take `&self` so that a single service can be shared between a registry and all of
/// its actions, and so that handlers can rebind actions while they're being called.
pub trait InputDelivery {
    /// Call `handler` whenever any of `inputs` changes state, replacing any handler previously
    /// bound under `name`.
    fn bind_action(
        &self,
        name: &str,
        handler: ActionHandler,
        create_touch_button: bool,
        inputs: &[InputIdentifier],
    );

    /// Remove the handler bound under `name`, if there is one.
    fn unbind_action(&self, name: &str);
}

struct BoundAction {
    name: String,
    handler: ActionHandler,
    inputs: Vec<InputIdentifier>,
    touch_button: bool,
}

/// An [InputDelivery] service driven by explicit calls to [LocalDelivery::deliver].
///
/// Bindings form a stack: the most recently bound action that matches an input receives it, and
/// the input goes no further.
#[derive(Default)]
pub struct LocalDelivery {
    bound: RefCell<Vec<BoundAction>>,
}

impl LocalDelivery {
    /// Create a service with nothing bound.
    pub fn new() -> Self {
        LocalDelivery::default()
    }

    /// Route an input transition to the most recently bound matching action.
    ///
    /// Returns the name of the action that handled the input.
    pub fn deliver(&self, input: &InputObject) -> Option<String> {
        let target = self
            .bound
            .borrow()
            .iter()
            .rev()
            .find(|b| b.inputs.iter().any(|id| id.matches(input)))
            .map(|b| (b.name.clone(), b.handler.clone()));

        let Some((name, handler)) = target else {
            trace!(key = %input.key_code, input_type = %input.input_type, "no action bound for input");
            return None;
        };

        handler(&name, input.state, input);

        return Some(name);
    }

    /// Whether a handler is bound under `name`.
    pub fn is_bound(&self, name: &str) -> bool {
        self.bound.borrow().iter().any(|b| b.name == name)
    }

    /// The inputs bound under `name`.
    pub fn bound_inputs(&self, name: &str) -> Option<Vec<InputIdentifier>> {
        self.bound.borrow().iter().find(|b| b.name == name).map(|b| b.inputs.clone())
    }

    /// Whether the binding under `name` asked for an on-screen touch button.
    pub fn has_touch_button(&self, name: &str) -> bool {
        self.bound.borrow().iter().any(|b| b.name == name && b.touch_button)
    }

    /// The number of bound handlers.
    pub fn len(&self) -> usize {
        self.bound.borrow().len()
    }
}

impl InputDelivery for LocalDelivery {
    fn bind_action(
        &self,
        name: &str,
        handler: ActionHandler,
        create_touch_button: bool,
        inputs: &[InputIdentifier],
    ) {
        let mut bound = self.bound.borrow_mut();
        bound.retain(|b| b.name != name);
        bound.push(BoundAction {
            name: name.to_string(),
            handler,
            inputs: inputs.to_vec(),
            touch_button: create_touch_button,
        });

        debug!(action = name, inputs = inputs.len(), "bound action");
    }

    fn unbind_action(&self, name: &str) {
        let mut bound = self.bound.borrow_mut();
        let before = bound.len();
        bound.retain(|b| b.name != name);

        if bound.len() != before {
            debug!(action = name, "unbound action");
        }
    }
}

impl fmt::Debug for LocalDelivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = self.bound.borrow();
        let names: Vec<&str> = bound.iter().map(|b| b.name.as_str()).collect();

        f.debug_struct("LocalDelivery").field("bound", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, UserInputType};
    use std::cell::Cell;

    fn counter(hits: &Rc<Cell<usize>>) -> ActionHandler {
        let hits = hits.clone();

        Rc::new(move |_: &str, _: InputState, _: &InputObject| hits.set(hits.get() + 1))
    }

    #[test]
    fn test_deliver_matching() {
        let delivery = LocalDelivery::new();
        let hits = Rc::new(Cell::new(0));

        delivery.bind_action("jump", counter(&hits), false, &[KeyCode::Space.into()]);
        assert!(delivery.is_bound("jump"));
        assert_eq!(delivery.bound_inputs("jump"), Some(ids![KeyCode::Space]));

        let space = InputObject::key(KeyCode::Space, InputState::Begin);
        assert_eq!(delivery.deliver(&space), Some("jump".to_string()));
        assert_eq!(hits.get(), 1);

        let e = InputObject::key(KeyCode::Char('e'), InputState::Begin);
        assert_eq!(delivery.deliver(&e), None);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_rebind_same_name_replaces() {
        let delivery = LocalDelivery::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        delivery.bind_action("fire", counter(&first), false, &[UserInputType::MouseButton1.into()]);
        delivery.bind_action("fire", counter(&second), true, &[KeyCode::Space.into()]);
        assert_eq!(delivery.len(), 1);
        assert!(delivery.has_touch_button("fire"));

        let click = InputObject::of_type(UserInputType::MouseButton1, InputState::Begin);
        assert_eq!(delivery.deliver(&click), None);

        let space = InputObject::key(KeyCode::Space, InputState::Begin);
        assert_eq!(delivery.deliver(&space), Some("fire".to_string()));
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_newest_binding_sinks_input() {
        let delivery = LocalDelivery::new();
        let old = Rc::new(Cell::new(0));
        let new = Rc::new(Cell::new(0));

        delivery.bind_action("walk", counter(&old), false, &[KeyCode::Space.into()]);
        delivery.bind_action("jump", counter(&new), false, &[KeyCode::Space.into()]);

        let space = InputObject::key(KeyCode::Space, InputState::Begin);
        assert_eq!(delivery.deliver(&space), Some("jump".to_string()));
        assert_eq!((old.get(), new.get()), (0, 1));

        // Once the newer binding goes away, the older one sees input again.
        delivery.unbind_action("jump");
        assert_eq!(delivery.deliver(&space), Some("walk".to_string()));
        assert_eq!((old.get(), new.get()), (1, 1));

        // Unbinding an unknown name does nothing.
        delivery.unbind_action("jump");
        assert_eq!(delivery.len(), 1);
    }

    #[test]
    fn test_handler_can_unbind_itself() {
        let delivery = Rc::new(LocalDelivery::new());
        let service = delivery.clone();

        let handler: ActionHandler =
            Rc::new(move |name: &str, _: InputState, _: &InputObject| service.unbind_action(name));
        delivery.bind_action("once", handler, false, &[KeyCode::Return.into()]);

        let enter = InputObject::key(KeyCode::Return, InputState::Begin);
        assert_eq!(delivery.deliver(&enter), Some("once".to_string()));
        assert!(!delivery.is_bound("once"));
        assert_eq!(delivery.deliver(&enter), None);
    }
}
