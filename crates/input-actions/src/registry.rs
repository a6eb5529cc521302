//! # Action registry
//!
//! ## Overview
//!
//! [InputActions] is the table of every named [Action] in a client session. It creates actions,
//! binds them to their initial inputs, looks them up by name, and tears them down again. It
//! doesn't sit in the input path itself: once an action is bound, the delivery service talks to
//! it directly.
//!
//! Registries are constructed around an injected [InputDelivery] service instead of living in a
//! global, so that each test (or each independent subsystem) can have its own.
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::action::{Action, ActionCallback};
use crate::delivery::InputDelivery;
use crate::errors::{ActionError, ActionResult};
use crate::input::{InputIdentifier, InputObject, InputState, ModifierKey};
use crate::profile::{BindingProfile, ProfileEntry};

/// A table of named input actions.
pub struct InputActions {
    delivery: Rc<dyn InputDelivery>,
    actions: HashMap<String, Action>,
}

impl InputActions {
    /// Create an empty registry whose actions bind through `delivery`.
    pub fn new(delivery: Rc<dyn InputDelivery>) -> Self {
        InputActions { delivery, actions: HashMap::new() }
    }

    fn create(
        &mut self,
        name: &str,
        callback: ActionCallback,
        modifier: Option<ModifierKey>,
        inputs: &[InputIdentifier],
    ) -> Action {
        if let Some(prev) = self.actions.remove(name) {
            debug!(action = name, "replacing previously registered action");
            prev.unbind();
        }

        let action = Action::new(name, self.delivery.clone(), callback, modifier);
        self.actions.insert(name.to_string(), action.clone());

        if !inputs.is_empty() {
            action.rebind(inputs);
        }

        return action;
    }

    /// Create an action named `name`, bound to `inputs`.
    ///
    /// If an action is already registered under `name`, it is unbound and replaced.
    pub fn register<F>(&mut self, name: &str, callback: F, inputs: &[InputIdentifier]) -> Action
    where
        F: Fn(&str, InputState, &InputObject) + 'static,
    {
        self.create(name, Box::new(callback), None, inputs)
    }

    /// Create an action named `name`, bound to `inputs`, that only responds while `modifier`
    /// is held.
    ///
    /// If an action is already registered under `name`, it is unbound and replaced.
    pub fn register_with_modifier<F>(
        &mut self,
        name: &str,
        callback: F,
        modifier: ModifierKey,
        inputs: &[InputIdentifier],
    ) -> Action
    where
        F: Fn(&str, InputState, &InputObject) + 'static,
    {
        self.create(name, Box::new(callback), Some(modifier), inputs)
    }

    /// Whether an action is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Get the action registered under `name`.
    pub fn get(&self, name: &str) -> ActionResult<Action> {
        self.actions
            .get(name)
            .cloned()
            .ok_or_else(|| ActionError::NotFound(name.to_string()))
    }

    /// Whether the action registered under `name` is active. Unknown actions are never active.
    pub fn is_active(&self, name: &str) -> bool {
        self.actions.get(name).map(Action::is_active).unwrap_or(false)
    }

    /// Unbind and remove the action registered under `name`, if there is one.
    pub fn unregister(&mut self, name: &str) {
        if let Some(action) = self.actions.remove(name) {
            action.unbind();
            debug!(action = name, "unregistered action");
        }
    }

    /// The names of every registered action, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// The number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Capture the modifier and inputs of every registered action, sorted by name.
    pub fn profile(&self) -> BindingProfile {
        let mut names: Vec<&String> = self.actions.keys().collect();
        names.sort();

        let mut profile = BindingProfile::default();

        for name in names {
            let action = &self.actions[name];

            profile.push(ProfileEntry {
                action: name.clone(),
                modifier: action.modifier_key(),
                inputs: action.bound_inputs(),
            });
        }

        return profile;
    }

    /// Rebind registered actions according to `profile`.
    ///
    /// Every action named in the profile must already be registered; otherwise this fails
    /// without changing anything. Actions the profile doesn't mention are left alone.
    pub fn apply_profile(&mut self, profile: &BindingProfile) -> ActionResult<()> {
        let mut targets = Vec::with_capacity(profile.len());

        for entry in profile.entries() {
            targets.push((self.get(&entry.action)?, entry));
        }

        for (action, entry) in targets {
            action.set_modifier_key(entry.modifier);
            action.rebind(&entry.inputs);
        }

        Ok(())
    }

    /// Parse `text` as a [BindingProfile] and apply it.
    ///
    /// Syntax errors are returned as [ActionError::Profile], and nothing is rebound.
    pub fn load_profile(&mut self, text: &str) -> ActionResult<()> {
        let profile: BindingProfile = text.parse()?;

        self.apply_profile(&profile)
    }
}

impl fmt::Debug for InputActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputActions").field("actions", &self.actions).finish()
    }
}
