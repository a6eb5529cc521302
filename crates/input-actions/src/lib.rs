//! # input-actions
//!
//! ## Overview
//!
//! This crate lets game clients bind named gameplay actions (such as "jump" or "fire") to sets
//! of keys, mouse buttons, gamepad buttons and abstract player actions. Each [Action] tracks
//! whether it is currently held, can require a modifier key to be down, and exposes [Signal]s
//! for when it begins, changes and ends.
//!
//! Inputs reach actions through an [InputDelivery] service. The [LocalDelivery] service
//! provided here routes each [InputObject] to the most recently bound action that matches it,
//! and the [terminal] module converts [crossterm] events into inputs.
//!
//! Bindings can be saved and restored as text using a [BindingProfile].
//!
//! ## Example
//!
//! ```
//! use input_actions::{InputActions, InputObject, InputState, KeyCode, LocalDelivery};
//! use std::rc::Rc;
//!
//! let delivery = Rc::new(LocalDelivery::new());
//! let mut actions = InputActions::new(delivery.clone());
//!
//! actions.register("jump", |name, state, _| println!("{name}: {state:?}"), &[
//!     KeyCode::Space.into(),
//!     KeyCode::ButtonA.into(),
//! ]);
//!
//! delivery.deliver(&InputObject::key(KeyCode::Space, InputState::Begin));
//! assert!(actions.is_active("jump"));
//!
//! delivery.deliver(&InputObject::key(KeyCode::Space, InputState::End));
//! assert!(!actions.is_active("jump"));
//!
//! let profile = actions.profile();
//! assert_eq!(profile.to_string(), "jump = Space, ButtonA\n");
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::needless_return)]
#![allow(clippy::new_without_default)]
#![allow(clippy::type_complexity)]

#[macro_use]
mod util;

pub mod action;
pub mod delivery;
pub mod errors;
pub mod input;
pub mod profile;
pub mod registry;
pub mod signal;
pub mod terminal;

pub use crossterm;

pub use self::action::{Action, ActionCallback, ActionEvent};
pub use self::delivery::{ActionHandler, InputDelivery, LocalDelivery};
pub use self::errors::{ActionError, ActionResult, ProfileError};
pub use self::input::{
    InputIdentifier,
    InputObject,
    InputState,
    KeyCode,
    ModifierKey,
    ModifierKeys,
    PlayerAction,
    UserInputType,
};
pub use self::profile::{BindingProfile, ProfileEntry};
pub use self::registry::InputActions;
pub use self::signal::{Connection, Signal};
