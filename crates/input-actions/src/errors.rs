//! # Error Types
//!
//! ## Overview
//!
//! This module contains the errors returned while looking up actions, parsing input names, and
//! loading binding profiles.

/// Errors returned while working with actions and their inputs.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum ActionError {
    /// No action is registered under the given name.
    #[error("Attempted to get undefined action {0:?}")]
    NotFound(String),

    /// Failure to interpret an input name.
    #[error("Invalid input name: {0:?}")]
    InvalidInput(String),

    /// Failure to interpret a modifier key name.
    #[error("Invalid modifier key: {0:?}")]
    InvalidModifier(String),

    /// Failure while loading a binding profile.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Errors returned while parsing a binding profile.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum ProfileError {
    /// A line that doesn't look like `action = inputs`.
    #[error("Line {line}: cannot parse {text:?}")]
    Syntax {
        /// The 1-based line number.
        line: usize,

        /// The offending line.
        text: String,
    },

    /// A line that names an input that doesn't exist.
    #[error("Line {line}: unknown input {name:?}")]
    UnknownInput {
        /// The 1-based line number.
        line: usize,

        /// The unrecognized input name.
        name: String,
    },

    /// A line that binds an action already bound earlier in the profile.
    #[error("Line {line}: action {name:?} is bound more than once")]
    DuplicateAction {
        /// The 1-based line number.
        line: usize,

        /// The repeated action name.
        name: String,
    },
}

/// Common result type for action operations.
pub type ActionResult<V> = Result<V, ActionError>;
