//! # client-kit
//!
//! ## Overview
//!
//! Small helpers that game clients reach for alongside their input handling:
//!
//! - [color] for adjusting, converting and interpolating colors
//! - [device] for classifying the host device and measuring its viewport
//!
//! Input bindings themselves live in the [input-actions] crate.
//!
//! [input-actions]: https://docs.rs/input-actions/latest/input_actions/

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_return)]

pub mod color;
pub mod device;
pub mod errors;

pub use self::color::{gradient, Color3};
pub use self::device::{DeviceCapabilities, DeviceInfo, DeviceType, Vector2};
pub use self::errors::{ColorError, ColorResult};
