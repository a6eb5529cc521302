//! # Device classification
//!
//! ## Overview
//!
//! Games often want to adjust their interface to the kind of device they're running on. This
//! module classifies the host into a [DeviceType] based on the input capabilities and viewport
//! size reported by a [DeviceInfo] implementation, and provides some viewport arithmetic.
//!
//! ```
//! use client_kit::device::{platform_type, DeviceCapabilities, DeviceInfo, DeviceType, Vector2};
//!
//! struct Phone;
//!
//! impl DeviceInfo for Phone {
//!     fn capabilities(&self) -> DeviceCapabilities {
//!         DeviceCapabilities { touch: true, ..Default::default() }
//!     }
//!
//!     fn viewport_size(&self) -> Option<Vector2> {
//!         Some(Vector2::new(390.0, 844.0))
//!     }
//!
//!     fn gui_inset(&self) -> (Vector2, Vector2) {
//!         (Vector2::new(0.0, 47.0), Vector2::new(0.0, 34.0))
//!     }
//! }
//!
//! assert_eq!(platform_type(&Phone), DeviceType::Mobile);
//! ```
use std::fmt;
use std::ops::Sub;

/// The smallest viewport, in pixels, that a touch-only device can have to count as a tablet.
const TABLET_MIN_SIZE: Vector2 = Vector2 { x: 1023.0, y: 767.0 };

/// A two-dimensional size or offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// The horizontal component.
    pub x: f32,

    /// The vertical component.
    pub y: f32,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Create a new vector.
    pub fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The broad category of device that the client is running on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DeviceType {
    /// A computer with a keyboard.
    Desktop,

    /// A small touchscreen device.
    Mobile,

    /// A game console attached to a television.
    Console,

    /// A large touchscreen device.
    Tablet,

    /// None of the above.
    Unknown,
}

impl DeviceType {
    /// The lowercase name of this device type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Console => "console",
            DeviceType::Tablet => "tablet",
            DeviceType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input capabilities reported by the host.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DeviceCapabilities {
    /// Whether a gamepad is connected.
    pub gamepad: bool,

    /// Whether the screen accepts touch input.
    pub touch: bool,

    /// Whether a keyboard is available.
    pub keyboard: bool,

    /// Whether the interface is being shown on a television viewed from a distance.
    pub ten_foot: bool,
}

/// Information about the device that the client is running on.
pub trait DeviceInfo {
    /// The input capabilities of the device.
    fn capabilities(&self) -> DeviceCapabilities;

    /// The size of the viewport in pixels, or `None` if there is currently no camera.
    fn viewport_size(&self) -> Option<Vector2>;

    /// The space reserved by the host interface at the top-left and bottom-right of the screen.
    fn gui_inset(&self) -> (Vector2, Vector2);
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        return a;
    }

    return gcd(b, a % b);
}

/// The size of the viewport, which is zero when the host has no camera.
pub fn viewport_size(device: &dyn DeviceInfo) -> Vector2 {
    device.viewport_size().unwrap_or(Vector2::ZERO)
}

/// The size of the viewport, minus the space reserved by the host interface.
pub fn viewport_size_with_inset(device: &dyn DeviceInfo) -> Vector2 {
    let (top_left, bottom_right) = device.gui_inset();

    viewport_size(device) - top_left - bottom_right
}

/// The aspect ratio of the viewport, reduced to lowest terms.
///
/// A viewport with no area has an aspect ratio of `(0, 0)`.
pub fn aspect_ratio(device: &dyn DeviceInfo) -> (u32, u32) {
    let size = viewport_size(device);
    let w = size.x.max(0.0).round() as u32;
    let h = size.y.max(0.0).round() as u32;

    match gcd(w, h) {
        0 => (0, 0),
        d => (w / d, h / d),
    }
}

/// Classify the device based on its capabilities and viewport size.
pub fn platform_type(device: &dyn DeviceInfo) -> DeviceType {
    let caps = device.capabilities();

    if caps.gamepad && caps.ten_foot {
        return DeviceType::Console;
    }

    if caps.touch && !caps.keyboard {
        let size = viewport_size(device);

        if size.x >= TABLET_MIN_SIZE.x && size.y >= TABLET_MIN_SIZE.y {
            return DeviceType::Tablet;
        } else {
            return DeviceType::Mobile;
        }
    }

    if caps.keyboard {
        return DeviceType::Desktop;
    }

    return DeviceType::Unknown;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeDevice {
        caps: DeviceCapabilities,
        viewport: Option<Vector2>,
        inset: (Vector2, Vector2),
    }

    impl FakeDevice {
        fn new(caps: DeviceCapabilities, w: f32, h: f32) -> Self {
            FakeDevice { caps, viewport: Some(Vector2::new(w, h)), ..Default::default() }
        }
    }

    impl DeviceInfo for FakeDevice {
        fn capabilities(&self) -> DeviceCapabilities {
            self.caps
        }

        fn viewport_size(&self) -> Option<Vector2> {
            self.viewport
        }

        fn gui_inset(&self) -> (Vector2, Vector2) {
            self.inset
        }
    }

    const TOUCH: DeviceCapabilities =
        DeviceCapabilities { gamepad: false, touch: true, keyboard: false, ten_foot: false };

    #[test]
    fn test_viewport_size() {
        let mut dev = FakeDevice::new(DeviceCapabilities::default(), 1920.0, 1080.0);
        assert_eq!(viewport_size(&dev), Vector2::new(1920.0, 1080.0));

        dev.inset = (Vector2::new(0.0, 36.0), Vector2::new(10.0, 4.0));
        assert_eq!(viewport_size_with_inset(&dev), Vector2::new(1910.0, 1040.0));

        dev.viewport = None;
        assert_eq!(viewport_size(&dev), Vector2::ZERO);
        assert_eq!(viewport_size_with_inset(&dev), Vector2::new(-10.0, -40.0));
    }

    #[test]
    fn test_aspect_ratio() {
        let caps = DeviceCapabilities::default();

        assert_eq!(aspect_ratio(&FakeDevice::new(caps, 1920.0, 1080.0)), (16, 9));
        assert_eq!(aspect_ratio(&FakeDevice::new(caps, 1024.0, 768.0)), (4, 3));
        assert_eq!(aspect_ratio(&FakeDevice::new(caps, 1000.0, 1000.0)), (1, 1));
        assert_eq!(aspect_ratio(&FakeDevice::new(caps, 0.0, 0.0)), (0, 0));
        assert_eq!(aspect_ratio(&FakeDevice::default()), (0, 0));
    }

    #[test]
    fn test_platform_type() {
        let console =
            DeviceCapabilities { gamepad: true, ten_foot: true, ..Default::default() };
        assert_eq!(platform_type(&FakeDevice::new(console, 1920.0, 1080.0)), DeviceType::Console);

        // A gamepad alone doesn't make a console.
        let pc_pad = DeviceCapabilities { gamepad: true, keyboard: true, ..Default::default() };
        assert_eq!(platform_type(&FakeDevice::new(pc_pad, 1920.0, 1080.0)), DeviceType::Desktop);

        assert_eq!(platform_type(&FakeDevice::new(TOUCH, 1024.0, 768.0)), DeviceType::Tablet);
        assert_eq!(platform_type(&FakeDevice::new(TOUCH, 1023.0, 767.0)), DeviceType::Tablet);
        assert_eq!(platform_type(&FakeDevice::new(TOUCH, 1023.0, 766.0)), DeviceType::Mobile);
        assert_eq!(platform_type(&FakeDevice::new(TOUCH, 390.0, 844.0)), DeviceType::Mobile);

        let laptop = DeviceCapabilities { touch: true, keyboard: true, ..Default::default() };
        assert_eq!(platform_type(&FakeDevice::new(laptop, 1366.0, 768.0)), DeviceType::Desktop);

        assert_eq!(platform_type(&FakeDevice::default()), DeviceType::Unknown);
    }

    #[test]
    fn test_device_type_names() {
        assert_eq!(DeviceType::Desktop.to_string(), "desktop");
        assert_eq!(DeviceType::Tablet.to_string(), "tablet");
        assert_eq!(DeviceType::Unknown.as_str(), "unknown");
    }
}
