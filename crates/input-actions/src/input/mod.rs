//! # Physical inputs
//!
//! ## Overview
//!
//! This module contains the vocabulary used to describe physical input: key codes, input types,
//! player actions, the identifiers that actions get bound to, and the [InputObject] that the
//! delivery service hands to an action whenever a bound input changes state.
//!
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use self::parse::{is_reserved, parse_identifier, quoted_char, Family};
use crate::errors::ActionError;

pub(crate) mod parse;

/// A keyboard key or gamepad button.
///
/// Letters are always stored lowercase, so `KeyCode::Char('e')` is the E key regardless of
/// whether Shift was held.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    /// A printable character key.
    Char(char),

    /// A function key, such as F1.
    F(u8),

    /// The space bar.
    Space,

    /// The Return (Enter) key.
    Return,

    /// The Tab key.
    Tab,

    /// The Backspace key.
    Backspace,

    /// The Escape key.
    Escape,

    /// The Delete key.
    Delete,

    /// The Insert key.
    Insert,

    /// The Home key.
    Home,

    /// The End key.
    End,

    /// The Page Up key.
    PageUp,

    /// The Page Down key.
    PageDown,

    /// The up arrow.
    Up,

    /// The down arrow.
    Down,

    /// The left arrow.
    Left,

    /// The right arrow.
    Right,

    /// The left Shift key.
    LeftShift,

    /// The right Shift key.
    RightShift,

    /// The left Control key.
    LeftControl,

    /// The right Control key.
    RightControl,

    /// The left Alt key.
    LeftAlt,

    /// The right Alt key.
    RightAlt,

    /// The left Super (Windows, Command) key.
    LeftSuper,

    /// The right Super (Windows, Command) key.
    RightSuper,

    /// Gamepad face button A.
    ButtonA,

    /// Gamepad face button B.
    ButtonB,

    /// Gamepad face button X.
    ButtonX,

    /// Gamepad face button Y.
    ButtonY,

    /// Gamepad left bumper.
    ButtonL1,

    /// Gamepad right bumper.
    ButtonR1,

    /// Gamepad left trigger.
    ButtonL2,

    /// Gamepad right trigger.
    ButtonR2,

    /// Gamepad left stick click.
    ButtonL3,

    /// Gamepad right stick click.
    ButtonR3,

    /// Gamepad Start button.
    ButtonStart,

    /// Gamepad Select button.
    ButtonSelect,

    /// D-pad up.
    DPadUp,

    /// D-pad down.
    DPadDown,

    /// D-pad left.
    DPadLeft,

    /// D-pad right.
    DPadRight,

    /// Gamepad left thumbstick.
    Thumbstick1,

    /// Gamepad right thumbstick.
    Thumbstick2,

    /// Input that has no key code, such as mouse or touch input.
    Unknown,
}

impl KeyCode {
    /// Create a [KeyCode::Char], folding letters to lowercase.
    pub fn char(c: char) -> Self {
        KeyCode::Char(c.to_ascii_lowercase())
    }

    /// This key, with a [KeyCode::Char] folded to lowercase.
    pub fn normalized(self) -> Self {
        match self {
            KeyCode::Char(c) => KeyCode::char(c),
            code => code,
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        let code = match name {
            "Space" => KeyCode::Space,
            "Return" | "Enter" => KeyCode::Return,
            "Tab" => KeyCode::Tab,
            "Backspace" => KeyCode::Backspace,
            "Escape" | "Esc" => KeyCode::Escape,
            "Delete" => KeyCode::Delete,
            "Insert" => KeyCode::Insert,
            "Home" => KeyCode::Home,
            "End" => KeyCode::End,
            "PageUp" => KeyCode::PageUp,
            "PageDown" => KeyCode::PageDown,
            "Up" => KeyCode::Up,
            "Down" => KeyCode::Down,
            "Left" => KeyCode::Left,
            "Right" => KeyCode::Right,
            "LeftShift" => KeyCode::LeftShift,
            "RightShift" => KeyCode::RightShift,
            "LeftControl" => KeyCode::LeftControl,
            "RightControl" => KeyCode::RightControl,
            "LeftAlt" => KeyCode::LeftAlt,
            "RightAlt" => KeyCode::RightAlt,
            "LeftSuper" => KeyCode::LeftSuper,
            "RightSuper" => KeyCode::RightSuper,
            "ButtonA" => KeyCode::ButtonA,
            "ButtonB" => KeyCode::ButtonB,
            "ButtonX" => KeyCode::ButtonX,
            "ButtonY" => KeyCode::ButtonY,
            "ButtonL1" => KeyCode::ButtonL1,
            "ButtonR1" => KeyCode::ButtonR1,
            "ButtonL2" => KeyCode::ButtonL2,
            "ButtonR2" => KeyCode::ButtonR2,
            "ButtonL3" => KeyCode::ButtonL3,
            "ButtonR3" => KeyCode::ButtonR3,
            "ButtonStart" => KeyCode::ButtonStart,
            "ButtonSelect" => KeyCode::ButtonSelect,
            "DPadUp" => KeyCode::DPadUp,
            "DPadDown" => KeyCode::DPadDown,
            "DPadLeft" => KeyCode::DPadLeft,
            "DPadRight" => KeyCode::DPadRight,
            "Thumbstick1" => KeyCode::Thumbstick1,
            "Thumbstick2" => KeyCode::Thumbstick2,
            "Unknown" => KeyCode::Unknown,
            _ => {
                if let Some(c) = quoted_char(name) {
                    return Some(KeyCode::char(c));
                }

                let mut chars = name.chars();

                return match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(KeyCode::char(c)),
                    (Some('F'), Some(_)) => name[1..].parse::<u8>().ok().map(KeyCode::F),
                    _ => None,
                };
            },
        };

        return Some(code);
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) if is_reserved(*c) => write!(f, "\"{}\"", c.escape_debug()),
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            KeyCode::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl FromStr for KeyCode {
    type Err = ActionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.parse::<InputIdentifier>()? {
            InputIdentifier::Key(code) => Ok(code),
            _ => Err(ActionError::InvalidInput(input.to_string())),
        }
    }
}

/// The kind of device or channel that produced an input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UserInputType {
    /// The primary (left) mouse button.
    MouseButton1,

    /// The secondary (right) mouse button.
    MouseButton2,

    /// The middle mouse button.
    MouseButton3,

    /// Mouse wheel scrolling.
    MouseWheel,

    /// Mouse movement without a button held.
    MouseMovement,

    /// A touch on a touchscreen.
    Touch,

    /// Keyboard input.
    Keyboard,

    /// The client window gaining or losing focus.
    Focus,

    /// Accelerometer readings.
    Accelerometer,

    /// Gyroscope readings.
    Gyro,

    /// Input from the numbered gamepad.
    Gamepad(u8),

    /// Text entered through an input method.
    TextInput,

    /// No particular input type.
    None,
}

impl UserInputType {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "MouseButton1" => UserInputType::MouseButton1,
            "MouseButton2" => UserInputType::MouseButton2,
            "MouseButton3" => UserInputType::MouseButton3,
            "MouseWheel" => UserInputType::MouseWheel,
            "MouseMovement" => UserInputType::MouseMovement,
            "Touch" => UserInputType::Touch,
            "Keyboard" => UserInputType::Keyboard,
            "Focus" => UserInputType::Focus,
            "Accelerometer" => UserInputType::Accelerometer,
            "Gyro" => UserInputType::Gyro,
            "TextInput" => UserInputType::TextInput,
            "None" => UserInputType::None,
            _ => {
                let n = name.strip_prefix("Gamepad")?.parse::<u8>().ok()?;

                return Some(UserInputType::Gamepad(n));
            },
        };

        return Some(kind);
    }
}

impl fmt::Display for UserInputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserInputType::Gamepad(n) => write!(f, "Gamepad{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// A movement action for the local player character.
///
/// Player actions are matched against a fixed set of default keys, so binding to
/// [PlayerAction::CharacterJump] responds to both [KeyCode::Space] and [KeyCode::ButtonA].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlayerAction {
    /// Move forward.
    CharacterForward,

    /// Move backward.
    CharacterBackward,

    /// Strafe left.
    CharacterLeft,

    /// Strafe right.
    CharacterRight,

    /// Jump.
    CharacterJump,
}

impl PlayerAction {
    /// The keys that trigger this player action.
    pub fn default_keys(&self) -> &'static [KeyCode] {
        match self {
            PlayerAction::CharacterForward => &[KeyCode::Char('w'), KeyCode::Up],
            PlayerAction::CharacterBackward => &[KeyCode::Char('s'), KeyCode::Down],
            PlayerAction::CharacterLeft => &[KeyCode::Char('a'), KeyCode::Left],
            PlayerAction::CharacterRight => &[KeyCode::Char('d'), KeyCode::Right],
            PlayerAction::CharacterJump => &[KeyCode::Space, KeyCode::ButtonA],
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "CharacterForward" => Some(PlayerAction::CharacterForward),
            "CharacterBackward" => Some(PlayerAction::CharacterBackward),
            "CharacterLeft" => Some(PlayerAction::CharacterLeft),
            "CharacterRight" => Some(PlayerAction::CharacterRight),
            "CharacterJump" => Some(PlayerAction::CharacterJump),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A physical input that an action can be bound to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputIdentifier {
    /// A specific key or gamepad button.
    Key(KeyCode),

    /// A player movement action.
    PlayerAction(PlayerAction),

    /// Any input of the given type.
    InputType(UserInputType),
}

impl InputIdentifier {
    /// This identifier, with any character key folded to lowercase.
    pub fn normalized(self) -> Self {
        match self {
            InputIdentifier::Key(code) => InputIdentifier::Key(code.normalized()),
            other => other,
        }
    }

    /// Whether the given input is covered by this identifier. Character keys match regardless
    /// of case.
    pub fn matches(&self, input: &InputObject) -> bool {
        match self {
            InputIdentifier::Key(KeyCode::Unknown) => false,
            InputIdentifier::Key(code) => input.key_code.normalized() == code.normalized(),
            InputIdentifier::PlayerAction(action) => {
                action.default_keys().contains(&input.key_code.normalized())
            },
            InputIdentifier::InputType(kind) => input.input_type == *kind,
        }
    }
}

impl From<KeyCode> for InputIdentifier {
    fn from(code: KeyCode) -> Self {
        InputIdentifier::Key(code.normalized())
    }
}

impl From<PlayerAction> for InputIdentifier {
    fn from(action: PlayerAction) -> Self {
        InputIdentifier::PlayerAction(action)
    }
}

impl From<UserInputType> for InputIdentifier {
    fn from(kind: UserInputType) -> Self {
        InputIdentifier::InputType(kind)
    }
}

impl fmt::Display for InputIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputIdentifier::Key(code) => fmt::Display::fmt(code, f),
            InputIdentifier::PlayerAction(action) => fmt::Display::fmt(action, f),
            InputIdentifier::InputType(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl FromStr for InputIdentifier {
    type Err = ActionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ActionError::InvalidInput(input.to_string());
        let (_, (family, name)) = parse_identifier(input).map_err(|_| invalid())?;

        let res = match family {
            Some(Family::Key) => KeyCode::from_name(name).map(InputIdentifier::Key),
            Some(Family::InputType) => UserInputType::from_name(name).map(InputIdentifier::InputType),
            Some(Family::PlayerAction) => {
                PlayerAction::from_name(name).map(InputIdentifier::PlayerAction)
            },
            None => {
                KeyCode::from_name(name)
                    .map(InputIdentifier::Key)
                    .or_else(|| UserInputType::from_name(name).map(InputIdentifier::InputType))
                    .or_else(|| PlayerAction::from_name(name).map(InputIdentifier::PlayerAction))
            },
        };

        return res.ok_or_else(invalid);
    }
}

/// The state transition that an input went through.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputState {
    /// The input started, such as a key being pressed.
    Begin,

    /// The input changed while held, such as a mouse drag or key repeat.
    Change,

    /// The input ended, such as a key being released.
    End,
}

/// A modifier key that an action can require to be held.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModifierKey {
    /// Either Shift key.
    Shift,

    /// Either Control key.
    Ctrl,

    /// Either Alt key.
    Alt,

    /// Either Meta (Super, Command) key.
    Meta,
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for ModifierKey {
    type Err = ActionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "Shift" => Ok(ModifierKey::Shift),
            "Ctrl" | "Control" => Ok(ModifierKey::Ctrl),
            "Alt" => Ok(ModifierKey::Alt),
            "Meta" => Ok(ModifierKey::Meta),
            _ => Err(ActionError::InvalidModifier(input.to_string())),
        }
    }
}

bitflags! {
    /// The set of modifier keys held down while an input was produced.
    #[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq)]
    pub struct ModifierKeys: u8 {
        /// No modifiers held.
        const NONE = 0b0000;

        /// Shift is held.
        const SHIFT = 0b0001;

        /// Control is held.
        const CTRL = 0b0010;

        /// Alt is held.
        const ALT = 0b0100;

        /// Meta is held.
        const META = 0b1000;
    }
}

impl From<ModifierKey> for ModifierKeys {
    fn from(key: ModifierKey) -> Self {
        match key {
            ModifierKey::Shift => ModifierKeys::SHIFT,
            ModifierKey::Ctrl => ModifierKeys::CTRL,
            ModifierKey::Alt => ModifierKeys::ALT,
            ModifierKey::Meta => ModifierKeys::META,
        }
    }
}

/// A single input state transition, as delivered to bound actions.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObject {
    /// The key involved, or [KeyCode::Unknown] for non-key input.
    pub key_code: KeyCode,

    /// The kind of input.
    pub input_type: UserInputType,

    /// The transition this input went through.
    pub state: InputState,

    /// Where the input happened, in screen units.
    pub position: (f32, f32),

    /// How far the input moved since the last transition.
    pub delta: (f32, f32),

    /// The modifier keys held when the input was produced.
    pub modifiers: ModifierKeys,
}

impl InputObject {
    /// Create an input for a key transition with no modifiers held.
    pub fn key(code: KeyCode, state: InputState) -> Self {
        let code = code.normalized();

        let input_type = match code {
            KeyCode::ButtonA |
            KeyCode::ButtonB |
            KeyCode::ButtonX |
            KeyCode::ButtonY |
            KeyCode::ButtonL1 |
            KeyCode::ButtonR1 |
            KeyCode::ButtonL2 |
            KeyCode::ButtonR2 |
            KeyCode::ButtonL3 |
            KeyCode::ButtonR3 |
            KeyCode::ButtonStart |
            KeyCode::ButtonSelect |
            KeyCode::DPadUp |
            KeyCode::DPadDown |
            KeyCode::DPadLeft |
            KeyCode::DPadRight |
            KeyCode::Thumbstick1 |
            KeyCode::Thumbstick2 => UserInputType::Gamepad(1),
            _ => UserInputType::Keyboard,
        };

        InputObject::new(code, input_type, state)
    }

    /// Create an input of a non-key type, such as a mouse button.
    pub fn of_type(input_type: UserInputType, state: InputState) -> Self {
        InputObject::new(KeyCode::Unknown, input_type, state)
    }

    /// Create an input from its parts, with no position, delta or modifiers.
    pub fn new(key_code: KeyCode, input_type: UserInputType, state: InputState) -> Self {
        InputObject {
            key_code,
            input_type,
            state,
            position: (0.0, 0.0),
            delta: (0.0, 0.0),
            modifiers: ModifierKeys::NONE,
        }
    }

    /// Replace the set of held modifiers.
    pub fn with_modifiers(mut self, modifiers: ModifierKeys) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replace the position of this input.
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = (x, y);
        self
    }

    /// Replace the movement delta of this input.
    pub fn with_delta(mut self, dx: f32, dy: f32) -> Self {
        self.delta = (dx, dy);
        self
    }

    /// Whether `key` was held when this input was produced.
    pub fn is_modifier_key_down(&self, key: ModifierKey) -> bool {
        self.modifiers.contains(ModifierKeys::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_names() {
        let space: InputIdentifier = "Space".parse().unwrap();
        assert_eq!(space, InputIdentifier::Key(KeyCode::Space));

        let e: InputIdentifier = "E".parse().unwrap();
        assert_eq!(e, InputIdentifier::Key(KeyCode::Char('e')));

        let f5: InputIdentifier = "F5".parse().unwrap();
        assert_eq!(f5, InputIdentifier::Key(KeyCode::F(5)));

        let mb1: InputIdentifier = "MouseButton1".parse().unwrap();
        assert_eq!(mb1, InputIdentifier::InputType(UserInputType::MouseButton1));

        let pad: InputIdentifier = "Gamepad2".parse().unwrap();
        assert_eq!(pad, InputIdentifier::InputType(UserInputType::Gamepad(2)));

        let jump: InputIdentifier = "CharacterJump".parse().unwrap();
        assert_eq!(jump, InputIdentifier::PlayerAction(PlayerAction::CharacterJump));
    }

    #[test]
    fn test_parse_family_prefix() {
        let space: InputIdentifier = "Enum.KeyCode.Space".parse().unwrap();
        assert_eq!(space, InputIdentifier::Key(KeyCode::Space));

        let touch: InputIdentifier = "UserInputType.Touch".parse().unwrap();
        assert_eq!(touch, InputIdentifier::InputType(UserInputType::Touch));

        let fwd: InputIdentifier = "PlayerActions.CharacterForward".parse().unwrap();
        assert_eq!(fwd, InputIdentifier::PlayerAction(PlayerAction::CharacterForward));

        // A family prefix restricts which names are accepted.
        assert!("KeyCode.MouseButton1".parse::<InputIdentifier>().is_err());
        assert!("UserInputType.Space".parse::<InputIdentifier>().is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<InputIdentifier>().is_err());
        assert!("Spacebar".parse::<InputIdentifier>().is_err());
        assert!("F".parse::<KeyCode>().is_ok());
        assert!("Fx".parse::<KeyCode>().is_err());
        assert!("Touch".parse::<KeyCode>().is_err());
        assert!("Hyper".parse::<ModifierKey>().is_err());

        match "Spacebar".parse::<InputIdentifier>() {
            Err(ActionError::InvalidInput(name)) => assert_eq!(name, "Spacebar"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_display_reparses() {
        let ids = [
            InputIdentifier::Key(KeyCode::Char('q')),
            InputIdentifier::Key(KeyCode::Char('1')),
            InputIdentifier::Key(KeyCode::F(12)),
            InputIdentifier::Key(KeyCode::LeftShift),
            InputIdentifier::Key(KeyCode::DPadLeft),
            InputIdentifier::InputType(UserInputType::MouseButton2),
            InputIdentifier::InputType(UserInputType::Gamepad(4)),
            InputIdentifier::InputType(UserInputType::None),
            InputIdentifier::PlayerAction(PlayerAction::CharacterLeft),
        ];

        for id in ids {
            assert_eq!(id.to_string().parse::<InputIdentifier>().unwrap(), id);
        }

        assert_eq!(KeyCode::Char('q').to_string(), "Q");
        assert_eq!(InputIdentifier::from(KeyCode::Char('Q')), InputIdentifier::Key(KeyCode::Char('q')));
        assert_eq!(ModifierKey::Ctrl.to_string(), "Ctrl");
        assert_eq!("Control".parse::<ModifierKey>().unwrap(), ModifierKey::Ctrl);
    }

    #[test]
    fn test_reserved_chars_quoted() {
        assert_eq!(KeyCode::Char(',').to_string(), "\",\"");
        assert_eq!(KeyCode::Char(' ').to_string(), "\" \"");
        assert_eq!(KeyCode::Char('"').to_string(), "\"\\\"\"");
        assert_eq!(KeyCode::Char('\n').to_string(), "\"\\n\"");
        assert_eq!(KeyCode::Char('\\').to_string(), "\\");

        for c in [',', '+', '=', '#', ' ', '"', '\\', '\'', '\t', '\n', '\u{7}'] {
            let id = InputIdentifier::from(KeyCode::Char(c));
            assert_eq!(id.to_string().parse::<InputIdentifier>().unwrap(), id, "{c:?}");
        }

        assert_eq!("KeyCode.\",\"".parse::<KeyCode>().unwrap(), KeyCode::Char(','));
        assert!("UserInputType.\",\"".parse::<InputIdentifier>().is_err());
    }

    #[test]
    fn test_uppercase_keys_match() {
        let e_down = InputObject::key(KeyCode::Char('e'), InputState::Begin);
        assert!(InputIdentifier::Key(KeyCode::Char('E')).matches(&e_down));

        // Inputs built by hand aren't folded, but still match.
        let raw = InputObject::new(KeyCode::Char('W'), UserInputType::Keyboard, InputState::Begin);
        assert!(InputIdentifier::Key(KeyCode::Char('w')).matches(&raw));
        assert!(InputIdentifier::from(PlayerAction::CharacterForward).matches(&raw));

        let upper = InputIdentifier::Key(KeyCode::Char('E'));
        assert_eq!(upper.normalized(), InputIdentifier::Key(KeyCode::Char('e')));
        assert_eq!(upper.to_string().parse::<InputIdentifier>().unwrap(), upper.normalized());
    }

    #[test]
    fn test_matches() {
        let e_down = InputObject::key(KeyCode::Char('E'), InputState::Begin);
        assert_eq!(e_down.key_code, KeyCode::Char('e'));
        assert_eq!(e_down.input_type, UserInputType::Keyboard);
        assert!(InputIdentifier::Key(KeyCode::Char('e')).matches(&e_down));
        assert!(InputIdentifier::InputType(UserInputType::Keyboard).matches(&e_down));
        assert!(!InputIdentifier::Key(KeyCode::Space).matches(&e_down));

        let click = InputObject::of_type(UserInputType::MouseButton1, InputState::Begin);
        assert!(InputIdentifier::InputType(UserInputType::MouseButton1).matches(&click));
        assert!(!InputIdentifier::Key(KeyCode::Unknown).matches(&click));

        let jump: InputIdentifier = PlayerAction::CharacterJump.into();
        let pad_a = InputObject::key(KeyCode::ButtonA, InputState::Begin);
        assert_eq!(pad_a.input_type, UserInputType::Gamepad(1));
        assert!(jump.matches(&pad_a));
        assert!(jump.matches(&InputObject::key(KeyCode::Space, InputState::End)));
        assert!(!jump.matches(&e_down));
    }

    #[test]
    fn test_modifier_keys() {
        let input = InputObject::key(KeyCode::Char('e'), InputState::Begin)
            .with_modifiers(ModifierKeys::SHIFT | ModifierKeys::CTRL);

        assert!(input.is_modifier_key_down(ModifierKey::Shift));
        assert!(input.is_modifier_key_down(ModifierKey::Ctrl));
        assert!(!input.is_modifier_key_down(ModifierKey::Alt));
        assert!(!input.is_modifier_key_down(ModifierKey::Meta));
    }
}
