//! # Terminal input
//!
//! ## Overview
//!
//! Conversions from [crossterm] events into [InputObject]s, so that terminal applications can
//! drive a [LocalDelivery](crate::LocalDelivery) straight from their event loop:
//!
//! ```no_run
//! use input_actions::{terminal::input_from_event, LocalDelivery};
//!
//! let delivery = LocalDelivery::new();
//!
//! loop {
//!     let event = crossterm::event::read().unwrap();
//!
//!     if let Some(input) = input_from_event(&event) {
//!         delivery.deliver(&input);
//!     }
//! }
//! ```
use crossterm::event::{
    Event,
    KeyCode as TermKeyCode,
    KeyEvent,
    KeyEventKind,
    KeyModifiers,
    ModifierKeyCode,
    MouseButton,
    MouseEvent,
    MouseEventKind,
};

use crate::input::{InputObject, InputState, KeyCode, ModifierKeys, UserInputType};

impl From<KeyModifiers> for ModifierKeys {
    fn from(mods: KeyModifiers) -> Self {
        let mut res = ModifierKeys::NONE;

        if mods.contains(KeyModifiers::SHIFT) {
            res |= ModifierKeys::SHIFT;
        }

        if mods.contains(KeyModifiers::CONTROL) {
            res |= ModifierKeys::CTRL;
        }

        if mods.contains(KeyModifiers::ALT) {
            res |= ModifierKeys::ALT;
        }

        if mods.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
            res |= ModifierKeys::META;
        }

        return res;
    }
}

fn key_code(code: TermKeyCode) -> KeyCode {
    match code {
        TermKeyCode::Char(' ') => KeyCode::Space,
        TermKeyCode::Char(c) => KeyCode::char(c),
        TermKeyCode::F(n) => KeyCode::F(n),
        TermKeyCode::Enter => KeyCode::Return,
        TermKeyCode::Tab | TermKeyCode::BackTab => KeyCode::Tab,
        TermKeyCode::Backspace => KeyCode::Backspace,
        TermKeyCode::Esc => KeyCode::Escape,
        TermKeyCode::Delete => KeyCode::Delete,
        TermKeyCode::Insert => KeyCode::Insert,
        TermKeyCode::Home => KeyCode::Home,
        TermKeyCode::End => KeyCode::End,
        TermKeyCode::PageUp => KeyCode::PageUp,
        TermKeyCode::PageDown => KeyCode::PageDown,
        TermKeyCode::Up => KeyCode::Up,
        TermKeyCode::Down => KeyCode::Down,
        TermKeyCode::Left => KeyCode::Left,
        TermKeyCode::Right => KeyCode::Right,
        TermKeyCode::Modifier(m) => {
            match m {
                ModifierKeyCode::LeftShift => KeyCode::LeftShift,
                ModifierKeyCode::RightShift => KeyCode::RightShift,
                ModifierKeyCode::LeftControl => KeyCode::LeftControl,
                ModifierKeyCode::RightControl => KeyCode::RightControl,
                ModifierKeyCode::LeftAlt => KeyCode::LeftAlt,
                ModifierKeyCode::RightAlt => KeyCode::RightAlt,
                ModifierKeyCode::LeftSuper | ModifierKeyCode::LeftMeta => KeyCode::LeftSuper,
                ModifierKeyCode::RightSuper | ModifierKeyCode::RightMeta => KeyCode::RightSuper,
                _ => KeyCode::Unknown,
            }
        },
        _ => KeyCode::Unknown,
    }
}

fn key_state(kind: KeyEventKind) -> InputState {
    match kind {
        KeyEventKind::Press => InputState::Begin,
        KeyEventKind::Repeat => InputState::Change,
        KeyEventKind::Release => InputState::End,
    }
}

fn mouse_type(button: MouseButton) -> UserInputType {
    match button {
        MouseButton::Left => UserInputType::MouseButton1,
        MouseButton::Right => UserInputType::MouseButton2,
        MouseButton::Middle => UserInputType::MouseButton3,
    }
}

impl From<KeyEvent> for InputObject {
    fn from(ke: KeyEvent) -> Self {
        let mut modifiers = ModifierKeys::from(ke.modifiers);

        if ke.code == TermKeyCode::BackTab {
            modifiers |= ModifierKeys::SHIFT;
        }

        InputObject::key(key_code(ke.code), key_state(ke.kind)).with_modifiers(modifiers)
    }
}

impl From<MouseEvent> for InputObject {
    fn from(me: MouseEvent) -> Self {
        let (input_type, state, delta) = match me.kind {
            MouseEventKind::Down(b) => (mouse_type(b), InputState::Begin, (0.0, 0.0)),
            MouseEventKind::Up(b) => (mouse_type(b), InputState::End, (0.0, 0.0)),
            MouseEventKind::Drag(b) => (mouse_type(b), InputState::Change, (0.0, 0.0)),
            MouseEventKind::Moved => (UserInputType::MouseMovement, InputState::Change, (0.0, 0.0)),
            MouseEventKind::ScrollUp => (UserInputType::MouseWheel, InputState::Change, (0.0, -1.0)),
            MouseEventKind::ScrollDown => (UserInputType::MouseWheel, InputState::Change, (0.0, 1.0)),
            MouseEventKind::ScrollLeft => {
                (UserInputType::MouseWheel, InputState::Change, (-1.0, 0.0))
            },
            MouseEventKind::ScrollRight => {
                (UserInputType::MouseWheel, InputState::Change, (1.0, 0.0))
            },
        };

        InputObject::of_type(input_type, state)
            .with_position(f32::from(me.column), f32::from(me.row))
            .with_delta(delta.0, delta.1)
            .with_modifiers(ModifierKeys::from(me.modifiers))
    }
}

/// Convert a terminal event into an input, if it represents one.
pub fn input_from_event(event: &Event) -> Option<InputObject> {
    match event {
        Event::Key(ke) => Some(InputObject::from(*ke)),
        Event::Mouse(me) => Some(InputObject::from(*me)),
        Event::FocusGained => Some(InputObject::of_type(UserInputType::Focus, InputState::Begin)),
        Event::FocusLost => Some(InputObject::of_type(UserInputType::Focus, InputState::End)),
        Event::Paste(_) | Event::Resize(_, _) => None,
    }
}
