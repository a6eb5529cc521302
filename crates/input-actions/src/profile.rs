//! # Binding profiles
//!
//! ## Overview
//!
//! A [BindingProfile] is a plain-text description of which inputs each action is bound to,
//! suitable for saving a player's customized controls and loading them again later. Each line
//! binds one action:
//!
//! ```text
//! # Movement
//! jump = Space, ButtonA
//! fire = Ctrl+MouseButton1, ButtonR2  # Ctrl applies to both
//! menu =
//! ```
//!
//! A modifier prefix (`Shift+`, `Ctrl+`, `Alt+`, or `Meta+`) may appear once, before the first
//! input, and applies to the whole action. An empty list of inputs leaves the action unbound.
//!
//! Action names made of anything other than letters, digits, `_`, `-` and `.` are written in
//! double quotes, as are keys for characters that would otherwise separate things, like `","`.
//! Quoted text uses the same backslash escapes as Rust's debug formatting.
//!
//! Profiles are applied with [InputActions::apply_profile](crate::InputActions::apply_profile)
//! and captured with [InputActions::profile](crate::InputActions::profile).
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::{eof, map, opt, rest},
    multi::separated_list0,
    sequence::{delimited, preceded},
    IResult,
};

use crate::errors::ProfileError;
use crate::input::parse::{parse_input_token, parse_modifier, parse_quoted_str};
use crate::input::{InputIdentifier, ModifierKey};

/// The bindings for a single action within a [BindingProfile].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileEntry {
    /// The name of the action.
    pub action: String,

    /// The modifier key the action requires, if any.
    pub modifier: Option<ModifierKey>,

    /// The inputs the action is bound to.
    pub inputs: Vec<InputIdentifier>,
}

/// An ordered list of action bindings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BindingProfile {
    entries: Vec<ProfileEntry>,
}

impl BindingProfile {
    /// Create an empty profile.
    pub fn new() -> Self {
        BindingProfile::default()
    }

    /// Add an entry, replacing any earlier entry for the same action.
    pub fn push(&mut self, entry: ProfileEntry) {
        self.entries.retain(|e| e.action != entry.action);
        self.entries.push(entry);
    }

    /// The entry for `action`, if the profile has one.
    pub fn get(&self, action: &str) -> Option<&ProfileEntry> {
        self.entries.iter().find(|e| e.action == action)
    }

    /// Every entry, in order.
    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn is_action_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn is_plain_action(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_action_char)
}

fn parse_action(input: &str) -> IResult<&str, String> {
    alt((map(take_while1(is_action_char), String::from), parse_quoted_str))(input)
}

fn parse_comment(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), rest)(input)
}

type Line<'a> = (String, Option<ModifierKey>, Vec<&'a str>);

fn parse_line(input: &str) -> IResult<&str, Line<'_>> {
    let (input, _) = space0(input)?;
    let (input, action) = parse_action(input)?;
    let (input, _) = delimited(space0, char('='), space0)(input)?;
    let (input, modifier) = opt(parse_modifier)(input)?;
    let (input, _) = space0(input)?;
    let (input, inputs) =
        separated_list0(delimited(space0, char(','), space0), parse_input_token)(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = opt(parse_comment)(input)?;
    let (input, _) = eof(input)?;

    Ok((input, (action, modifier, inputs)))
}

impl FromStr for BindingProfile {
    type Err = ProfileError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut entries = vec![];
        let mut seen = HashSet::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (_, (action, modifier, tokens)) = parse_line(raw)
                .map_err(|_| ProfileError::Syntax { line, text: trimmed.to_string() })?;

            if !seen.insert(action.clone()) {
                return Err(ProfileError::DuplicateAction { line, name: action });
            }

            let inputs = tokens
                .into_iter()
                .map(|tok| {
                    tok.parse::<InputIdentifier>()
                        .map_err(|_| ProfileError::UnknownInput { line, name: tok.to_string() })
                })
                .collect::<Result<Vec<_>, _>>()?;

            entries.push(ProfileEntry { action, modifier, inputs });
        }

        Ok(BindingProfile { entries })
    }
}

impl fmt::Display for ProfileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_plain_action(&self.action) {
            write!(f, "{} =", self.action)?;
        } else {
            write!(f, "\"{}\" =", self.action.escape_debug())?;
        }

        if self.modifier.is_none() && self.inputs.is_empty() {
            return Ok(());
        }

        f.write_str(" ")?;

        if let Some(modifier) = self.modifier {
            write!(f, "{modifier}+")?;
        }

        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{input}")?;
        }

        Ok(())
    }
}

impl fmt::Display for BindingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries.iter() {
            writeln!(f, "{entry}")?;
        }

        Ok(())
    }
}
