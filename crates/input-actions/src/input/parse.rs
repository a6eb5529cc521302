use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, hex_digit1, none_of, one_of, satisfy},
    combinator::{all_consuming, eof, map, map_opt, opt, recognize, value},
    multi::many0,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

use super::ModifierKey;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Family {
    Key,
    InputType,
    PlayerAction,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that can't appear bare as a single-character key name, since they separate
/// things in binding profiles. Keys for these characters are written quoted, like `","`.
pub(crate) fn is_reserved(c: char) -> bool {
    c.is_whitespace() || c.is_control() || matches!(c, ',' | '=' | '+' | '#' | '"')
}

/// Parse the escape sequences that [char::escape_debug] and [str::escape_debug] produce.
fn parse_escape(input: &str) -> IResult<&str, char> {
    preceded(
        char('\\'),
        alt((
            value('\n', char('n')),
            value('\r', char('r')),
            value('\t', char('t')),
            value('\0', char('0')),
            one_of("\\\"'"),
            map_opt(delimited(tag("u{"), hex_digit1, char('}')), |hex: &str| {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            }),
        )),
    )(input)
}

fn parse_quoted_part(input: &str) -> IResult<&str, char> {
    alt((parse_escape, none_of("\\\"")))(input)
}

/// Parse a quoted character, like `","` or `"\""`.
fn parse_quoted_char(input: &str) -> IResult<&str, char> {
    delimited(char('"'), parse_quoted_part, char('"'))(input)
}

/// Parse a quoted string, like `"open map"`.
pub(crate) fn parse_quoted_str(input: &str) -> IResult<&str, String> {
    let chars = delimited(char('"'), many0(parse_quoted_part), char('"'));

    map(chars, |cs: Vec<char>| cs.into_iter().collect())(input)
}

/// Interpret `name` as a quoted character, if it is exactly one.
pub(crate) fn quoted_char(name: &str) -> Option<char> {
    all_consuming(parse_quoted_char)(name).ok().map(|(_, c)| c)
}

fn parse_family(input: &str) -> IResult<&str, Family> {
    let (input, _) = opt(tag("Enum."))(input)?;

    terminated(
        alt((
            value(Family::Key, tag("KeyCode")),
            value(Family::InputType, tag("UserInputType")),
            value(Family::PlayerAction, tag("PlayerActions")),
            value(Family::PlayerAction, tag("PlayerAction")),
        )),
        char('.'),
    )(input)
}

/// Parse a single input name, like `Space`, `MouseButton1`, `/`, or `","`.
pub(crate) fn parse_name(input: &str) -> IResult<&str, &str> {
    alt((
        take_while1(is_name_char),
        recognize(parse_quoted_char),
        recognize(satisfy(|c| !is_reserved(c))),
    ))(input)
}

/// Parse a possibly prefixed input name, like `Enum.KeyCode.Space`.
pub(crate) fn parse_input_token(input: &str) -> IResult<&str, &str> {
    recognize(tuple((opt(parse_family), parse_name)))(input)
}

/// Parse a complete identifier string into its optional family and bare name.
pub(crate) fn parse_identifier(input: &str) -> IResult<&str, (Option<Family>, &str)> {
    let (input, family) = opt(parse_family)(input)?;
    let (input, name) = parse_name(input)?;
    let (input, _) = eof(input)?;

    Ok((input, (family, name)))
}

/// Parse a modifier prefix like `Ctrl+`.
pub(crate) fn parse_modifier(input: &str) -> IResult<&str, ModifierKey> {
    terminated(
        alt((
            value(ModifierKey::Shift, tag("Shift")),
            value(ModifierKey::Ctrl, tag("Control")),
            value(ModifierKey::Ctrl, tag("Ctrl")),
            value(ModifierKey::Alt, tag("Alt")),
            value(ModifierKey::Meta, tag("Meta")),
        )),
        char('+'),
    )(input)
}
