//! Line normalization.
//!
//! Log lines carry whatever the client sent, including mIRC formatting codes.
//! Before classification every line is cleaned up:
//!
//! - `^C` color codes are removed together with their `fg[,bg]` digits
//! - all other control characters (bold, reset, reverse, italic, underline...)
//!   are dropped
//! - runs of whitespace collapse to a single space, and both ends are trimmed
//!
//! # Format codes
//! - 0x02 (^B): Bold
//! - 0x03 (^C): Color, followed by up to two foreground digits and optionally
//!   a comma and up to two background digits
//! - 0x0F (^O): Reset
//! - 0x16 (^V): Reverse
//! - 0x1D (^]): Italic
//! - 0x1F (^_): Underline

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

const COLOR: char = '\x03';

/// Normalize a raw line: strip formatting, collapse whitespace and trim.
///
/// Returns `Cow::Borrowed` when the input was already clean.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    match strip_formatting(raw) {
        Cow::Borrowed(text) if !needs_collapse(text.trim()) => Cow::Borrowed(text.trim()),
        text => Cow::Owned(collapse_whitespace(&text)),
    }
}

/// Extension trait for stripping formatting from log text.
pub trait FormattedStringExt {
    /// Check if the string contains control characters of any kind.
    fn is_formatted(&self) -> bool;
}

impl FormattedStringExt for str {
    fn is_formatted(&self) -> bool {
        self.contains(|c: char| c.is_control())
    }
}

/// Remove formatting codes and control characters.
///
/// Whitespace control characters (tabs, stray CR/LF) become a plain space.
pub fn strip_formatting(raw: &str) -> Cow<'_, str> {
    if !raw.is_formatted() {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            COLOR => skip_color_args(&mut chars),
            c if c.is_whitespace() => out.push(' '),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    Cow::Owned(out)
}

/// Consume the `fg[,bg]` digits after a color code.
fn skip_color_args(chars: &mut Peekable<Chars<'_>>) {
    if !skip_digits(chars) {
        return;
    }

    // The comma belongs to the code only when a background digit follows.
    let mut ahead = chars.clone();
    if ahead.next() == Some(',') && ahead.peek().is_some_and(char::is_ascii_digit) {
        chars.next();
        skip_digits(chars);
    }
}

fn skip_digits(chars: &mut Peekable<Chars<'_>>) -> bool {
    let mut taken = 0;
    while taken < 2 && chars.next_if(char::is_ascii_digit).is_some() {
        taken += 1;
    }
    taken > 0
}

fn needs_collapse(text: &str) -> bool {
    text.contains("  ") || text.chars().any(|c| c.is_whitespace() && c != ' ')
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
