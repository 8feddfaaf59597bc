//! Op/voice mode strings.
//!
//! A muh2 mode line carries a mode string such as `+o-v` followed by one
//! target nick per mode letter. Decoding walks the string with a two-state
//! machine: a sign (`+`/`-`) moves to "awaiting letter" with that sign, and
//! each letter pairs with the next target while the sign stays in effect.

use std::fmt;

use smallvec::SmallVec;

/// Whether a mode is being set or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl Sign {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// The channel member modes muh2 logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeLetter {
    /// 'o' - channel operator
    Op,
    /// 'v' - voice
    Voice,
}

impl ModeLetter {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Self::Op),
            'v' => Some(Self::Voice),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Op => 'o',
            Self::Voice => 'v',
        }
    }
}

/// A single mode change applied to one nick, e.g. `+o`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModeChange {
    /// Set or unset.
    pub sign: Sign,
    /// Which mode.
    pub letter: ModeLetter,
}

impl ModeChange {
    /// Create a mode change.
    pub fn new(sign: Sign, letter: ModeLetter) -> Self {
        Self { sign, letter }
    }
}

impl fmt::Display for ModeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.as_char(), self.letter.as_char())
    }
}

/// Result of decoding a mode string against its target list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeDecode<'a> {
    /// `(target, change)` pairs in mode string order.
    pub changes: SmallVec<[(&'a str, ModeChange); 4]>,
    /// Mode letters seen in the whole mode string.
    pub letters: usize,
    /// Target nicks supplied.
    pub targets: usize,
}

impl ModeDecode<'_> {
    /// True when every letter had a target and every target was used.
    pub fn is_balanced(&self) -> bool {
        self.letters == self.targets
    }
}

enum State {
    AwaitingSign,
    AwaitingLetter(Sign),
}

/// Pair each mode letter in `modes` with the next nick from `targets`.
///
/// Decoding stops at the first letter that has no target left; the letters
/// and targets counts still cover the whole input so the caller can report
/// the mismatch. Letters before any sign and characters other than signs and
/// `o`/`v` are skipped.
pub fn decode<'a>(modes: &str, targets: &[&'a str]) -> ModeDecode<'a> {
    use self::State::*;

    let mut changes = SmallVec::new();
    let mut next_target = targets.iter().copied();
    let mut letters = 0;
    let mut exhausted = false;
    let mut state = AwaitingSign;

    for c in modes.chars() {
        if let Some(sign) = Sign::from_char(c) {
            state = AwaitingLetter(sign);
            continue;
        }

        let (AwaitingLetter(sign), Some(letter)) = (&state, ModeLetter::from_char(c)) else {
            continue;
        };
        letters += 1;

        if exhausted {
            continue;
        }
        match next_target.next() {
            Some(target) => changes.push((target, ModeChange::new(*sign, letter))),
            None => exhausted = true,
        }
    }

    ModeDecode {
        changes,
        letters,
        targets: targets.len(),
    }
}
