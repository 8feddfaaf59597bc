//! The muh2 line grammars.
//!
//! Every recognized line starts with a `[HH:MM]` or `[HH:MM:SS]` time stamp.
//! What follows decides the kind:
//!
//! ```text
//! [21:15] <nick> message
//! [21:15] *** Joins: nick (~user@host)
//! [21:15] *** Quits: nick (~user@host) (reason)
//! [21:15] *** nick sets mode: +o-v nick1 nick2
//! [21:15] * nick does something
//! [21:15] *** old is now known as new
//! [21:15] *** Parts: nick (~user@host)
//! [21:15] *** nick changes topic to 'topic'
//! [21:15] *** kicked was kicked by kicker (reason)
//! ```
//!
//! A nick never contains a colon, so `Joins:`/`Parts:`/`Quits:` can't be
//! mistaken for the nick in the `*** nick ...` forms. The grammars don't
//! overlap and [`GRAMMARS`] is ordered by how common each line type is.

mod parse;

use chrono::NaiveTime;
use smallvec::SmallVec;

use crate::event::EventKind;

pub(crate) use self::parse::is_nick_char;

/// Fields extracted by a grammar, before the date context is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Match<'a> {
    /// `<nick> message`; `message` may be empty.
    Normal {
        /// Time of day.
        time: NaiveTime,
        /// Speaker.
        nick: &'a str,
        /// Message text.
        message: &'a str,
    },
    /// `*** Joins: nick (host)`
    Join {
        /// Time of day.
        time: NaiveTime,
        /// Who joined.
        nick: &'a str,
        /// Host, `~` already stripped.
        host: &'a str,
    },
    /// `*** Quits: nick (host) (reason)`
    Quit {
        /// Time of day.
        time: NaiveTime,
        /// Who quit.
        nick: &'a str,
        /// Host, `~` already stripped.
        host: &'a str,
    },
    /// `*** actor sets mode: modes targets...`
    Mode {
        /// Time of day.
        time: NaiveTime,
        /// Who set the mode.
        actor: &'a str,
        /// Mode string such as `+o-v`.
        modes: &'a str,
        /// Target nicks in order.
        targets: SmallVec<[&'a str; 4]>,
    },
    /// `* nick rest`
    Action {
        /// Time of day.
        time: NaiveTime,
        /// Who acted.
        nick: &'a str,
        /// Everything after the nick.
        rest: &'a str,
    },
    /// `*** old is now known as new`
    Nickchange {
        /// Time of day.
        time: NaiveTime,
        /// Previous nick.
        old: &'a str,
        /// New nick.
        new: &'a str,
    },
    /// `*** Parts: nick (host)`
    Part {
        /// Time of day.
        time: NaiveTime,
        /// Who left.
        nick: &'a str,
        /// Host, `~` already stripped.
        host: &'a str,
    },
    /// `*** nick changes topic to 'topic'`; `topic` may be empty.
    Topic {
        /// Time of day.
        time: NaiveTime,
        /// Who changed it.
        nick: &'a str,
        /// New topic.
        topic: &'a str,
    },
    /// `*** kicked was kicked by kicker (reason)`
    Kick {
        /// Time of day.
        time: NaiveTime,
        /// Who kicked.
        kicker: &'a str,
        /// Who was kicked.
        kicked: &'a str,
        /// Everything after `*** `.
        clause: &'a str,
    },
}

/// One entry of the grammar table.
pub struct Grammar {
    /// The event family this grammar produces.
    pub kind: EventKind,
    parser: fn(&str) -> Option<Match<'_>>,
}

impl Grammar {
    /// Try this grammar against a whole line.
    pub fn parse<'a>(&self, line: &'a str) -> Option<Match<'a>> {
        (self.parser)(line)
    }
}

/// All grammars, in the order they are tried.
pub const GRAMMARS: [Grammar; 9] = [
    Grammar {
        kind: EventKind::Normal,
        parser: parse::normal,
    },
    Grammar {
        kind: EventKind::Join,
        parser: parse::join,
    },
    Grammar {
        kind: EventKind::Quit,
        parser: parse::quit,
    },
    Grammar {
        kind: EventKind::Mode,
        parser: parse::mode,
    },
    Grammar {
        kind: EventKind::Action,
        parser: parse::action,
    },
    Grammar {
        kind: EventKind::Nickchange,
        parser: parse::nickchange,
    },
    Grammar {
        kind: EventKind::Part,
        parser: parse::part,
    },
    Grammar {
        kind: EventKind::Topic,
        parser: parse::topic,
    },
    Grammar {
        kind: EventKind::Kick,
        parser: parse::kick,
    },
];

/// Run the grammar table over `line`; the first full-line match wins.
pub fn match_line(line: &str) -> Option<Match<'_>> {
    GRAMMARS.iter().find_map(|grammar| grammar.parse(line))
}
