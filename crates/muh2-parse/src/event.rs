//! Typed chat events produced by the classifier.

use std::borrow::Cow;
use std::fmt;

use crate::context::Timestamp;
use crate::mode::ModeChange;
use crate::sink::EventSink;

/// The kind of an [`Event`], without its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Channel message.
    Normal,
    /// Someone joined.
    Join,
    /// Someone quit IRC.
    Quit,
    /// Op/voice change on one nick.
    Mode,
    /// `/me` action.
    Action,
    /// An action that slaps someone.
    Slap,
    /// Nick change.
    Nickchange,
    /// Someone left the channel.
    Part,
    /// Topic change.
    Topic,
    /// Someone was kicked.
    Kick,
}

impl EventKind {
    /// All kinds, in grammar priority order (Slap last: it only ever comes
    /// out of an action line).
    pub const ALL: [EventKind; 10] = [
        Self::Normal,
        Self::Join,
        Self::Quit,
        Self::Mode,
        Self::Action,
        Self::Nickchange,
        Self::Part,
        Self::Topic,
        Self::Kick,
        Self::Slap,
    ];

    /// Lowercase name, used for tallies and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Join => "join",
            Self::Quit => "quit",
            Self::Mode => "mode",
            Self::Action => "action",
            Self::Slap => "slap",
            Self::Nickchange => "nickchange",
            Self::Part => "part",
            Self::Topic => "topic",
            Self::Kick => "kick",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chat event extracted from one log line.
///
/// Text fields borrow from the line where possible; use
/// [`into_owned`](Event::into_owned) to keep an event past the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    /// `[HH:MM] <nick> message`
    Normal {
        /// When.
        time: Timestamp,
        /// Speaker.
        nick: Cow<'a, str>,
        /// Message text, never empty.
        message: Cow<'a, str>,
    },
    /// `[HH:MM] *** Joins: nick (host)`
    Join {
        /// When.
        time: Timestamp,
        /// Who joined.
        nick: Cow<'a, str>,
        /// Host with any leading `~` removed.
        host: Cow<'a, str>,
    },
    /// `[HH:MM] *** Quits: nick (host) (message)`
    Quit {
        /// When.
        time: Timestamp,
        /// Who quit.
        nick: Cow<'a, str>,
        /// Host with any leading `~` removed.
        host: Cow<'a, str>,
    },
    /// One target of `[HH:MM] *** nick sets mode: +o-v a b`
    Mode {
        /// When.
        time: Timestamp,
        /// Who set the mode.
        actor: Cow<'a, str>,
        /// Who it was set on.
        target: Cow<'a, str>,
        /// The change, e.g. `+o`.
        mode: ModeChange,
    },
    /// `[HH:MM] * nick does something`
    Action {
        /// When.
        time: Timestamp,
        /// Who acted.
        nick: Cow<'a, str>,
        /// Everything after the nick.
        message: Cow<'a, str>,
    },
    /// `[HH:MM] * nick slaps [target] ...`
    Slap {
        /// When.
        time: Timestamp,
        /// Who slapped.
        nick: Cow<'a, str>,
        /// Who got slapped, if the line names anyone.
        target: Option<Cow<'a, str>>,
    },
    /// `[HH:MM] *** old is now known as new`
    Nickchange {
        /// When.
        time: Timestamp,
        /// Previous nick.
        old: Cow<'a, str>,
        /// New nick.
        new: Cow<'a, str>,
    },
    /// `[HH:MM] *** Parts: nick (host)`
    Part {
        /// When.
        time: Timestamp,
        /// Who left.
        nick: Cow<'a, str>,
        /// Host with any leading `~` removed.
        host: Cow<'a, str>,
    },
    /// `[HH:MM] *** nick changes topic to 'topic'`
    Topic {
        /// When.
        time: Timestamp,
        /// Who changed it.
        nick: Cow<'a, str>,
        /// New topic, never empty.
        topic: Cow<'a, str>,
    },
    /// `[HH:MM] *** kicked was kicked by kicker (reason)`
    Kick {
        /// When.
        time: Timestamp,
        /// Who kicked.
        kicker: Cow<'a, str>,
        /// Who was kicked.
        kicked: Cow<'a, str>,
        /// The whole `kicked was kicked by kicker (reason)` clause.
        line: Cow<'a, str>,
    },
}

impl Event<'_> {
    /// The kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Normal { .. } => EventKind::Normal,
            Self::Join { .. } => EventKind::Join,
            Self::Quit { .. } => EventKind::Quit,
            Self::Mode { .. } => EventKind::Mode,
            Self::Action { .. } => EventKind::Action,
            Self::Slap { .. } => EventKind::Slap,
            Self::Nickchange { .. } => EventKind::Nickchange,
            Self::Part { .. } => EventKind::Part,
            Self::Topic { .. } => EventKind::Topic,
            Self::Kick { .. } => EventKind::Kick,
        }
    }

    /// When the event happened.
    pub fn time(&self) -> Timestamp {
        match self {
            Self::Normal { time, .. }
            | Self::Join { time, .. }
            | Self::Quit { time, .. }
            | Self::Mode { time, .. }
            | Self::Action { time, .. }
            | Self::Slap { time, .. }
            | Self::Nickchange { time, .. }
            | Self::Part { time, .. }
            | Self::Topic { time, .. }
            | Self::Kick { time, .. } => *time,
        }
    }

    /// Hand the event to the matching `set_*` method of `sink`.
    pub fn deliver<S: EventSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Normal {
                time,
                nick,
                message,
            } => sink.set_normal(*time, nick, message),
            Self::Join { time, nick, host } => sink.set_join(*time, nick, host),
            Self::Quit { time, nick, host } => sink.set_quit(*time, nick, host),
            Self::Mode {
                time,
                actor,
                target,
                mode,
            } => sink.set_mode(*time, actor, target, *mode),
            Self::Action {
                time,
                nick,
                message,
            } => sink.set_action(*time, nick, message),
            Self::Slap { time, nick, target } => sink.set_slap(*time, nick, target.as_deref()),
            Self::Nickchange { time, old, new } => sink.set_nickchange(*time, old, new),
            Self::Part { time, nick, host } => sink.set_part(*time, nick, host),
            Self::Topic { time, nick, topic } => sink.set_topic(*time, nick, topic),
            Self::Kick {
                time,
                kicker,
                kicked,
                line,
            } => sink.set_kick(*time, kicker, kicked, line),
        }
    }

    /// Detach the event from the line it was parsed from.
    pub fn into_owned(self) -> Event<'static> {
        fn own(s: Cow<'_, str>) -> Cow<'static, str> {
            Cow::Owned(s.into_owned())
        }

        match self {
            Self::Normal {
                time,
                nick,
                message,
            } => Event::Normal {
                time,
                nick: own(nick),
                message: own(message),
            },
            Self::Join { time, nick, host } => Event::Join {
                time,
                nick: own(nick),
                host: own(host),
            },
            Self::Quit { time, nick, host } => Event::Quit {
                time,
                nick: own(nick),
                host: own(host),
            },
            Self::Mode {
                time,
                actor,
                target,
                mode,
            } => Event::Mode {
                time,
                actor: own(actor),
                target: own(target),
                mode,
            },
            Self::Action {
                time,
                nick,
                message,
            } => Event::Action {
                time,
                nick: own(nick),
                message: own(message),
            },
            Self::Slap { time, nick, target } => Event::Slap {
                time,
                nick: own(nick),
                target: target.map(own),
            },
            Self::Nickchange { time, old, new } => Event::Nickchange {
                time,
                old: own(old),
                new: own(new),
            },
            Self::Part { time, nick, host } => Event::Part {
                time,
                nick: own(nick),
                host: own(host),
            },
            Self::Topic { time, nick, topic } => Event::Topic {
                time,
                nick: own(nick),
                topic: own(topic),
            },
            Self::Kick {
                time,
                kicker,
                kicked,
                line,
            } => Event::Kick {
                time,
                kicker: own(kicker),
                kicked: own(kicked),
                line: own(line),
            },
        }
    }
}
