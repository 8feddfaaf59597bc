//! Event sinks.
//!
//! The classifier reports what it found through [`EventSink`], one call per
//! event, in the order the events occur on the line. Diagnostics go through
//! [`EventSink::notice`].

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::context::Timestamp;
use crate::error::Notice;
use crate::event::Event;
use crate::mode::ModeChange;

/// Receiver for classified events.
///
/// Every `set_*` method defaults to doing nothing, so a sink only implements
/// the kinds it cares about.
#[allow(unused_variables)]
pub trait EventSink {
    /// A channel message.
    fn set_normal(&mut self, time: Timestamp, nick: &str, message: &str) {}

    /// A join.
    fn set_join(&mut self, time: Timestamp, nick: &str, host: &str) {}

    /// A quit.
    fn set_quit(&mut self, time: Timestamp, nick: &str, host: &str) {}

    /// One op/voice change.
    fn set_mode(&mut self, time: Timestamp, actor: &str, target: &str, mode: ModeChange) {}

    /// An action.
    fn set_action(&mut self, time: Timestamp, nick: &str, message: &str) {}

    /// A slap. Always followed by the matching [`set_action`](Self::set_action).
    fn set_slap(&mut self, time: Timestamp, nick: &str, target: Option<&str>) {}

    /// A nick change.
    fn set_nickchange(&mut self, time: Timestamp, old: &str, new: &str) {}

    /// A part.
    fn set_part(&mut self, time: Timestamp, nick: &str, host: &str) {}

    /// A topic change.
    fn set_topic(&mut self, time: Timestamp, nick: &str, topic: &str) {}

    /// A kick. `line` is the full `kicked was kicked by kicker (reason)` clause.
    fn set_kick(&mut self, time: Timestamp, kicker: &str, kicked: &str, line: &str) {}

    /// A diagnostic about the current line. Defaults to [`log_notice`].
    fn notice(&mut self, notice: &Notice) {
        log_notice(notice);
    }
}

/// Log a notice: unrecognized lines at debug level, malformed mode lines at
/// warn level.
pub fn log_notice(notice: &Notice) {
    match notice {
        Notice::Unrecognized { line, text } => {
            debug!(line = *line, text = %text, "{}", notice);
        }
        Notice::ModeArity { line, .. } => {
            warn!(line = *line, "{}", notice);
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn set_normal(&mut self, time: Timestamp, nick: &str, message: &str) {
        (**self).set_normal(time, nick, message)
    }

    fn set_join(&mut self, time: Timestamp, nick: &str, host: &str) {
        (**self).set_join(time, nick, host)
    }

    fn set_quit(&mut self, time: Timestamp, nick: &str, host: &str) {
        (**self).set_quit(time, nick, host)
    }

    fn set_mode(&mut self, time: Timestamp, actor: &str, target: &str, mode: ModeChange) {
        (**self).set_mode(time, actor, target, mode)
    }

    fn set_action(&mut self, time: Timestamp, nick: &str, message: &str) {
        (**self).set_action(time, nick, message)
    }

    fn set_slap(&mut self, time: Timestamp, nick: &str, target: Option<&str>) {
        (**self).set_slap(time, nick, target)
    }

    fn set_nickchange(&mut self, time: Timestamp, old: &str, new: &str) {
        (**self).set_nickchange(time, old, new)
    }

    fn set_part(&mut self, time: Timestamp, nick: &str, host: &str) {
        (**self).set_part(time, nick, host)
    }

    fn set_topic(&mut self, time: Timestamp, nick: &str, topic: &str) {
        (**self).set_topic(time, nick, topic)
    }

    fn set_kick(&mut self, time: Timestamp, kicker: &str, kicked: &str, line: &str) {
        (**self).set_kick(time, kicker, kicked, line)
    }

    fn notice(&mut self, notice: &Notice) {
        (**self).notice(notice)
    }
}

/// A sink that keeps owned copies of everything it receives.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Collector {
    /// Events in delivery order.
    pub events: Vec<Event<'static>>,
    /// Notices in delivery order.
    pub notices: Vec<Notice>,
}

fn owned(s: &str) -> Cow<'static, str> {
    Cow::Owned(s.to_owned())
}

impl EventSink for Collector {
    fn set_normal(&mut self, time: Timestamp, nick: &str, message: &str) {
        self.events.push(Event::Normal {
            time,
            nick: owned(nick),
            message: owned(message),
        });
    }

    fn set_join(&mut self, time: Timestamp, nick: &str, host: &str) {
        self.events.push(Event::Join {
            time,
            nick: owned(nick),
            host: owned(host),
        });
    }

    fn set_quit(&mut self, time: Timestamp, nick: &str, host: &str) {
        self.events.push(Event::Quit {
            time,
            nick: owned(nick),
            host: owned(host),
        });
    }

    fn set_mode(&mut self, time: Timestamp, actor: &str, target: &str, mode: ModeChange) {
        self.events.push(Event::Mode {
            time,
            actor: owned(actor),
            target: owned(target),
            mode,
        });
    }

    fn set_action(&mut self, time: Timestamp, nick: &str, message: &str) {
        self.events.push(Event::Action {
            time,
            nick: owned(nick),
            message: owned(message),
        });
    }

    fn set_slap(&mut self, time: Timestamp, nick: &str, target: Option<&str>) {
        self.events.push(Event::Slap {
            time,
            nick: owned(nick),
            target: target.map(owned),
        });
    }

    fn set_nickchange(&mut self, time: Timestamp, old: &str, new: &str) {
        self.events.push(Event::Nickchange {
            time,
            old: owned(old),
            new: owned(new),
        });
    }

    fn set_part(&mut self, time: Timestamp, nick: &str, host: &str) {
        self.events.push(Event::Part {
            time,
            nick: owned(nick),
            host: owned(host),
        });
    }

    fn set_topic(&mut self, time: Timestamp, nick: &str, topic: &str) {
        self.events.push(Event::Topic {
            time,
            nick: owned(nick),
            topic: owned(topic),
        });
    }

    fn set_kick(&mut self, time: Timestamp, kicker: &str, kicked: &str, line: &str) {
        self.events.push(Event::Kick {
            time,
            kicker: owned(kicker),
            kicked: owned(kicked),
            line: owned(line),
        });
    }

    fn notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
