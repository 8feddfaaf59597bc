//! The line classifier.
//!
//! Each line is handled on its own:
//!
//! ```text
//! Start -> grammar table -> match?  -> extract -> [mode decode | slap check] -> emit -> Done
//!                           no match -> (empty ? Done : notice) -> Done
//! ```
//!
//! Nothing is remembered between lines; the date comes from the
//! [`LineContext`] the caller passes in.

use std::borrow::Cow;

use smallvec::SmallVec;
use tracing::trace;

use crate::context::{LineContext, NormalizedLine};
use crate::error::Notice;
use crate::event::Event;
use crate::grammar::{self, Match};
use crate::mode;
use crate::sink::EventSink;
use crate::slap::slap_target;

/// Everything one line produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    /// Events in emission order.
    pub events: SmallVec<[Event<'a>; 2]>,
    /// Diagnostics raised for the line.
    pub notices: SmallVec<[Notice; 1]>,
}

impl Classification<'_> {
    /// True if the line produced neither events nor notices.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.notices.is_empty()
    }

    /// Hand events, then notices, to `sink`.
    pub fn deliver<S: EventSink + ?Sized>(&self, sink: &mut S) {
        for event in &self.events {
            event.deliver(sink);
        }
        for notice in &self.notices {
            sink.notice(notice);
        }
    }
}

/// Classifies normalized muh2 lines into events.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify one line.
    ///
    /// Never fails: an empty line yields nothing, a line no grammar accepts
    /// yields a single [`Notice::Unrecognized`].
    pub fn classify<'a>(
        &self,
        line: &'a NormalizedLine<'_>,
        ctx: &LineContext,
    ) -> Classification<'a> {
        let mut out = Classification::default();
        let text = line.text();

        if text.is_empty() {
            return out;
        }

        let Some(matched) = grammar::match_line(text) else {
            out.notices.push(Notice::Unrecognized {
                line: line.number(),
                text: text.to_string(),
            });
            return out;
        };

        match matched {
            Match::Normal {
                time,
                nick,
                message,
            } => {
                if message.is_empty() {
                    trace!(line = line.number(), nick, "skipping empty message");
                } else {
                    out.events.push(Event::Normal {
                        time: ctx.timestamp(time),
                        nick: Cow::Borrowed(nick),
                        message: Cow::Borrowed(message),
                    });
                }
            }
            Match::Join { time, nick, host } => out.events.push(Event::Join {
                time: ctx.timestamp(time),
                nick: Cow::Borrowed(nick),
                host: Cow::Borrowed(host),
            }),
            Match::Quit { time, nick, host } => out.events.push(Event::Quit {
                time: ctx.timestamp(time),
                nick: Cow::Borrowed(nick),
                host: Cow::Borrowed(host),
            }),
            Match::Mode {
                time,
                actor,
                modes,
                targets,
            } => {
                let time = ctx.timestamp(time);
                let decoded = mode::decode(modes, &targets);
                for (target, change) in decoded.changes.iter().copied() {
                    out.events.push(Event::Mode {
                        time,
                        actor: Cow::Borrowed(actor),
                        target: Cow::Borrowed(target),
                        mode: change,
                    });
                }
                if !decoded.is_balanced() {
                    out.notices.push(Notice::ModeArity {
                        line: line.number(),
                        letters: decoded.letters,
                        targets: decoded.targets,
                    });
                }
            }
            Match::Action { time, nick, rest } => {
                let time = ctx.timestamp(time);
                if let Some(target) = slap_target(rest) {
                    out.events.push(Event::Slap {
                        time,
                        nick: Cow::Borrowed(nick),
                        target: target.map(Cow::Borrowed),
                    });
                }
                out.events.push(Event::Action {
                    time,
                    nick: Cow::Borrowed(nick),
                    message: Cow::Borrowed(rest),
                });
            }
            Match::Nickchange { time, old, new } => out.events.push(Event::Nickchange {
                time: ctx.timestamp(time),
                old: Cow::Borrowed(old),
                new: Cow::Borrowed(new),
            }),
            Match::Part { time, nick, host } => out.events.push(Event::Part {
                time: ctx.timestamp(time),
                nick: Cow::Borrowed(nick),
                host: Cow::Borrowed(host),
            }),
            Match::Topic { time, nick, topic } => {
                if topic.is_empty() {
                    trace!(line = line.number(), nick, "skipping empty topic");
                } else {
                    out.events.push(Event::Topic {
                        time: ctx.timestamp(time),
                        nick: Cow::Borrowed(nick),
                        topic: Cow::Borrowed(topic),
                    });
                }
            }
            Match::Kick {
                time,
                kicker,
                kicked,
                clause,
            } => out.events.push(Event::Kick {
                time: ctx.timestamp(time),
                kicker: Cow::Borrowed(kicker),
                kicked: Cow::Borrowed(kicked),
                line: Cow::Borrowed(clause),
            }),
        }

        out
    }

    /// Classify one line and hand the results to `sink`.
    ///
    /// Returns the number of events delivered.
    pub fn feed<S: EventSink + ?Sized>(
        &self,
        line: &NormalizedLine<'_>,
        ctx: &LineContext,
        sink: &mut S,
    ) -> usize {
        let classified = self.classify(line, ctx);
        classified.deliver(sink);
        classified.events.len()
    }
}
