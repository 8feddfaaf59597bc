//! Per-kind event counts for a run.

use std::collections::BTreeMap;
use std::fmt;

use muh2_parse::{log_notice, EventKind, EventSink, ModeChange, Notice, Timestamp};

/// Sink that counts events per kind and notices per category.
#[derive(Debug, Default)]
pub struct Tally {
    events: BTreeMap<EventKind, usize>,
    notices: BTreeMap<&'static str, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self, kind: EventKind) {
        *self.events.entry(kind).or_default() += 1;
    }

    /// Events of `kind` seen so far.
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.get(&kind).copied().unwrap_or(0)
    }

    /// Notices of every category.
    pub fn total_notices(&self) -> usize {
        self.notices.values().sum()
    }

    /// Summary with one `kind: count` line per event kind, then one per
    /// notice category that occurred.
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

impl EventSink for Tally {
    fn set_normal(&mut self, _: Timestamp, _: &str, _: &str) {
        self.bump(EventKind::Normal);
    }

    fn set_join(&mut self, _: Timestamp, _: &str, _: &str) {
        self.bump(EventKind::Join);
    }

    fn set_quit(&mut self, _: Timestamp, _: &str, _: &str) {
        self.bump(EventKind::Quit);
    }

    fn set_mode(&mut self, _: Timestamp, _: &str, _: &str, _: ModeChange) {
        self.bump(EventKind::Mode);
    }

    fn set_action(&mut self, _: Timestamp, _: &str, _: &str) {
        self.bump(EventKind::Action);
    }

    fn set_slap(&mut self, _: Timestamp, _: &str, _: Option<&str>) {
        self.bump(EventKind::Slap);
    }

    fn set_nickchange(&mut self, _: Timestamp, _: &str, _: &str) {
        self.bump(EventKind::Nickchange);
    }

    fn set_part(&mut self, _: Timestamp, _: &str, _: &str) {
        self.bump(EventKind::Part);
    }

    fn set_topic(&mut self, _: Timestamp, _: &str, _: &str) {
        self.bump(EventKind::Topic);
    }

    fn set_kick(&mut self, _: Timestamp, _: &str, _: &str, _: &str) {
        self.bump(EventKind::Kick);
    }

    fn notice(&mut self, notice: &Notice) {
        log_notice(notice);
        *self.notices.entry(notice.code()).or_default() += 1;
    }
}

/// Display adapter returned by [`Tally::report`].
pub struct Report<'a>(&'a Tally);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in EventKind::ALL {
            writeln!(f, "{}: {}", kind, self.0.count(kind))?;
        }
        for (code, count) in &self.0.notices {
            writeln!(f, "{}: {}", code, count)?;
        }
        Ok(())
    }
}
