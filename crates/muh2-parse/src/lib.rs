//! # muh2-parse
//!
//! Line classifier for logs written by the muh IRC bouncer (the "muh2" log
//! format). Each normalized log line is matched against an ordered grammar
//! table and turned into zero or more typed chat events.
//!
//! ## Features
//!
//! - Messages, joins, parts, quits, nick changes, topic changes and kicks
//! - Multi-target op/voice mode lines decoded into one event per target
//! - Actions, with slaps recognized as an additional event
//! - mIRC formatting code stripping and whitespace normalization
//! - Diagnostics for unrecognized lines instead of hard errors

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ```rust
//! use muh2_parse::{Collector, LineClassifier, LineContext, NormalizedLine};
//!
//! let ctx: LineContext = "2009-03-14".parse().expect("valid date");
//! let line = NormalizedLine::new(1, "[21:15] <alice> hello there");
//!
//! let mut sink = Collector::default();
//! LineClassifier::new().feed(&line, &ctx, &mut sink);
//!
//! assert_eq!(sink.events.len(), 1);
//! ```

pub mod classify;
pub mod context;
pub mod error;
pub mod event;
pub mod grammar;
pub mod mode;
pub mod normalize;
pub mod sink;
pub mod slap;

pub use self::classify::{Classification, LineClassifier};
pub use self::context::{LineContext, NormalizedLine, Timestamp};
pub use self::error::{Notice, ParseError};
pub use self::event::{Event, EventKind};
pub use self::mode::{ModeChange, ModeLetter, Sign};
pub use self::normalize::{normalize, strip_formatting, FormattedStringExt};
pub use self::sink::{log_notice, Collector, EventSink};
