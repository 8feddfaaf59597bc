//! Reading a muh2 log file and feeding it to the classifier.
//!
//! The reader owns everything the classifier leaves to its caller: splitting
//! the file into lines, numbering them, repairing legacy encodings,
//! normalizing, and supplying the date context.

use std::borrow::Cow;
use std::path::Path;

use chrono::NaiveDate;
use encoding_rs::Encoding;
use muh2_parse::{EventSink, LineClassifier, LineContext, NormalizedLine};
use tracing::{debug, trace};

use crate::error::ReadError;

/// Counters for one pass over a log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadStats {
    /// Lines read, including empty ones.
    pub lines: usize,
    /// Lines that were empty after normalization.
    pub empty: usize,
    /// Lines that were not valid UTF-8 and went through the fallback encoding.
    pub reencoded: usize,
    /// Events delivered to the sink.
    pub events: usize,
}

/// Feeds the lines of one log into a [`LineClassifier`].
pub struct LogReader {
    classifier: LineClassifier,
    ctx: LineContext,
    fallback: &'static Encoding,
}

impl LogReader {
    /// Create a reader attributing every line to `ctx`'s date.
    pub fn new(ctx: LineContext, fallback: &'static Encoding) -> Self {
        Self {
            classifier: LineClassifier::new(),
            ctx,
            fallback,
        }
    }

    /// Read a whole file and deliver its events to `sink`.
    pub fn read_file<S: EventSink + ?Sized>(
        &self,
        path: &Path,
        sink: &mut S,
    ) -> Result<ReadStats, ReadError> {
        let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(bytes = bytes.len(), "Read log file");
        Ok(self.read_bytes(&bytes, sink))
    }

    /// Classify every `\n`-separated line of `bytes`, in order.
    pub fn read_bytes<S: EventSink + ?Sized>(&self, bytes: &[u8], sink: &mut S) -> ReadStats {
        let mut stats = ReadStats::default();

        // A trailing newline ends the last line; it doesn't start a new one.
        let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        if bytes.is_empty() {
            return stats;
        }

        for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let number = idx + 1;
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

            let text = self.decode(raw);
            if matches!(text, Cow::Owned(_)) {
                trace!(line = number, encoding = self.fallback.name(), "Re-encoded line");
                stats.reencoded += 1;
            }

            let line = NormalizedLine::new(number, &text);
            if line.is_empty() {
                stats.empty += 1;
            }
            stats.lines += 1;
            stats.events += self.classifier.feed(&line, &self.ctx, sink);
        }

        stats
    }

    /// Decode a raw line as UTF-8, falling back to the configured encoding.
    fn decode<'a>(&self, raw: &'a [u8]) -> Cow<'a, str> {
        match std::str::from_utf8(raw) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => Cow::Owned(self.fallback.decode_without_bom_handling(raw).0.into_owned()),
        }
    }
}

/// Pick the date for a log: command line first, then config, then the file
/// name.
pub fn resolve_date(
    cli: Option<NaiveDate>,
    config: Option<NaiveDate>,
    path: &Path,
) -> Result<NaiveDate, ReadError> {
    cli.or(config)
        .or_else(|| date_from_file_name(path))
        .ok_or_else(|| ReadError::NoDate {
            path: path.to_path_buf(),
        })
}

/// Find the first run of eight digits in the file name that is a valid
/// `YYYYMMDD` date, e.g. `#channel_20090314.log`.
fn date_from_file_name(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    name.as_bytes()
        .windows(8)
        .enumerate()
        .filter(|(_, window)| window.iter().all(u8::is_ascii_digit))
        .find_map(|(start, _)| NaiveDate::parse_from_str(&name[start..start + 8], "%Y%m%d").ok())
}
