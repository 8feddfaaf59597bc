//! Nom-based parsers for the individual muh2 line grammars.
//!
//! Each public function takes a whole normalized line and returns the
//! extracted fields only if the grammar consumes the entire line.

use chrono::NaiveTime;
use nom::{
    bytes::complete::{is_a, tag, take_while1, take_while_m_n},
    character::complete::{char, one_of},
    combinator::{eof, map_res, opt, recognize},
    error::{Error, ErrorKind},
    multi::{many1_count, separated_list1},
    sequence::{pair, preceded},
    IResult,
};
use smallvec::SmallVec;

use super::Match;

/// Characters allowed in a nick as it appears in muh2 logs.
pub(crate) fn is_nick_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, ':' | '<' | '>')
}

fn reject<T>(input: &str, kind: ErrorKind) -> IResult<&str, T> {
    Err(nom::Err::Error(Error::new(input, kind)))
}

fn two_digits(input: &str) -> IResult<&str, u32> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), |s: &str| {
        s.parse::<u32>()
    })(input)
}

/// Parse the `[HH:MM] ` or `[HH:MM:SS] ` prefix.
///
/// Stamps are range-checked: `[24:00]` or `[12:60]` fail, so such lines end
/// up unrecognized. Seconds are kept here and dropped by the context.
fn time_stamp(input: &str) -> IResult<&str, NaiveTime> {
    let (input, _) = char('[')(input)?;
    let (input, hour) = two_digits(input)?;
    let (input, _) = char(':')(input)?;
    let (input, minute) = two_digits(input)?;
    let (input, second) = opt(preceded(char(':'), two_digits))(input)?;
    let (rest, _) = tag("] ")(input)?;

    match NaiveTime::from_hms_opt(hour, minute, second.unwrap_or(0)) {
        Some(time) => Ok((rest, time)),
        None => reject(input, ErrorKind::Verify),
    }
}

fn nick(input: &str) -> IResult<&str, &str> {
    take_while1(is_nick_char)(input)
}

/// Parse `(host)` or `(~host)`, returning the host without the tilde.
fn host(input: &str) -> IResult<&str, &str> {
    let (input, _) = char('(')(input)?;
    let (input, _) = opt(char('~'))(input)?;
    let (input, host) = take_while1(|c: char| c != ')' && !c.is_whitespace())(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, host))
}

/// Parse ` (anything)` running to the end of the line.
fn trailing_parens(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag(" (")(input)?;
    match input.strip_suffix(')') {
        Some(inner) => Ok(("", inner)),
        None => reject(input, ErrorKind::Char),
    }
}

/// Parse a mode string: one or more runs of a sign followed by `o`/`v`.
fn mode_string(input: &str) -> IResult<&str, &str> {
    recognize(many1_count(pair(one_of("+-"), is_a("ov"))))(input)
}

fn normal_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (input, _) = char('<')(input)?;
    let (input, nick) = nick(input)?;
    let (input, _) = char('>')(input)?;

    let message = match input.strip_prefix(' ') {
        Some(message) => message,
        None if input.is_empty() => "",
        None => return reject(input, ErrorKind::Char),
    };
    Ok((
        "",
        Match::Normal {
            time,
            nick,
            message,
        },
    ))
}

fn join_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (input, _) = tag("*** Joins: ")(input)?;
    let (input, nick) = nick(input)?;
    let (input, _) = char(' ')(input)?;
    let (input, host) = host(input)?;
    let (input, _) = eof(input)?;
    Ok((input, Match::Join { time, nick, host }))
}

fn quit_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (input, _) = tag("*** Quits: ")(input)?;
    let (input, nick) = nick(input)?;
    let (input, _) = char(' ')(input)?;
    let (input, host) = host(input)?;
    let (input, _) = trailing_parens(input)?;
    Ok((input, Match::Quit { time, nick, host }))
}

fn mode_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (input, _) = tag("*** ")(input)?;
    let (input, actor) = nick(input)?;
    let (input, _) = tag(" sets mode: ")(input)?;
    let (input, modes) = mode_string(input)?;
    let (input, _) = char(' ')(input)?;
    let (input, targets) = separated_list1(char(' '), nick)(input)?;
    let (input, _) = eof(input)?;
    Ok((
        input,
        Match::Mode {
            time,
            actor,
            modes,
            targets: SmallVec::from_vec(targets),
        },
    ))
}

fn action_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (input, _) = tag("* ")(input)?;
    let (input, nick) = nick(input)?;
    let (rest, _) = char(' ')(input)?;
    if rest.is_empty() {
        return reject(rest, ErrorKind::Eof);
    }
    Ok(("", Match::Action { time, nick, rest }))
}

fn nickchange_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (input, _) = tag("*** ")(input)?;
    let (input, old) = nick(input)?;
    let (input, _) = tag(" is now known as ")(input)?;
    let (input, new) = nick(input)?;
    let (input, _) = eof(input)?;
    Ok((input, Match::Nickchange { time, old, new }))
}

fn part_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (input, _) = tag("*** Parts: ")(input)?;
    let (input, nick) = nick(input)?;
    let (input, _) = char(' ')(input)?;
    let (input, host) = host(input)?;
    let (input, _) = eof(input)?;
    Ok((input, Match::Part { time, nick, host }))
}

fn topic_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (input, _) = tag("*** ")(input)?;
    let (input, nick) = nick(input)?;
    let (input, _) = tag(" changes topic to '")(input)?;
    match input.strip_suffix('\'') {
        Some(topic) => Ok(("", Match::Topic { time, nick, topic })),
        None => reject(input, ErrorKind::Char),
    }
}

fn kick_line(input: &str) -> IResult<&str, Match<'_>> {
    let (input, time) = time_stamp(input)?;
    let (clause, _) = tag("*** ")(input)?;
    let (input, kicked) = nick(clause)?;
    let (input, _) = tag(" was kicked by ")(input)?;
    let (input, kicker) = nick(input)?;
    let (input, _) = trailing_parens(input)?;
    Ok((
        input,
        Match::Kick {
            time,
            kicker,
            kicked,
            clause,
        },
    ))
}

fn finish<'a>(res: IResult<&'a str, Match<'a>>) -> Option<Match<'a>> {
    res.ok().map(|(_, m)| m)
}

/// `[HH:MM] <nick> message`
pub(super) fn normal(line: &str) -> Option<Match<'_>> {
    finish(normal_line(line))
}

/// `[HH:MM] *** Joins: nick (host)`
pub(super) fn join(line: &str) -> Option<Match<'_>> {
    finish(join_line(line))
}

/// `[HH:MM] *** Quits: nick (host) (reason)`
pub(super) fn quit(line: &str) -> Option<Match<'_>> {
    finish(quit_line(line))
}

/// `[HH:MM] *** actor sets mode: modes targets...`
pub(super) fn mode(line: &str) -> Option<Match<'_>> {
    finish(mode_line(line))
}

/// `[HH:MM] * nick rest`
pub(super) fn action(line: &str) -> Option<Match<'_>> {
    finish(action_line(line))
}

/// `[HH:MM] *** old is now known as new`
pub(super) fn nickchange(line: &str) -> Option<Match<'_>> {
    finish(nickchange_line(line))
}

/// `[HH:MM] *** Parts: nick (host)`
pub(super) fn part(line: &str) -> Option<Match<'_>> {
    finish(part_line(line))
}

/// `[HH:MM] *** nick changes topic to 'topic'`
pub(super) fn topic(line: &str) -> Option<Match<'_>> {
    finish(topic_line(line))
}

/// `[HH:MM] *** kicked was kicked by kicker (reason)`
pub(super) fn kick(line: &str) -> Option<Match<'_>> {
    finish(kick_line(line))
}
