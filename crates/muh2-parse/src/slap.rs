//! Slap detection inside action lines.
//!
//! `* alice slaps bob around a bit with a large trout` is both an action and
//! a slap. The remainder of an action line is a slap when it starts with the
//! word `slaps` (any case); the next word, if it is a plausible nick, is the
//! target.

use nom::{
    bytes::complete::{tag_no_case, take_till},
    character::complete::multispace1,
    IResult,
};

use crate::grammar::is_nick_char;

fn slap(input: &str) -> IResult<&str, Option<&str>> {
    let (input, _) = tag_no_case("slaps")(input)?;
    if input.is_empty() {
        return Ok((input, None));
    }

    let (input, _) = multispace1(input)?;
    let (input, word) = take_till(char::is_whitespace)(input)?;
    let target = (!word.is_empty() && word.chars().all(is_nick_char)).then_some(word);
    Ok((input, target))
}

/// Check an action's remainder for a slap.
///
/// Returns `None` if the action is not a slap, `Some(None)` for a slap
/// without a usable target and `Some(Some(target))` otherwise.
pub fn slap_target(rest: &str) -> Option<Option<&str>> {
    slap(rest).ok().map(|(_, target)| target)
}
