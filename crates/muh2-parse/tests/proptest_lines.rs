//! Property-based tests for the line classifier.
//!
//! Uses proptest to generate random muh2 lines and verify that:
//! 1. Classification never panics and is deterministic
//! 2. Text no grammar accepts yields exactly one notice
//! 3. Hosts come out the same with or without a leading `~`
//! 4. Mode lines produce one event per letter when counts agree

use muh2_parse::{Event, LineClassifier, LineContext, NormalizedLine, Notice};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn nick_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,15}")
        .expect("valid regex")
}

fn host_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,8}@[a-z0-9]+(\\.[a-z0-9]+){0,3}")
        .expect("valid regex")
}

fn time_strategy() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("[{:02}:{:02}]", h, m))
}

fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,.!?'()]{1,80}").expect("valid regex")
}

fn mode_strategy() -> impl Strategy<Value = Vec<(bool, Vec<char>)>> {
    prop::collection::vec(
        (any::<bool>(), prop::collection::vec(prop_oneof![Just('o'), Just('v')], 1..4)),
        1..4,
    )
}

fn ctx() -> LineContext {
    "2011-11-11".parse().expect("valid date")
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn classify_is_total_and_deterministic(raw in "\\PC{0,120}") {
        let classifier = LineClassifier::new();
        let line = NormalizedLine::new(1, &raw);
        let first = classifier.classify(&line, &ctx());
        let second = classifier.classify(&line, &ctx());
        prop_assert_eq!(&first, &second);

        if line.is_empty() {
            prop_assert!(first.is_empty());
        }
        prop_assert!(first.notices.len() <= 1);
    }

    #[test]
    fn unrecognized_lines_yield_one_notice(text in "[a-z][a-z ]{0,60}") {
        let line = NormalizedLine::new(9, &text);
        let res = LineClassifier::new().classify(&line, &ctx());
        prop_assert!(res.events.is_empty());
        prop_assert_eq!(res.notices.len(), 1);
        let is_unrecognized = matches!(res.notices[0], Notice::Unrecognized { line: 9, .. });
        prop_assert!(is_unrecognized);
    }

    #[test]
    fn host_tilde_is_irrelevant(
        time in time_strategy(),
        nick in nick_strategy(),
        host in host_strategy(),
    ) {
        let classifier = LineClassifier::new();
        let with = format!("{} *** Joins: {} (~{})", time, nick, host);
        let without = format!("{} *** Joins: {} ({})", time, nick, host);
        let with = NormalizedLine::new(1, &with);
        let without = NormalizedLine::new(1, &without);

        let a = classifier.classify(&with, &ctx());
        let b = classifier.classify(&without, &ctx());
        prop_assert_eq!(&a, &b);
        let host_matches = matches!(
            a.events.as_slice(),
            [Event::Join { host: h, .. }] if h == &host
        );
        prop_assert!(host_matches);
    }

    #[test]
    fn normal_lines_round_trip_fields(
        time in time_strategy(),
        nick in nick_strategy(),
        message in message_strategy(),
    ) {
        let message = message.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assume!(!message.is_empty());

        let raw = format!("{} <{}> {}", time, nick, message);
        let line = NormalizedLine::new(1, &raw);
        let res = LineClassifier::new().classify(&line, &ctx());
        prop_assert_eq!(res.events.len(), 1);
        let fields_match = matches!(
            &res.events[0],
            Event::Normal { nick: n, message: m, .. } if n == &nick && m == &message
        );
        prop_assert!(fields_match);
    }

    #[test]
    fn balanced_mode_lines_decode_every_letter(
        time in time_strategy(),
        actor in nick_strategy(),
        groups in mode_strategy(),
        pool in prop::collection::vec(nick_strategy(), 12),
    ) {
        let mut modes = String::new();
        for (plus, letters) in &groups {
            modes.push(if *plus { '+' } else { '-' });
            modes.extend(letters.iter());
        }
        let letter_count = modes.chars().filter(|c| *c == 'o' || *c == 'v').count();
        let targets = &pool[..letter_count];

        let raw = format!("{} *** {} sets mode: {} {}", time, actor, modes, targets.join(" "));
        let line = NormalizedLine::new(1, &raw);
        let res = LineClassifier::new().classify(&line, &ctx());

        prop_assert!(res.notices.is_empty());
        prop_assert_eq!(res.events.len(), letter_count);
        for (event, expected) in res.events.iter().zip(targets) {
            let target_matches = matches!(event, Event::Mode { target, .. } if target == expected);
            prop_assert!(target_matches);
        }
    }
}
