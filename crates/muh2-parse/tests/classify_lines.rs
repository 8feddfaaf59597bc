//! Integration tests for classifying muh2 log lines.
//!
//! Each test feeds lines through the public API and checks the events a sink
//! receives, in order.

use muh2_parse::{
    Collector, Event, LineClassifier, LineContext, ModeChange, ModeLetter, NormalizedLine, Notice,
    Sign,
};

const DATE: &str = "2009-03-14";

fn ctx() -> LineContext {
    DATE.parse().expect("valid date")
}

/// Run `lines` through a fresh collector, numbering them from 1.
fn run(lines: &[&str]) -> Collector {
    let classifier = LineClassifier::new();
    let ctx = ctx();
    let mut sink = Collector::default();
    for (idx, raw) in lines.iter().enumerate() {
        let line = NormalizedLine::new(idx + 1, raw);
        classifier.feed(&line, &ctx, &mut sink);
    }
    sink
}

fn only_event(line: &str) -> Event<'static> {
    let sink = run(&[line]);
    assert!(sink.notices.is_empty(), "unexpected notices: {:?}", sink.notices);
    assert_eq!(sink.events.len(), 1, "events: {:?}", sink.events);
    sink.events.into_iter().next().expect("one event")
}

#[test]
fn test_normal_message() {
    let Event::Normal {
        time,
        nick,
        message,
    } = only_event("[21:15] <alice> hello there")
    else {
        panic!("expected a normal event");
    };
    assert_eq!(time.to_string(), "2009-03-14 21:15");
    assert_eq!(nick, "alice");
    assert_eq!(message, "hello there");
}

#[test]
fn test_seconds_are_discarded() {
    let event = only_event("[21:15:33] <alice> hi");
    assert_eq!(event.time().to_string(), "2009-03-14 21:15");
}

#[test]
fn test_join_strips_tilde() {
    let Event::Join { nick, host, .. } = only_event("[21:15] *** Joins: bob (~bobhost)") else {
        panic!("expected a join event");
    };
    assert_eq!(nick, "bob");
    assert_eq!(host, "bobhost");
}

#[test]
fn test_host_is_the_same_with_or_without_tilde() {
    let with = only_event("[21:15] *** Parts: bob (~bob@example.org)");
    let without = only_event("[21:15] *** Parts: bob (bob@example.org)");
    assert_eq!(with, without);
}

#[test]
fn test_quit_ignores_reason() {
    let Event::Quit { nick, host, .. } =
        only_event("[03:00] *** Quits: bob (~b@h.example.org) (Read error: Connection reset)")
    else {
        panic!("expected a quit event");
    };
    assert_eq!(nick, "bob");
    assert_eq!(host, "b@h.example.org");

    let sink = run(&["[03:00] *** Quits: bob (b@h) ()"]);
    assert_eq!(sink.events.len(), 1);
}

#[test]
fn test_mode_targets_in_order() {
    let sink = run(&["[21:15] *** mod sets mode: +o-v carol dave"]);
    assert!(sink.notices.is_empty());

    let modes: Vec<(String, String, ModeChange)> = sink
        .events
        .iter()
        .map(|e| match e {
            Event::Mode {
                actor,
                target,
                mode,
                ..
            } => (actor.to_string(), target.to_string(), *mode),
            other => panic!("unexpected event {:?}", other),
        })
        .collect();

    assert_eq!(
        modes,
        vec![
            (
                "mod".to_string(),
                "carol".to_string(),
                ModeChange::new(Sign::Plus, ModeLetter::Op)
            ),
            (
                "mod".to_string(),
                "dave".to_string(),
                ModeChange::new(Sign::Minus, ModeLetter::Voice)
            ),
        ]
    );
}

#[test]
fn test_mode_with_too_few_targets_truncates() {
    let sink = run(&["[21:15] *** mod sets mode: +vvv a b"]);
    assert_eq!(sink.events.len(), 2);
    assert_eq!(
        sink.notices,
        vec![Notice::ModeArity {
            line: 1,
            letters: 3,
            targets: 2,
        }]
    );
}

#[test]
fn test_mode_with_unused_targets() {
    let sink = run(&["[21:15] *** mod sets mode: +o a b"]);
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.notices.len(), 1);
}

#[test]
fn test_slap_then_action() {
    let sink = run(&["[21:15] * alice slaps bob with a trout"]);
    assert_eq!(sink.events.len(), 2);

    let Event::Slap { nick, target, .. } = &sink.events[0] else {
        panic!("expected a slap first, got {:?}", sink.events[0]);
    };
    assert_eq!(nick, "alice");
    assert_eq!(target.as_deref(), Some("bob"));

    let Event::Action { nick, message, .. } = &sink.events[1] else {
        panic!("expected an action second, got {:?}", sink.events[1]);
    };
    assert_eq!(nick, "alice");
    assert_eq!(message, "slaps bob with a trout");
}

#[test]
fn test_slap_without_target() {
    let sink = run(&["[21:15] * alice slaps"]);
    assert!(matches!(
        sink.events.as_slice(),
        [Event::Slap { target: None, .. }, Event::Action { .. }]
    ));
}

#[test]
fn test_action_without_slap() {
    let Event::Action { nick, message, .. } = only_event("[21:15] * alice waves") else {
        panic!("expected an action event");
    };
    assert_eq!(nick, "alice");
    assert_eq!(message, "waves");
}

#[test]
fn test_nickchange() {
    let Event::Nickchange { old, new, .. } =
        only_event("[21:15] *** bob is now known as bob_away")
    else {
        panic!("expected a nick change");
    };
    assert_eq!(old, "bob");
    assert_eq!(new, "bob_away");
}

#[test]
fn test_topic() {
    let Event::Topic { nick, topic, .. } =
        only_event("[21:15] *** carol changes topic to 'release on friday'")
    else {
        panic!("expected a topic event");
    };
    assert_eq!(nick, "carol");
    assert_eq!(topic, "release on friday");
}

#[test]
fn test_kick_keeps_whole_clause() {
    let Event::Kick {
        kicker,
        kicked,
        line,
        ..
    } = only_event("[21:15] *** bob was kicked by mod (stop flooding)")
    else {
        panic!("expected a kick event");
    };
    assert_eq!(kicker, "mod");
    assert_eq!(kicked, "bob");
    assert_eq!(line, "bob was kicked by mod (stop flooding)");
}

#[test]
fn test_formatting_is_stripped_before_matching() {
    let Event::Normal { message, .. } = only_event("[21:15] <alice> \x02bold\x02  \x034,1red\x03 ") else {
        panic!("expected a normal event");
    };
    assert_eq!(message, "bold red");
}

#[test]
fn test_unrecognized_and_empty_lines() {
    let sink = run(&["", "   ", "Session Start: Sat Mar 14 00:00:00 2009", "[25:00] <a> b"]);
    assert!(sink.events.is_empty());
    assert_eq!(
        sink.notices,
        vec![
            Notice::Unrecognized {
                line: 3,
                text: "Session Start: Sat Mar 14 00:00:00 2009".to_string(),
            },
            Notice::Unrecognized {
                line: 4,
                text: "[25:00] <a> b".to_string(),
            },
        ]
    );
    assert_eq!(
        sink.notices[0].to_string(),
        "unrecognized line #3: 'Session Start: Sat Mar 14 00:00:00 2009'"
    );
}

#[test]
fn test_bad_line_does_not_stop_the_stream() {
    let sink = run(&[
        "[21:14] <alice> before",
        "complete garbage",
        "[21:16] <alice> after",
    ]);
    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.notices.len(), 1);
    assert_eq!(sink.notices[0].line(), 2);
}

#[test]
fn test_classify_is_idempotent() {
    let classifier = LineClassifier::new();
    let ctx = ctx();
    let line = NormalizedLine::new(1, "[21:15] *** mod sets mode: +ov-o a b c");
    assert_eq!(
        classifier.classify(&line, &ctx),
        classifier.classify(&line, &ctx)
    );
}
