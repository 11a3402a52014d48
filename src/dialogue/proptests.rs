//! Property-based tests for the dialogue engine
//!
//! These tests verify key invariants hold across all possible selections.

use super::option::KNOWN_IDS;
use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_known_id() -> impl Strategy<Value = String> {
    proptest::sample::select(KNOWN_IDS.to_vec()).prop_map(String::from)
}

fn arb_garbage_id() -> impl Strategy<Value = String> {
    ".{0,24}".prop_filter("must not collide with a known id", |s| {
        !KNOWN_IDS.contains(&s.as_str())
    })
}

fn arb_any_id() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => arb_known_id(),
        1 => arb_garbage_id(),
        1 => Just("pricing".to_string()),
    ]
}

fn arb_non_reset_id() -> impl Strategy<Value = String> {
    arb_any_id().prop_filter("back/restart replace the transcript", |id| {
        !OptionId::parse(id).is_reset()
    })
}

fn arb_transcript() -> impl Strategy<Value = Transcript> {
    proptest::collection::vec(arb_any_id(), 0..12).prop_map(|ids| {
        ids.iter()
            .fold(Transcript::new(), |transcript, id| transcript.after(id))
    })
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Apply a transition's effects the way the runtime does
fn apply(transcript: &mut Transcript, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::AppendMessages { messages } => transcript.extend(messages),
            Effect::ResetTranscript { seed } => transcript.reset(seed),
            Effect::NotifyTranscriptChanged { .. } => {}
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Appends never rewrite history
    #[test]
    fn prop_non_reset_appends_two(transcript in arb_transcript(), id in arb_non_reset_id()) {
        let next = transcript.after(&id);
        prop_assert_eq!(next.len(), transcript.len() + 2);
        for (before, after) in transcript.iter().zip(next.iter()) {
            prop_assert_eq!(before, after);
        }
        let echo = next.get(transcript.len()).unwrap();
        prop_assert_eq!(echo.sender, Sender::User);
        prop_assert!(next.last().is_bot());
    }

    // back/restart always land on the seeded root menu
    #[test]
    fn prop_reset_yields_single_seed(
        transcript in arb_transcript(),
        id in prop_oneof![Just("back"), Just("restart")],
    ) {
        let next = transcript.after(id);
        prop_assert_eq!(next.len(), 1);
        prop_assert!(next.first().is_bot());
        prop_assert_eq!(next.first().option_ids(), vec!["sales", "users", "db"]);
    }

    // Garbage input is handled by the default branch, never a panic
    #[test]
    fn prop_unknown_ids_fall_back(transcript in arb_transcript(), id in arb_garbage_id()) {
        let next = transcript.after(&id);
        prop_assert_eq!(next.len(), transcript.len() + 2);
        prop_assert_eq!(next.last().option_ids(), vec!["pricing", "plans", "support"]);
        let result = transition(&MenuState::Root, &OptionId::parse(&id));
        prop_assert_eq!(result.new_state, MenuState::Fallback);
    }

    // The explicit state always agrees with the options on screen
    #[test]
    fn prop_state_matches_last_options(ids in proptest::collection::vec(arb_any_id(), 0..30)) {
        let mut transcript = Transcript::new();
        let mut state = MenuState::Root;

        for id in &ids {
            let result = transition(&state, &OptionId::parse(id));
            apply(&mut transcript, result.effects);
            state = result.new_state;

            let expected: Vec<&str> = transcript.last().option_ids();
            prop_assert_eq!(
                state.option_ids(),
                expected,
                "state {:?} disagrees with transcript after {:?}",
                state,
                id
            );
            prop_assert!(transcript.first().is_bot());
        }
    }

    // Every transition emits exactly one change notification
    #[test]
    fn prop_one_notification_per_selection(state in Just(MenuState::Root), id in arb_any_id()) {
        let result = transition(&state, &OptionId::parse(&id));
        let notifications = result
            .effects
            .iter()
            .filter(|e| matches!(e, Effect::NotifyTranscriptChanged { .. }))
            .count();
        prop_assert_eq!(notifications, 1);
    }
}
