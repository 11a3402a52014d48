//! Pure dialogue transition function
//!
//! Given the current menu state and a selected option id, produce the next
//! state and the effects to apply. No I/O happens here.

use super::message::Message;
use super::option::{Category, OptionId, Report};
use super::script;
use super::state::MenuState;
use super::transcript::{Transcript, TranscriptDelta, TranscriptUpdate};
use super::Effect;

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: MenuState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: MenuState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Transition table: `state × option id → (state', effects)`.
///
/// Total over every input. The target depends only on the option id, so a
/// stale menu (an option from an older bot message) behaves the same as a
/// fresh one.
pub fn transition(_state: &MenuState, option_id: &OptionId) -> TransitionResult {
    let (new_state, update) = respond(option_id);

    match update {
        TranscriptUpdate::Delta(TranscriptDelta { user, bot }) => {
            let messages = vec![user, bot];
            let count = messages.len();
            TransitionResult::new(new_state)
                .with_effect(Effect::AppendMessages { messages })
                .with_effect(Effect::appended(count))
        }
        TranscriptUpdate::Reset { seed } => TransitionResult::new(new_state)
            .with_effect(Effect::ResetTranscript { seed })
            .with_effect(Effect::reset()),
    }
}

/// What selecting `option_id` does to a transcript
pub fn select_option(option_id: &str) -> TranscriptUpdate {
    respond(&OptionId::parse(option_id)).1
}

impl Transcript {
    /// The transcript that results from selecting `option_id`
    pub fn after(&self, option_id: &str) -> Transcript {
        let mut next = self.clone();
        next.apply(select_option(option_id));
        next
    }
}

fn respond(option_id: &OptionId) -> (MenuState, TranscriptUpdate) {
    match option_id {
        OptionId::Back | OptionId::Restart => (
            MenuState::Root,
            TranscriptUpdate::Reset {
                seed: script::reset_seed(),
            },
        ),

        OptionId::Category(category) => {
            let state = match category {
                Category::Sales => MenuState::SalesMenu,
                Category::Users => MenuState::UsersMenu,
                Category::Db => MenuState::DbMenu,
            };
            let bot = Message::bot(script::category_prompt(*category), script::options_for(&state));
            (state, delta(script::category_echo(*category), bot))
        }

        OptionId::Period(period) => {
            let state = MenuState::ReportView {
                report: Report::Sales(*period),
            };
            let bot = Message::bot(script::period_summary(*period), script::options_for(&state))
                .with_chart();
            (state, delta(script::period_echo(*period), bot))
        }

        OptionId::UserMetric(metric) => {
            let state = MenuState::ReportView {
                report: Report::Users(*metric),
            };
            let bot = Message::bot(
                script::user_metric_summary(*metric),
                script::options_for(&state),
            )
            .with_chart();
            (state, delta(script::user_metric_echo(*metric), bot))
        }

        OptionId::DbMetric(metric) => {
            let state = MenuState::ReportView {
                report: Report::Db(*metric),
            };
            let bot = Message::bot(
                script::db_metric_summary(*metric),
                script::options_for(&state),
            );
            (state, delta(script::db_metric_echo(*metric), bot))
        }

        OptionId::Download => {
            let state = MenuState::Downloaded;
            let bot = Message::bot(script::DOWNLOAD_REPLY, script::options_for(&state));
            (state, delta(script::DOWNLOAD_ECHO, bot))
        }

        OptionId::Unknown(raw) => {
            let state = MenuState::Fallback;
            let bot = Message::bot(script::FALLBACK_REPLY, script::options_for(&state));
            (state, delta(raw.clone(), bot))
        }
    }
}

fn delta(echo: impl Into<String>, bot: Message) -> TranscriptUpdate {
    TranscriptUpdate::Delta(TranscriptDelta {
        user: Message::user(echo),
        bot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::message::Sender;
    use crate::dialogue::option::{DbMetric, Period, UserMetric};

    fn run(transcript: &mut Transcript, state: &mut MenuState, id: &str) {
        let result = transition(state, &OptionId::parse(id));
        for effect in result.effects {
            match effect {
                Effect::AppendMessages { messages } => transcript.extend(messages),
                Effect::ResetTranscript { seed } => transcript.reset(seed),
                Effect::NotifyTranscriptChanged { .. } => {}
            }
        }
        *state = result.new_state;
    }

    #[test]
    fn test_sales_monthly_back_scenario() {
        let mut transcript = Transcript::new();
        let mut state = MenuState::Root;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last().option_ids(), vec!["sales", "users", "db"]);

        run(&mut transcript, &mut state, "sales");
        assert_eq!(transcript.len(), 3);
        let echo = transcript.get(1).unwrap();
        assert_eq!(echo.sender, Sender::User);
        assert!(echo.text.contains("informe de ventas"));
        assert_eq!(
            transcript.last().option_ids(),
            vec!["monthly", "quarterly", "annual"]
        );
        assert_eq!(state, MenuState::SalesMenu);

        run(&mut transcript, &mut state, "monthly");
        assert_eq!(transcript.len(), 5);
        assert!(transcript.get(4).unwrap().has_chart);
        assert_eq!(transcript.last().option_ids(), vec!["download", "back"]);
        assert_eq!(
            state,
            MenuState::ReportView {
                report: Report::Sales(Period::Monthly)
            }
        );

        run(&mut transcript, &mut state, "back");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.first().option_ids(), vec!["sales", "users", "db"]);
        assert_eq!(state, MenuState::Root);
    }

    #[test]
    fn test_reset_emits_no_user_echo() {
        let result = transition(&MenuState::Downloaded, &OptionId::Restart);
        assert_eq!(result.new_state, MenuState::Root);
        assert!(!result
            .effects
            .iter()
            .any(|e| matches!(e, Effect::AppendMessages { .. })));
        assert!(result.effects.contains(&Effect::reset()));
    }

    #[test]
    fn test_period_group_has_chart_and_report_options() {
        for id in ["monthly", "quarterly", "annual"] {
            let TranscriptUpdate::Delta(delta) = select_option(id) else {
                panic!("{id} should append");
            };
            assert!(delta.bot.has_chart, "{id} should carry a chart");
            assert_eq!(delta.bot.option_ids(), vec!["download", "back"]);
        }
    }

    #[test]
    fn test_user_metrics_chart_and_db_metrics_do_not() {
        let result = transition(&MenuState::UsersMenu, &OptionId::UserMetric(UserMetric::New));
        let Some(Effect::AppendMessages { messages }) = result.effects.first() else {
            panic!("expected append");
        };
        assert!(messages[1].has_chart);

        let result = transition(&MenuState::DbMenu, &OptionId::DbMetric(DbMetric::Backup));
        let Some(Effect::AppendMessages { messages }) = result.effects.first() else {
            panic!("expected append");
        };
        assert!(!messages[1].has_chart);
        assert!(messages[0].text.contains("copias de seguridad"));
    }

    #[test]
    fn test_download_offers_restart_only() {
        let TranscriptUpdate::Delta(delta) = select_option("download") else {
            panic!("download should append");
        };
        assert_eq!(delta.user.text, script::DOWNLOAD_ECHO);
        assert_eq!(delta.bot.option_ids(), vec!["restart"]);
    }

    #[test]
    fn test_unknown_id_falls_back_to_generic_menu() {
        let result = transition(&MenuState::Root, &OptionId::parse("pricing"));
        assert_eq!(result.new_state, MenuState::Fallback);

        let TranscriptUpdate::Delta(delta) = select_option("¿precio?") else {
            panic!("unknown ids should append");
        };
        assert_eq!(delta.user.text, "¿precio?");
        assert_eq!(delta.bot.text, script::FALLBACK_REPLY);
        assert_eq!(delta.bot.option_ids(), vec!["pricing", "plans", "support"]);
    }

    #[test]
    fn test_after_leaves_original_untouched() {
        let original = Transcript::new();
        let next = original.after("users");
        assert_eq!(original.len(), 1);
        assert_eq!(next.len(), 3);
        assert_eq!(next.first(), original.first());
    }
}
