//! Property-based tests for the turn policy and fallbacks
//!
//! - Any role yields a non-empty opening question, model up or down
//! - The closing branch never touches the model
//! - Below the limit the status is always `Questioning`

use super::*;
use crate::llm::testing::MockLlmClient;
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

fn arb_history(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(".{0,40}", 0..max)
}

proptest! {
    #[test]
    fn start_never_returns_empty(role in ".{0,60}", fail in any::<bool>()) {
        let mock = Arc::new(MockLlmClient::new("mock"));
        if fail {
            mock.queue_error(LlmError::unknown("boom"));
        } else {
            mock.queue_text("  What drew you to this field?  ");
        }
        let interviewer = Interviewer::new(mock, TurnLimit::default());
        let question = runtime().block_on(interviewer.start(&role));
        prop_assert!(!question.trim().is_empty());
    }

    #[test]
    fn completed_history_skips_model(
        role in ".{0,30}",
        answer in ".{0,30}",
        extra in arb_history(6),
        max_turns in 0usize..4,
    ) {
        let mut history: Vec<String> = (0..max_turns * 2).map(|i| format!("turn {i}")).collect();
        history.extend(extra);

        let mock = Arc::new(MockLlmClient::new("mock"));
        let interviewer = Interviewer::new(mock.clone(), TurnLimit::new(max_turns));
        let next = runtime().block_on(interviewer.next_question(&role, &answer, &history));

        prop_assert_eq!(next.phase, Phase::Completed);
        prop_assert_eq!(next.question.as_str(), CLOSING_MESSAGE);
        prop_assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn short_history_keeps_questioning(history in arb_history(4), fail in any::<bool>()) {
        let mock = Arc::new(MockLlmClient::new("mock"));
        if fail {
            mock.queue_error(LlmError::server_error("unavailable"));
        } else {
            mock.queue_text("Next question?");
        }
        let interviewer = Interviewer::new(mock.clone(), TurnLimit::default());
        let next = runtime().block_on(interviewer.next_question("role", "answer", &history));

        prop_assert_eq!(next.phase, Phase::Questioning);
        prop_assert_eq!(mock.call_count(), 1);
    }
}
