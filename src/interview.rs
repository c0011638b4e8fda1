//! Interview flow: prompt construction, turn policy and failure fallbacks
//!
//! All conversational state lives with the caller. Each operation builds one
//! prompt, makes at most one completion call, and never surfaces an error.

mod prompts;
#[cfg(test)]
mod proptests;

use crate::llm::{LlmError, LlmRequest, LlmService};
use std::sync::Arc;

pub const FALLBACK_OPENING_QUESTION: &str = "Hello! Please tell me a little bit about yourself.";
pub const CLOSING_MESSAGE: &str = "Thank you for your time. I will now compile your feedback.";
pub const REPHRASE_APOLOGY: &str =
    "I apologize, there was a brief technical error. Can you please rephrase your last answer?";

/// Number of exchange pairs after which the interview completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnLimit {
    pub max_turns: usize,
}

impl TurnLimit {
    pub fn new(max_turns: usize) -> Self {
        Self { max_turns }
    }

    /// A question and its answer count as two history entries
    pub fn is_reached(self, history_len: usize) -> bool {
        history_len >= self.max_turns.saturating_mul(2)
    }
}

impl Default for TurnLimit {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Where the interview stands after `/next`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Questioning,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQuestion {
    pub question: String,
    pub phase: Phase,
}

pub struct Interviewer {
    llm: Arc<dyn LlmService>,
    turn_limit: TurnLimit,
}

impl Interviewer {
    pub fn new(llm: Arc<dyn LlmService>, turn_limit: TurnLimit) -> Self {
        Self { llm, turn_limit }
    }

    /// Opening question for `role`; falls back to a fixed greeting
    pub async fn start(&self, role: &str) -> String {
        match self.generate(prompts::start_prompt(role)).await {
            Ok(question) => question,
            Err(e) => {
                tracing::warn!(role, error = %e, "Error starting interview, using fallback question");
                FALLBACK_OPENING_QUESTION.to_string()
            }
        }
    }

    /// Follow-up or next question, or the closing message once the turn limit is hit
    pub async fn next_question(
        &self,
        role: &str,
        user_answer: &str,
        history: &[String],
    ) -> NextQuestion {
        if self.turn_limit.is_reached(history.len()) {
            tracing::info!(
                role,
                history_len = history.len(),
                max_turns = self.turn_limit.max_turns,
                "Turn limit reached, completing interview"
            );
            return NextQuestion {
                question: CLOSING_MESSAGE.to_string(),
                phase: Phase::Completed,
            };
        }

        let question = match self
            .generate(prompts::next_prompt(role, user_answer, history))
            .await
        {
            Ok(question) => question,
            Err(e) => {
                tracing::warn!(role, error = %e, "Error getting next question, asking to rephrase");
                REPHRASE_APOLOGY.to_string()
            }
        };

        NextQuestion {
            question,
            phase: Phase::Questioning,
        }
    }

    /// Summary plus metrics table; on failure the error text is the report
    pub async fn feedback(&self, role: &str, history: &[String]) -> String {
        match self.generate(prompts::feedback_prompt(role, history)).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(role, error = %e, "Error generating feedback report");
                format!("Error generating report: {e}")
            }
        }
    }

    async fn generate(&self, prompt: String) -> Result<String, LlmError> {
        let response = self.llm.complete(&LlmRequest::new(prompt)).await?;
        let text = response.text.trim();
        if text.is_empty() {
            return Err(LlmError::unknown("Model returned an empty completion"));
        }
        Ok(text.to_string())
    }
}
