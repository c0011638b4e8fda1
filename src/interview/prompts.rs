//! Prompt templates for each interview phase
//!
//! Caller-supplied text is embedded verbatim.

use std::fmt::Write;

const FEEDBACK_INSTRUCTIONS: &str = r"Provide:
1. A short summary paragraph (3-4 sentences).
2. A markdown table for key metrics:
    | Metric | Rating | Notes |
    |---|---|---|
    | Communication | [Score 1-10] | [Brief comment on clarity/articulation] |
    | Content Depth | [Score 1-10] | [Brief comment on domain knowledge] |
    | Confidence | [Low/Medium/High] | [Assessment of self-assurance] |
    | Recommendation | [Hire/Maybe/No-Hire] | [Final hiring decision] |

Ensure the output is ONLY the summary and the markdown table.";

/// Transcript entries as a single newline-separated block
pub fn join_history(history: &[String]) -> String {
    history.join("\n")
}

pub fn start_prompt(role: &str) -> String {
    format!(
        "You are a professional interviewer for a {role} role. \
         Start the interview with a welcoming, standard first question. \
         Return ONLY the question."
    )
}

pub fn next_prompt(role: &str, user_answer: &str, history: &[String]) -> String {
    let mut prompt = String::new();
    let _ = writeln!(prompt, "You are interviewing for: {role}.");
    let _ = writeln!(prompt, "The candidate just gave this answer: \"{user_answer}\"");
    prompt.push('\n');
    prompt.push_str("Full conversation history (use this for context):\n");
    prompt.push_str(&join_history(history));
    prompt.push_str("\n\n");
    prompt.push_str("Ask a helpful follow-up OR the next question.\n");
    prompt.push_str("Keep the interview moving. Return ONLY the question.");
    prompt
}

pub fn feedback_prompt(role: &str, history: &[String]) -> String {
    format!(
        "Evaluate the interview performance for the candidate applying for the role: {role}.\n\n\
         Conversation:\n{}\n\n{FEEDBACK_INSTRUCTIONS}",
        join_history(history)
    )
}
