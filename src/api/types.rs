//! API request and response types

use crate::interview::Phase;
use serde::{Deserialize, Serialize};

/// Body of `POST /start`
#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub role: String,
}

/// Body of `POST /next`
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub role: String,
    pub user_answer: String,
    pub history: Vec<String>,
}

/// Body of `POST /feedback`
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub role: String,
    pub history: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub question: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InterviewStatus {
    Qna,
    Completed,
}

impl From<Phase> for InterviewStatus {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Questioning => Self::Qna,
            Phase::Completed => Self::Completed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NextResponse {
    pub question: String,
    pub status: InterviewStatus,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback_report: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&InterviewStatus::Qna).unwrap(), "\"QNA\"");
        assert_eq!(
            serde_json::to_string(&InterviewStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }

    #[test]
    fn test_answer_request_requires_history() {
        let err = serde_json::from_str::<AnswerRequest>(r#"{"role":"x","user_answer":"y"}"#);
        assert!(err.is_err());
    }
}
