//! Conversational intake copy and reply composition.
//!
//! The intake screen's transcript is owned by the client; this module holds
//! the text rules so the server-rendered and hydrated views agree on them.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

use serde::{Deserialize, Serialize};

use crate::agent::CaseManagerResult;

/// Case summaries longer than this many characters are cut and suffixed.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Marker appended to a truncated summary.
pub const ELLIPSIS: &str = "...";

/// Delay between the agent's confirmation reply and the move to the dashboard.
pub const SUBMIT_TRANSITION_DELAY_MS: u64 = 2000;

pub const GREETING: &str =
    "Hi! I'm here to help with your transaction dispute. Can you tell me about the charge you don't recognize?";

/// Single reply for every failed submission: transport error, rejected call,
/// or a result that does not decode.
pub const FALLBACK_REPLY: &str = "I'm having trouble processing your request. Please try again.";

pub const EMPTY_SUMMARY_REPLY: &str = "I have analyzed the evidence and created a case for review.";

pub const QUICK_REPLIES: [&str; 4] = [
    "I don't recognize this charge",
    "I never went to this place",
    "My card was stolen",
    "This looks like fraud",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Agent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::User, text: text.into() }
    }

    #[must_use]
    pub fn agent(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::Agent, text: text.into() }
    }
}

/// Cut `summary` to [`SUMMARY_MAX_CHARS`] characters plus [`ELLIPSIS`].
/// Counts Unicode scalar values so a multi-byte character is never split.
#[must_use]
pub fn truncate_summary(summary: &str) -> String {
    match summary.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &summary[..byte_idx]),
        None => summary.to_owned(),
    }
}

/// Case id used when the agent returns none.
#[must_use]
pub fn fallback_case_id(now_ms: i64) -> String {
    format!("DSP-{now_ms}")
}

/// Agent reply appended after a successful case submission.
#[must_use]
pub fn compose_case_reply(result: &CaseManagerResult, now_ms: i64) -> String {
    let case_id = if result.case_id.trim().is_empty() {
        fallback_case_id(now_ms)
    } else {
        result.case_id.clone()
    };
    let summary = if result.case_summary.is_empty() {
        EMPTY_SUMMARY_REPLY.to_owned()
    } else {
        truncate_summary(&result.case_summary)
    };
    format!("Thanks for that information. I've created case {case_id} and analyzed the evidence. {summary}")
}
