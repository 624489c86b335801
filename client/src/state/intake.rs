//! Intake conversation state.
//!
//! DESIGN
//! ======
//! The transcript is append-only. A send is accepted only when the input is
//! non-blank and no call is pending; the reply (success or fallback) is
//! appended by [`IntakeState::finish`]. On success `pending` stays set until
//! the shell leaves the screen, so the input remains disabled during the
//! transition delay.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

use cases::intake::{FALLBACK_REPLY, GREETING, TranscriptEntry, compose_case_reply};
use cases::{AgentEnvelope, CaseManagerResult};

#[derive(Clone, Debug)]
pub struct IntakeState {
    pub transcript: Vec<TranscriptEntry>,
    pub input: String,
    pub pending: bool,
    pub quick_replies_visible: bool,
}

impl Default for IntakeState {
    fn default() -> Self {
        Self {
            transcript: vec![TranscriptEntry::agent(GREETING)],
            input: String::new(),
            pending: false,
            quick_replies_visible: true,
        }
    }
}

impl IntakeState {
    /// Record a user message. Returns the text to send to the agent, or
    /// `None` if the send is ignored.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        if self.pending || text.trim().is_empty() {
            return None;
        }
        self.transcript.push(TranscriptEntry::user(text));
        self.input.clear();
        self.quick_replies_visible = false;
        self.pending = true;
        Some(text.to_owned())
    }

    /// Append the agent reply for a finished call. `envelope` is `None` when
    /// the request itself failed. Returns the decoded analysis on success.
    pub fn finish(&mut self, envelope: Option<&AgentEnvelope>, now_ms: i64) -> Option<CaseManagerResult> {
        if let Some(result) = envelope.and_then(AgentEnvelope::successful_result::<CaseManagerResult>) {
            self.transcript.push(TranscriptEntry::agent(compose_case_reply(&result, now_ms)));
            return Some(result);
        }
        self.transcript.push(TranscriptEntry::agent(FALLBACK_REPLY));
        self.pending = false;
        None
    }

    #[must_use]
    pub fn show_quick_replies(&self) -> bool {
        self.quick_replies_visible && !self.pending
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }
}
