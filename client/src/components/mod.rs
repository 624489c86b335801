//! Reusable UI components for the dispute desk.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from context signals provided by `app::App`
//! and emit changes through signal updates or callbacks.

pub mod action_panel;
pub mod case_detail;
pub mod case_queue;
pub mod demo_controls;
pub mod evidence_panels;
pub mod risk_badge;
pub mod timeline_item;
pub mod transaction_card;
