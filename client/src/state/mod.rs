//! Reactive state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct is wrapped in an `RwSignal` and provided via context by
//! `app::App`. The structs themselves are plain data with pure transition
//! methods so the rules can be unit-tested without a reactive runtime.

pub mod case_detail;
pub mod dashboard;
pub mod intake;
pub mod shell;
