//! Page-level screens selected by the shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns its screen state: it creates the signals, provides them to
//! its components, and drops them when the shell switches away.

pub mod dashboard;
pub mod intake;
pub mod resolution;
