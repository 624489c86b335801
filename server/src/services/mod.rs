//! Domain service modules used by HTTP routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes stay thin: they parse transport input and map errors to status
//! codes, while services own logging and the calls into the repository and
//! the agent client.

pub mod agent;
pub mod cases;
