//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's JSON endpoints. The browser never reaches the
//! agent service directly; every agent call goes through `POST /api/agent`.

pub mod api;
