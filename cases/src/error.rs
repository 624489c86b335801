//! Domain errors shared by the server, client, and CLI.

/// Errors produced while parsing or mutating case-domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// A case status string did not match any known status.
    #[error("unknown case status: {0}")]
    UnknownStatus(String),

    /// A status filter string was neither `all` nor a known status.
    #[error("unknown status filter: {0}")]
    UnknownFilter(String),

    /// A sort key string did not match `risk`, `amount`, or `date`.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    /// An analyst action string did not match any known action.
    #[error("unknown analyst action: {0}")]
    UnknownAction(String),

    /// An agent identifier did not match any of the five known agents.
    #[error("unknown agent: {0}")]
    UnknownAgent(String),

    /// No case exists with the given identifier.
    #[error("case not found: {0}")]
    NotFound(String),
}
