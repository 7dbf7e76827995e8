//! Write outcomes.

use std::fmt;

/// What a completed write call observed.
///
/// Remote writes are sent with an opaque response: the server-side result
/// is never seen. Callers that need confirmation must read the record back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The collection was written to local storage.
    Persisted,
    /// No record matched the update; nothing was written.
    Unchanged,
    /// The request was sent; its server-side effect is unknown.
    Dispatched,
}

impl WriteOutcome {
    /// Whether the store observed the effect of the write.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Persisted | Self::Unchanged)
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persisted => write!(f, "persisted"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Dispatched => write!(f, "dispatched"),
        }
    }
}
