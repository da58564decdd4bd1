//! Phases of a reveal session.

/// UI phase of a reveal session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to begin.
    #[default]
    Idle,
    /// The card is on the table, waiting for a reveal.
    Reading,
    /// The card is flipped and its fortune shown.
    Result,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Reading => write!(f, "Reading"),
            Self::Result => write!(f, "Result"),
        }
    }
}
