/*!
Reports for the context.

- A [Report] on the outcome of saturation, together with the verdict on the goal.
- A [trace](trace) of every stored clause, with provenance, for display as text or JSON.
- The [proof](proof) of a contradiction, as the clauses the empty clause depends on.
*/

use crate::context::ContextState;

pub mod proof;
pub mod trace;

/// High-level reports regarding a proof.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived, and so the goal follows from the premises.
    Contradiction,

    /// No further clause could be derived, and the empty clause was not among those derived.
    Saturated,

    /// Saturation has not (yet) finished.
    Unknown,
}

impl Report {
    /// The verdict on the goal, `Valid` or `Fail`, or `Unknown` if saturation has not finished.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Contradiction => "Valid",
            Self::Saturated => "Fail",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Saturating => Self::Unknown,
            ContextState::Contradiction(_) => Self::Contradiction,
            ContextState::Saturated => Self::Saturated,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contradiction => write!(f, "Contradiction"),
            Self::Saturated => write!(f, "Saturated"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
