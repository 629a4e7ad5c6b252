use super::state::ActiveResult;
use std::fmt;

/// A navigation request, as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Advance(usize),
    Back,
    Restart,
    JumpToAlternative,
}

/// The outcome of a navigation operation. Operations never fail; a request
/// that does not apply comes back as `Declined` and leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Declined(DeclineReason),
    Moved { from: String, to: String },
    ResultReached(ActiveResult),
    WentBack { from: String, to: String },
    Restarted,
    /// Returned to the origin node of a result. `highlight` is the option the
    /// view should draw attention to.
    Alternative { origin: String, highlight: usize },
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transition::Declined(_))
    }

    /// The option index to highlight after an alternative jump.
    pub fn highlight(&self) -> Option<usize> {
        match self {
            Transition::Alternative { highlight, .. } => Some(*highlight),
            _ => None,
        }
    }
}

/// Why a navigation request was declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclineReason {
    /// There is no current node while a result is shown.
    ResultActive,
    UnknownNode(String),
    OptionOutOfRange { index: usize, len: usize },
    /// The option has neither a follow-up node nor a result.
    DeadOption(usize),
    AtStart,
    NoActiveResult,
    NoAlternative,
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclineReason::ResultActive => write!(f, "a result is active"),
            DeclineReason::UnknownNode(id) => write!(f, "node '{}' does not exist", id),
            DeclineReason::OptionOutOfRange { index, len } => {
                write!(f, "option {} is out of range ({} options)", index, len)
            }
            DeclineReason::DeadOption(index) => {
                write!(f, "option {} has neither a next step nor a result", index)
            }
            DeclineReason::AtStart => write!(f, "already at the start"),
            DeclineReason::NoActiveResult => write!(f, "no result is active"),
            DeclineReason::NoAlternative => write!(f, "the chosen option declares no alternative"),
        }
    }
}
