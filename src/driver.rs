//! Single-flight guard for callers that delay committing transitions.
//!
//! A view that animates its way out of the current screen keeps showing the old
//! state until the animation ends. [`Navigator`] holds the requested command in a
//! pending slot of depth one during that time and refuses further requests until
//! the pending one has been committed.

use crate::engine::{Command, Session, Transition};
use crate::error::TransitionBusy;

#[derive(Debug)]
pub struct Navigator {
    session: Session,
    pending: Option<Command>,
}

impl Navigator {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            pending: None,
        }
    }

    /// Queues `command`. Fails if another command is still pending.
    pub fn request(&mut self, command: Command) -> Result<(), TransitionBusy> {
        if let Some(pending) = self.pending {
            tracing::debug!(?pending, rejected = ?command, "Transition already in flight");
            return Err(TransitionBusy {
                pending,
                rejected: command,
            });
        }
        self.pending = Some(command);
        Ok(())
    }

    /// Applies the pending command, if any. Once requested, a command cannot be
    /// withdrawn; committing is the only way to free the slot.
    pub fn commit(&mut self) -> Option<Transition> {
        let command = self.pending.take()?;
        Some(self.session.apply(command))
    }

    /// Requests and commits in one step, for callers without a presentation delay.
    pub fn dispatch(&mut self, command: Command) -> Result<Transition, TransitionBusy> {
        self.request(command)?;
        self.pending = None;
        Ok(self.session.apply(command))
    }

    /// Whether input should be disabled because a transition is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<Command> {
        self.pending
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}

impl From<Session> for Navigator {
    fn from(session: Session) -> Self {
        Self::new(session)
    }
}
