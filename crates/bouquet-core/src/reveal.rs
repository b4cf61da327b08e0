//! Reveal overlay toggle with a delayed fade-in.
//!
//! Opening the overlay hands out a [`RevealTicket`]. The view arms a timer and
//! passes the ticket back to [`RevealToggle::settle`] when it fires; only the
//! ticket of the current opening can make the overlay visible, so a timer that
//! outlives a close (or a later re-open) has no effect.

/// Identifies one opening of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Closed,
    /// Open, waiting for the fade-in timer.
    Opening(RevealTicket),
    /// Open and visible.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealToggle {
    phase: RevealPhase,
    generation: u64,
}

impl RevealToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, RevealPhase::Closed)
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, RevealPhase::Open)
    }

    /// Ticket the view should settle once the fade-in delay has elapsed.
    pub fn pending(&self) -> Option<RevealTicket> {
        match self.phase {
            RevealPhase::Opening(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Opens the overlay. Returns the ticket to settle, or `None` if it was
    /// already open.
    pub fn open(&mut self) -> Option<RevealTicket> {
        if self.is_open() {
            return None;
        }
        self.generation += 1;
        let ticket = RevealTicket(self.generation);
        self.phase = RevealPhase::Opening(ticket);
        tracing::info!("Reveal opened");
        Some(ticket)
    }

    /// Marks the overlay visible if `ticket` belongs to the current opening.
    pub fn settle(&mut self, ticket: RevealTicket) -> bool {
        if self.phase == RevealPhase::Opening(ticket) {
            self.phase = RevealPhase::Open;
            true
        } else {
            tracing::debug!(?ticket, phase = ?self.phase, "Ignoring stale reveal timer");
            false
        }
    }

    /// Closes the overlay and clears visibility immediately.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::info!("Reveal closed");
        }
        self.phase = RevealPhase::Closed;
    }
}
