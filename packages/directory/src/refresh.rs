//! One-shot "please refresh" handoff from the creation screen to the list screen.
//!
//! The creation screen raises the request after a user is created; the list
//! screen consumes it the next time it decides whether to fetch. Raising it
//! twice before it is consumed still yields a single fetch.

use crate::form::SubmitOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshRequest {
    pending: bool,
}

impl RefreshRequest {
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the request. Returns whether one was pending.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Raise the request if `outcome` created a user. Returns whether it did.
    pub fn after_submit(&mut self, outcome: &SubmitOutcome) -> bool {
        let created = matches!(outcome, SubmitOutcome::Created(_));
        if created {
            self.request();
        }
        created
    }
}
