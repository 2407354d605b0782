//! Request tokens for async work started by a screen.
//!
//! Each call a screen makes is tagged with the token returned by
//! [`RequestTracker::issue`]. When the response arrives the screen asks
//! [`RequestTracker::settle`] whether the token is still the current one; a
//! newer request or [`RequestTracker::invalidate`] (screen teardown) makes it
//! stale and the response is dropped.

/// Identifies one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    next: u64,
    current: Option<RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; any earlier token becomes stale.
    pub fn issue(&mut self) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        self.current = Some(token);
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token)
    }

    /// Consume `token` if it is current. Returns `false` for stale tokens.
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Forget the outstanding request, if any.
    pub fn invalidate(&mut self) {
        self.current = None;
    }
}
