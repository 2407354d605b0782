//! # User list screen state
//!
//! Two orthogonal pieces of state sit next to the held list: a `loading` flag
//! and the detail [`Modal`]. A fetch is started with
//! [`UserListState::begin_fetch`] and finished with
//! [`UserListState::finish_fetch`]. Only the most recent fetch may change the
//! list; an older response that lands after a newer one is dropped.
//!
//! [`UserListState::should_fetch`] decides when the screen fetches: once on
//! mount, then each time a [`RefreshRequest`] is pending.
//!
//! A failed fetch leaves the previous list in place and is reported to the
//! caller as [`FetchOutcome::Failed`] so it can be logged. It is never shown to
//! the user, unlike creation failures.

use crate::models::User;
use crate::refresh::RefreshRequest;
use crate::request::{RequestToken, RequestTracker};

/// The detail modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open(User),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Replaced { count: usize },
    Failed,
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserListState {
    users: Vec<User>,
    loading: bool,
    modal: Modal,
    /// Floating tools menu holding refresh and export.
    tools_open: bool,
    /// Set by the first `should_fetch`.
    mounted: bool,
    requests: RequestTracker,
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn selected(&self) -> Option<&User> {
        match &self.modal {
            Modal::Open(user) => Some(user),
            Modal::Closed => None,
        }
    }

    pub fn tools_open(&self) -> bool {
        self.tools_open
    }

    pub fn toggle_tools(&mut self) {
        self.tools_open = !self.tools_open;
    }

    pub fn has_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether a fetch is due: always on the first call, afterwards only when
    /// `refresh` was pending. A pending request is consumed either way.
    pub fn should_fetch(&mut self, refresh: &mut RefreshRequest) -> bool {
        let first = !self.mounted;
        self.mounted = true;
        refresh.take() || first
    }

    /// Enter Loading. Used on mount and for manual refresh.
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.loading = true;
        self.requests.issue()
    }

    /// Apply a listing response. Loading ends whatever the result, unless the
    /// response is stale, in which case the newer fetch still owns the flag.
    pub fn finish_fetch<E>(&mut self, token: RequestToken, result: Result<Vec<User>, E>) -> FetchOutcome {
        if !self.requests.settle(token) {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(users) => {
                let count = users.len();
                self.users = users;
                FetchOutcome::Replaced { count }
            }
            Err(_) => FetchOutcome::Failed,
        }
    }

    /// Open the detail modal on `user`.
    pub fn select(&mut self, user: User) {
        self.modal = Modal::Open(user);
    }

    /// Close the modal and clear the selection.
    pub fn dismiss(&mut self) {
        self.modal = Modal::Closed;
    }

    pub fn teardown(&mut self) {
        self.requests.invalidate();
        self.loading = false;
    }
}
