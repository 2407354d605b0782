//! An in-process [`UserService`] that records every call.
//!
//! The screen-flow tests drive the form and list state machines against it in
//! place of a live backend.

use std::sync::{Arc, Mutex};

use directory::{User, UserDraft};

use crate::error::ApiError;
use crate::UserService;

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    created: Vec<UserDraft>,
    list_calls: usize,
    next_id: u64,
    fail_create: bool,
    fail_list: bool,
}

/// In-memory backend used by tests.
///
/// Clones share state, so a test can keep one handle while a screen drives
/// another.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserService {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let service = Self::new();
        service.inner.lock().unwrap().users = users;
        service
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.inner.lock().unwrap().fail_create = fail;
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.inner.lock().unwrap().fail_list = fail;
    }

    /// Every draft passed to `create_user`, including failed attempts.
    pub fn create_calls(&self) -> Vec<UserDraft> {
        self.inner.lock().unwrap().created.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }
}

impl UserService for MemoryUserService {
    async fn create_user(&self, draft: &UserDraft) -> Result<Option<User>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.created.push(draft.clone());
        if inner.fail_create {
            return Err(ApiError::Unavailable("create disabled".into()));
        }
        inner.next_id += 1;
        let user = User {
            id: inner.next_id.to_string(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            password: None,
            profile_picture: draft.profile_picture.clone(),
        };
        inner.users.push(user.clone());
        Ok(Some(user))
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;
        if inner.fail_list {
            return Err(ApiError::Unavailable("list disabled".into()));
        }
        Ok(inner.users.clone())
    }
}
