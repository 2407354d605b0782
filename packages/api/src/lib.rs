//! # API crate: the backend client for the user directory
//!
//! The backend exposes a single users collection. This crate wraps the two
//! calls the app makes against it and nothing else: no retries, no auth, no
//! pagination.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HttpUserService`], the `reqwest` implementation of [`UserService`] |
//! | [`memory`] | [`MemoryUserService`], an in-process backend for tests |
//! | [`photo`] | Resolves a draft's photo reference into JPEG bytes for the upload |
//! | [`error`] | [`ApiError`] |
//!
//! ## Calls
//!
//! - `create_user`: `POST {base}/`, multipart with `name`, `email`, `password`
//!   and a `profilePicture` file part (`profile.jpg`, `image/jpeg`).
//! - `list_users`: `GET {base}/`, JSON array of user records.

use std::future::Future;

use directory::{User, UserDraft};

pub mod client;
pub mod error;
pub mod memory;
pub mod photo;

pub use client::HttpUserService;
pub use error::ApiError;
pub use memory::MemoryUserService;

/// The two backend operations the screens depend on.
pub trait UserService {
    /// Upload a complete draft. Any 2xx is success; the created record is
    /// returned when the body parses as one.
    fn create_user(
        &self,
        draft: &UserDraft,
    ) -> impl Future<Output = Result<Option<User>, ApiError>>;

    /// Fetch every user, in the order the backend sends them.
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;
}
