//! Domain layer for the user directory client.
//!
//! Everything here is plain data and state transitions: no rendering and no
//! network access. The `api` crate performs the HTTP calls and the `ui` crate
//! drives these state machines from Dioxus signals.

pub mod config;
pub mod export;
pub mod form;
pub mod generator;
pub mod listing;
pub mod models;
pub mod refresh;
pub mod request;

pub use config::ClientConfig;
pub use export::{export_users, ExportError, ExportPayload, LaunchError, UrlLauncher};
pub use form::{CreateUserForm, PendingSubmission, SubmitOutcome, ValidationError};
pub use generator::DraftGenerator;
pub use listing::{FetchOutcome, Modal, UserListState};
pub use models::{DraftField, User, UserDraft};
pub use refresh::RefreshRequest;
pub use request::{RequestToken, RequestTracker};
