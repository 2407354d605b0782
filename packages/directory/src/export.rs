//! # Sharing the user list through a messaging app
//!
//! The held list is rendered as text, percent-encoded the way browsers'
//! `encodeURIComponent` does it, and appended to the messaging app's URL scheme
//! as the `text` query parameter. Opening the URL is delegated to a
//! [`UrlLauncher`] so the platform call can be swapped out.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::models::User;

pub const EXPORT_HEADER: &str = "User list:";

pub const NOTHING_TO_EXPORT_MESSAGE: &str = "There are no users to export!";

pub const LAUNCH_FAILED_MESSAGE: &str = "Could not open WhatsApp. Make sure it is installed.";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no application can open {url}: {reason}")]
pub struct LaunchError {
    pub url: String,
    pub reason: String,
}

/// Opens a URL with whatever the OS has registered for its scheme.
pub trait UrlLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("there are no users to export")]
    Empty,
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl ExportError {
    /// What the user is told.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExportError::Empty => NOTHING_TO_EXPORT_MESSAGE,
            ExportError::Launch(_) => LAUNCH_FAILED_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPayload {
    /// One `"<name> - <email>"` line per user, in list order.
    pub body: String,
    /// Header, blank line, body.
    pub message: String,
    /// The scheme URL carrying the encoded message.
    pub url: String,
}

impl ExportPayload {
    /// `None` for an empty list.
    pub fn build(users: &[User], scheme: &str) -> Option<Self> {
        if users.is_empty() {
            return None;
        }
        let body = users
            .iter()
            .map(User::export_line)
            .collect::<Vec<_>>()
            .join("\n");
        let message = format!("{EXPORT_HEADER}\n\n{body}");
        let url = format!("{scheme}?text={}", encode_uri_component(&message));
        Some(Self { body, message, url })
    }
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Build the payload and hand it to `launcher`. An empty list never reaches the launcher.
pub fn export_users(
    users: &[User],
    scheme: &str,
    launcher: &impl UrlLauncher,
) -> Result<ExportPayload, ExportError> {
    let payload = ExportPayload::build(users, scheme).ok_or(ExportError::Empty)?;
    tracing::debug!(count = users.len(), "opening messaging app");
    launcher.open(&payload.url)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingLauncher {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl UrlLauncher for RecordingLauncher {
        fn open(&self, url: &str) -> Result<(), LaunchError> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                Err(LaunchError {
                    url: url.to_string(),
                    reason: "scheme not handled".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn user(id: &str, name: &str, email: &str) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: None,
            profile_picture: String::new(),
        }
    }

    #[test]
    fn test_empty_list_never_opens_url() {
        let launcher = RecordingLauncher::default();
        let err = export_users(&[], "whatsapp://send", &launcher).unwrap_err();
        assert_eq!(err, ExportError::Empty);
        assert_eq!(err.user_message(), NOTHING_TO_EXPORT_MESSAGE);
        assert!(launcher.opened.borrow().is_empty());
    }

    #[test]
    fn test_body_has_one_line_per_user_in_order() {
        let users = vec![user("1", "Ana", "ana@x.com"), user("2", "Bo", "bo@x.com")];
        let launcher = RecordingLauncher::default();
        let payload = export_users(&users, "whatsapp://send", &launcher).unwrap();

        assert_eq!(payload.body, "Ana - ana@x.com\nBo - bo@x.com");
        assert_eq!(payload.message, "User list:\n\nAna - ana@x.com\nBo - bo@x.com");
        assert_eq!(
            payload.url,
            "whatsapp://send?text=User%20list%3A%0A%0AAna%20-%20ana%40x.com%0ABo%20-%20bo%40x.com"
        );
        assert_eq!(launcher.opened.borrow().as_slice(), &[payload.url.clone()]);
    }

    #[test]
    fn test_encoding_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    }

    #[test]
    fn test_launch_failure_is_reported() {
        let users = vec![user("1", "Ana", "ana@x.com")];
        let launcher = RecordingLauncher {
            fail: true,
            ..Default::default()
        };
        let err = export_users(&users, "whatsapp://send", &launcher).unwrap_err();
        assert!(matches!(err, ExportError::Launch(_)));
        assert_eq!(err.user_message(), LAUNCH_FAILED_MESSAGE);
        assert_eq!(launcher.opened.borrow().len(), 1);
    }
}
