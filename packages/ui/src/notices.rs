//! User-facing notices: the in-app equivalent of an alert dialog.
//!
//! Every notice is also written to `tracing`, so the log has the same trail the
//! user saw.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

/// Notices waiting to be acknowledged, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, title: &str, message: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Notice {
            id: self.next_id,
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|notice| notice.id != id);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.entries.last()
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn push_notice(notices: &mut Signal<Notices>, level: NoticeLevel, title: &str, message: &str) {
    match level {
        NoticeLevel::Error => tracing::error!("{title}: {message}"),
        NoticeLevel::Warning => tracing::warn!("{title}: {message}"),
        NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{title}: {message}"),
    }
    notices.write().push(level, title, message);
}
