use dioxus::prelude::*;

use crate::notices::{use_notices, NoticeLevel};
use crate::views::ModalOverlay;

/// Shows the most recent unacknowledged notice as a dialog with an OK button.
#[component]
pub fn NoticeBanner() -> Element {
    let mut notices = use_notices();
    let Some(notice) = notices.read().latest().cloned() else {
        return rsx! {};
    };

    let accent = match notice.level {
        NoticeLevel::Success => "notice--success",
        NoticeLevel::Warning => "notice--warning",
        NoticeLevel::Error => "notice--error",
        NoticeLevel::Info => "notice--info",
    };
    let id = notice.id;

    rsx! {
        ModalOverlay {
            label: notice.title.clone(),
            on_close: move |_| notices.write().dismiss(id),
            div {
                class: "notice {accent}",
                h2 { class: "notice__title", "{notice.title}" }
                p { class: "notice__message", "{notice.message}" }
                button {
                    class: "button button--primary",
                    onclick: move |_| notices.write().dismiss(id),
                    "OK"
                }
            }
        }
    }
}
