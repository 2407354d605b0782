use dioxus::prelude::*;

use api::UserService;
use directory::{export_users, ExportError, FetchOutcome, UserListState};

use super::{UserCard, UserDetailModal};
use crate::icons::{FaArrowsRotate, FaScrewdriverWrench, FaWhatsapp, FaXmark};
use crate::{
    client_config, make_service, push_notice, use_notices, use_refresh_request, Icon, NoticeLevel,
    SystemLauncher,
};

/// The user list screen.
///
/// Fetches on mount and whenever a refresh request is pending. Listing
/// failures are logged only; the previous list stays on screen.
#[component]
pub fn ListUsersView() -> Element {
    let mut state = use_signal(UserListState::new);
    let mut refresh = use_refresh_request();
    let mut notices = use_notices();
    let service = use_hook(make_service);
    let config = use_hook(client_config);

    let fetch = use_callback(move |()| {
        let token = state.write().begin_fetch();
        let service = service.clone();
        // Outlives the screen; a late response finds the state dropped.
        spawn_forever(async move {
            let result = service.list_users().await;
            if let Err(err) = &result {
                tracing::error!("listing users failed: {err}");
            }
            let outcome = match state.try_write() {
                Ok(mut state) => state.finish_fetch(token, result),
                Err(_) => FetchOutcome::Stale,
            };
            match outcome {
                FetchOutcome::Replaced { count } => tracing::debug!(count, "user list replaced"),
                FetchOutcome::Failed => {}
                FetchOutcome::Stale => tracing::warn!(token = token.id(), "dropping stale user list"),
            }
        });
    });

    // Mount fetch, plus any refresh requested by the creation screen. Writes
    // only when something is due so the effect does not retrigger itself.
    use_effect(move || {
        let pending = refresh.read().is_pending();
        if pending || !state.peek().has_mounted() {
            let due = state.write().should_fetch(&mut refresh.write());
            if due {
                fetch.call(());
            }
        }
    });

    use_drop(move || {
        if let Ok(mut state) = state.try_write() {
            state.teardown();
        }
    });

    let handle_export = move |_| {
        let users = state.read().users().to_vec();
        match export_users(&users, &config.messaging_scheme, &SystemLauncher) {
            Ok(payload) => tracing::info!(lines = users.len(), bytes = payload.url.len(), "exported user list"),
            Err(err @ ExportError::Empty) => {
                push_notice(&mut notices, NoticeLevel::Warning, "Nothing to export", err.user_message());
            }
            Err(err) => {
                tracing::error!("export failed: {err}");
                push_notice(&mut notices, NoticeLevel::Error, "Error", err.user_message());
            }
        }
    };

    let loading = state.read().is_loading();
    let users = state.read().users().to_vec();
    let selected = state.read().selected().cloned();
    let tools_open = state.read().tools_open();

    rsx! {
        div {
            class: "screen list-users",

            if loading {
                div {
                    class: "list-users__loading",
                    span { class: "spinner spinner--large", role: "progressbar" }
                }
            } else {
                ul {
                    class: "list-users__list",
                    for user in users {
                        UserCard {
                            key: "{user.id}",
                            user: user.clone(),
                            on_select: move |user| state.write().select(user),
                        }
                    }
                }
            }

            if let Some(user) = selected {
                UserDetailModal {
                    user: user,
                    on_close: move |_| state.write().dismiss(),
                }
            }

            div {
                class: "fab-group",
                if tools_open {
                    button {
                        class: "fab-group__action",
                        disabled: loading,
                        onclick: move |_| fetch.call(()),
                        Icon { icon: FaArrowsRotate, width: 16, height: 16 }
                        span { "Refresh" }
                    }
                    button {
                        class: "fab-group__action",
                        onclick: handle_export,
                        Icon { icon: FaWhatsapp, width: 16, height: 16 }
                        span { "Export to WhatsApp" }
                    }
                }
                button {
                    class: "fab",
                    title: "Tools",
                    onclick: move |_| state.write().toggle_tools(),
                    if tools_open {
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    } else {
                        Icon { icon: FaScrewdriverWrench, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}
