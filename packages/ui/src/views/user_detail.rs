use dioxus::prelude::*;
use directory::User;

use super::ModalOverlay;
use crate::icons::{FaEnvelope, FaXmark};
use crate::Icon;

/// Detail view of the selected user. Closes via the button or by tapping outside.
#[component]
pub fn UserDetailModal(user: User, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            label: user.name.clone(),
            on_close: move |_| on_close.call(()),
            div {
                class: "user-detail",
                img { class: "avatar avatar--large", src: "{user.profile_picture}", alt: "{user.name}" }
                h2 { class: "user-detail__name", "{user.name}" }
                p {
                    class: "user-detail__email",
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    " {user.email}"
                }
                button {
                    class: "button button--primary button--pill",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                    span { "Close" }
                }
            }
        }
    }
}
