use dioxus::prelude::*;
use directory::User;

/// One row of the user list: avatar, name and email.
#[component]
pub fn UserCard(user: User, on_select: EventHandler<User>) -> Element {
    let selected = user.clone();
    rsx! {
        li {
            class: "user-card",
            onclick: move |_| on_select.call(selected.clone()),
            img { class: "avatar avatar--small", src: "{user.profile_picture}", alt: "{user.name}" }
            div {
                p { class: "user-card__name", "{user.name}" }
                p { class: "user-card__email", "{user.email}" }
            }
        }
    }
}
