use dioxus::prelude::*;
use ui::views::ListUsersView;

#[component]
pub fn ListUsers() -> Element {
    rsx! {
        ListUsersView {}
    }
}
