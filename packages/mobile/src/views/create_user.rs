use dioxus::prelude::*;
use ui::views::CreateUserView;

use crate::Route;

#[component]
pub fn CreateUser() -> Element {
    let nav = use_navigator();

    rsx! {
        CreateUserView {
            on_created: move |_| {
                nav.push(Route::ListUsers {});
            },
        }
    }
}
