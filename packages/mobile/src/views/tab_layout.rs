use dioxus::prelude::*;
use ui::icons::{FaCirclePlus, FaList};
use ui::{Icon, NoticeBanner};

use crate::Route;

/// Bottom tab navigation between the two screens.
#[component]
pub fn TabLayout() -> Element {
    let route = use_route::<Route>();
    let on_create = matches!(route, Route::CreateUser {});

    rsx! {
        div {
            class: "app",
            main {
                class: "app__content",
                Outlet::<Route> {}
            }
            nav {
                class: "tab-bar",
                Link {
                    class: if on_create { "tab-bar__item tab-bar__item--active" } else { "tab-bar__item" },
                    to: Route::CreateUser {},
                    Icon { icon: FaCirclePlus, width: 20, height: 20 }
                    span { "Create user" }
                }
                Link {
                    class: if on_create { "tab-bar__item" } else { "tab-bar__item tab-bar__item--active" },
                    to: Route::ListUsers {},
                    Icon { icon: FaList, width: 20, height: 20 }
                    span { "List users" }
                }
            }
            NoticeBanner {}
        }
    }
}
