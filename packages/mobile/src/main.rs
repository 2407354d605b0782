use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;
use views::{CreateUser, ListUsers, TabLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(TabLayout)]
        #[route("/")]
        CreateUser {},
        #[route("/users")]
        ListUsers {},
}

fn main() {
    // RUST_LOG overrides; the launcher's own logger stays out of the way once this is set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing already initialised: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::Notices::default()));
    use_context_provider(|| Signal::new(ui::RefreshRequest::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        Router::<Route> {}
    }
}
