//! Context access to the shared [`RefreshRequest`], provided by the app root.

use dioxus::prelude::*;

pub use directory::RefreshRequest;

pub fn use_refresh_request() -> Signal<RefreshRequest> {
    use_context::<Signal<RefreshRequest>>()
}
