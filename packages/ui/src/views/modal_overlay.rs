use dioxus::prelude::*;

/// Dimmed backdrop with a centered dialog card. Tapping the backdrop calls
/// `on_close`; taps inside the card stay inside it.
#[component]
pub fn ModalOverlay(label: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{label}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
