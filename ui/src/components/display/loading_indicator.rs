use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        p {
            class: "loading-indicator",
            "Loading..."
        }
    }
}
