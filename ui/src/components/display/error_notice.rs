use dioxus::prelude::*;

/// Generic failure render. Both queries collapse into this; details go to the
/// console only.
#[component]
pub fn ErrorNotice() -> Element {
    rsx! {
        p {
            class: "error-notice",
            "Error :("
        }
    }
}
