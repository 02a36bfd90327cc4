use dioxus::prelude::*;

use crate::services::github::MigrationFilter;

#[derive(Props, PartialEq, Clone)]
pub struct StateFilterProps {
    pub selected: MigrationFilter,
    pub on_change: EventHandler<MigrationFilter>,
}

/// Radio-button group over the four migration states. Fires on every click,
/// including re-selecting the current filter.
#[component]
pub fn StateFilter(props: StateFilterProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "state-filter",
            for filter in MigrationFilter::ALL {
                label {
                    input {
                        r#type: "radio",
                        value: filter.as_graphql(),
                        checked: filter == selected,
                        onclick: move |_| {
                            on_change.call(filter);
                        }
                    }
                    {filter.label()}
                }
            }
        }
    }
}
