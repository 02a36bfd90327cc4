use dioxus::prelude::*;

use crate::services::github::Organization;

#[derive(Props, PartialEq, Clone)]
pub struct OrgSelectorProps {
    pub organizations: Vec<Organization>,
    /// Node id of the current selection; empty when nothing is picked yet.
    pub selected_org_id: String,
    pub on_change: EventHandler<String>,
}

/// Dropdown over the enterprise's organizations. Option values are org node
/// ids; the visible text is the login.
#[component]
pub fn OrgSelector(props: OrgSelectorProps) -> Element {
    let organizations = props.organizations;
    let selected = props.selected_org_id;
    let on_change = props.on_change;

    rsx! {
        select {
            class: "org-selector",
            value: "{selected}",
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            option {
                value: "",
                disabled: true,
                selected: selected.is_empty(),
                "Select an organization"
            }
            for org in organizations {
                option {
                    key: "{org.id}",
                    value: "{org.id}",
                    selected: org.id == selected,
                    "{org.login}"
                }
            }
        }
    }
}
