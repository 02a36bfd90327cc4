use dioxus::prelude::*;

use crate::components::display::{ErrorNotice, LoadingIndicator, MigrationTable};
use crate::components::forms::{OrgSelector, StateFilter};
use crate::console_error;
use crate::features::dashboard::{DashboardAction, DashboardState};
use crate::services::config::DashboardConfig;
use crate::services::github::{
    fetch_migrations, fetch_organizations, ClientResult, GithubClient, MigrationFilter,
    MigrationPage, OrganizationPage,
};

const DASHBOARD_CSS: &str = r#"
.dashboard-container { font-family: sans-serif; margin: 20px; }
.dashboard-title { font-size: 1.4em; }
.state-filter label { margin-right: 12px; }
.load-prior-button { margin: 10px 0; }
.migration-table { border-collapse: collapse; margin-top: 10px; }
.error-notice { color: #b00020; }
"#;

#[component]
pub fn MigrationDashboard() -> Element {
    let config = use_hook(DashboardConfig::from_build_env);
    // One client for the page lifetime; clones share its response cache.
    let client = use_hook({
        let config = config.clone();
        move || GithubClient::new(&config)
    });

    // Consolidated selection state
    let mut state = use_signal(DashboardState::default);

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: DashboardAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Runs once per page load; the enterprise never changes afterwards.
    let orgs = use_resource({
        let client = client.clone();
        let slug = config.enterprise_slug.clone();
        move || {
            let client = client.clone();
            let slug = slug.clone();
            async move { fetch_organizations(&client, &slug).await }
        }
    });

    // Reads the state signal, so Dioxus restarts it whenever the selected
    // org, the filter, or the cursor changes. A stale in-flight query is
    // superseded by the restart (last write wins).
    let migrations = use_resource({
        let client = client.clone();
        move || {
            let current = state();
            let client = client.clone();
            async move {
                if !current.has_selection() {
                    return Ok(None);
                }
                fetch_migrations(
                    &client,
                    &current.selected_org_id,
                    current.state_filter,
                    current.cursor.as_deref(),
                )
                .await
                .map(Some)
            }
        }
    });

    let body = render_body(
        state(),
        dispatch,
        &orgs.read_unchecked(),
        &migrations.read_unchecked(),
    );

    rsx! {
        document::Style { {DASHBOARD_CSS} }

        div {
            class: "dashboard-container",
            h1 {
                class: "dashboard-title",
                "Repository Migration Status"
            }
            {body}
        }
    }
}

/// Collapse both query states into one render: any error wins, then any
/// pending query, then the loaded view.
fn render_body(
    current: DashboardState,
    dispatch: EventHandler<DashboardAction>,
    orgs: &Option<ClientResult<OrganizationPage>>,
    migrations: &Option<ClientResult<Option<MigrationPage>>>,
) -> Element {
    match (orgs, migrations) {
        (None, _) | (_, None) => rsx! { LoadingIndicator {} },
        (Some(Err(error)), _) => {
            console_error!("Organization query failed: {}", error);
            rsx! { ErrorNotice {} }
        }
        (_, Some(Err(error))) => {
            console_error!("Migration query failed: {}", error);
            rsx! { ErrorNotice {} }
        }
        (Some(Ok(org_page)), Some(Ok(migration_page))) => {
            render_loaded(current, dispatch, org_page, migration_page.as_ref())
        }
    }
}

fn render_loaded(
    current: DashboardState,
    dispatch: EventHandler<DashboardAction>,
    org_page: &OrganizationPage,
    migration_page: Option<&MigrationPage>,
) -> Element {
    let selected_filter = current.state_filter;

    // Backward pagination is offered only when the server reports a prior
    // page and hands back a start cursor for it.
    let load_prior = migration_page.and_then(|page| {
        page.page_info
            .has_previous_page
            .then(|| page.page_info.start_cursor.clone())
            .flatten()
    });

    let load_prior_button = match load_prior {
        Some(start_cursor) => rsx! {
            button {
                class: "load-prior-button",
                onclick: move |_| {
                    dispatch.call(DashboardAction::LoadPrior(start_cursor.clone()));
                },
                "Load Prior"
            }
        },
        None => rsx! {},
    };

    let results = match migration_page {
        Some(page) => rsx! {
            MigrationTable {
                migrations: page.migrations.clone(),
                state_filter: selected_filter,
            }
        },
        None => rsx! {
            p {
                class: "dashboard-hint",
                "Select an organization to view its migrations."
            }
        },
    };

    rsx! {
        div {
            div {
                OrgSelector {
                    organizations: org_page.organizations.clone(),
                    selected_org_id: current.selected_org_id.clone(),
                    on_change: move |org_id: String| {
                        dispatch.call(DashboardAction::SelectOrg(org_id));
                    },
                }
            }
            div {
                StateFilter {
                    selected: selected_filter,
                    on_change: move |filter: MigrationFilter| {
                        dispatch.call(DashboardAction::SetFilter(filter));
                    },
                }
            }
            div {
                {load_prior_button}
            }
            div {
                {results}
            }
        }
    }
}
