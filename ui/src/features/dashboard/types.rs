// Core types for the dashboard view state - no dioxus imports needed here
use crate::services::github::MigrationFilter;

/// UI selection state for the dashboard.
///
/// A cursor is only ever meaningful for the currently selected org/filter
/// pair, so every action that changes that pair resets it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// GraphQL node id of the selected organization; empty until one is
    /// picked (the sentinel that keeps the migration query from running).
    pub selected_org_id: String,
    pub state_filter: MigrationFilter,
    /// Backward-pagination cursor into the migration list.
    pub cursor: Option<String>,
}

/// Actions the view can dispatch against [`DashboardState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardAction {
    SelectOrg(String),
    SetFilter(MigrationFilter),
    /// Page backwards from the given start cursor.
    LoadPrior(String),
}

impl DashboardState {
    /// Apply an action in place, preserving Dioxus Signal reactivity.
    pub fn reduce_in_place(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SelectOrg(org_id) => {
                self.selected_org_id = org_id;
                self.cursor = None;
            }
            DashboardAction::SetFilter(filter) => {
                self.state_filter = filter;
                self.cursor = None;
            }
            DashboardAction::LoadPrior(start_cursor) => {
                self.cursor = Some(start_cursor);
            }
        }
    }

    /// True once an organization has been picked.
    pub fn has_selection(&self) -> bool {
        !self.selected_org_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_selection() {
        let state = DashboardState::default();
        assert!(!state.has_selection());
        assert_eq!(state.state_filter, MigrationFilter::InProgress);
        assert_eq!(state.cursor, None);
    }

    #[test]
    fn selecting_an_org_resets_the_cursor() {
        let mut state = DashboardState {
            selected_org_id: "O_1".to_string(),
            state_filter: MigrationFilter::Succeeded,
            cursor: Some("Y3Vyc29yOjk=".to_string()),
        };

        state.reduce_in_place(DashboardAction::SelectOrg("O_2".to_string()));

        assert_eq!(state.selected_org_id, "O_2");
        assert_eq!(state.cursor, None);
        // The filter survives an org change.
        assert_eq!(state.state_filter, MigrationFilter::Succeeded);
    }

    #[test]
    fn changing_the_filter_resets_the_cursor() {
        let mut state = DashboardState {
            selected_org_id: "O_1".to_string(),
            state_filter: MigrationFilter::InProgress,
            cursor: Some("Y3Vyc29yOjk=".to_string()),
        };

        state.reduce_in_place(DashboardAction::SetFilter(MigrationFilter::Failed));

        assert_eq!(state.state_filter, MigrationFilter::Failed);
        assert_eq!(state.cursor, None);
    }

    #[test]
    fn reselecting_the_same_filter_still_resets_the_cursor() {
        let mut state = DashboardState {
            selected_org_id: "O_1".to_string(),
            state_filter: MigrationFilter::Queued,
            cursor: Some("Y3Vyc29yOjk=".to_string()),
        };

        state.reduce_in_place(DashboardAction::SetFilter(MigrationFilter::Queued));

        assert_eq!(state.cursor, None);
    }

    #[test]
    fn load_prior_sets_the_cursor() {
        let mut state = DashboardState {
            selected_org_id: "O_1".to_string(),
            ..Default::default()
        };

        state.reduce_in_place(DashboardAction::LoadPrior("Y3Vyc29yOjQy".to_string()));

        assert_eq!(state.cursor.as_deref(), Some("Y3Vyc29yOjQy"));
        assert_eq!(state.state_filter, MigrationFilter::InProgress);
    }
}
