// Wire types for the GitHub GraphQL queries - no dioxus imports needed here
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One organization inside the configured enterprise.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: String,
    pub login: String,
}

/// A repository migration tracked server-side by GitHub.
///
/// `state` stays the raw server string since the table renders it verbatim;
/// the typed filter enum below exists only to feed the query variable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MigrationRecord {
    pub id: String,
    #[serde(rename = "repositoryName")]
    pub repository_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub state: String,
    #[serde(rename = "failureReason")]
    pub failure_reason: Option<String>,
    #[serde(rename = "migrationLogUrl")]
    pub migration_log_url: Option<String>,
}

/// Migration states the dashboard can filter on. Maps onto the GraphQL
/// `MigrationState!` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationFilter {
    #[default]
    InProgress,
    Queued,
    Succeeded,
    Failed,
}

impl MigrationFilter {
    /// Render order of the radio controls.
    pub const ALL: [MigrationFilter; 4] = [
        MigrationFilter::InProgress,
        MigrationFilter::Queued,
        MigrationFilter::Succeeded,
        MigrationFilter::Failed,
    ];

    /// Value of the `$state` query variable.
    pub fn as_graphql(&self) -> &'static str {
        match self {
            MigrationFilter::InProgress => "IN_PROGRESS",
            MigrationFilter::Queued => "QUEUED",
            MigrationFilter::Succeeded => "SUCCEEDED",
            MigrationFilter::Failed => "FAILED",
        }
    }

    /// Human label for the radio control.
    pub fn label(&self) -> &'static str {
        match self {
            MigrationFilter::InProgress => "In Progress",
            MigrationFilter::Queued => "Queued",
            MigrationFilter::Succeeded => "Succeeded",
            MigrationFilter::Failed => "Failed",
        }
    }
}

/// Relay-style connection page info.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage", default)]
    pub has_next_page: bool,
    #[serde(rename = "hasPreviousPage", default)]
    pub has_previous_page: bool,
    #[serde(rename = "startCursor", default)]
    pub start_cursor: Option<String>,
    #[serde(rename = "endCursor", default)]
    pub end_cursor: Option<String>,
}

/// First page of organizations for the enterprise. Page info is carried but
/// the dashboard never paginates organizations.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationPage {
    pub organizations: Vec<Organization>,
    pub page_info: PageInfo,
}

/// One page of migrations, newest first (server order).
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationPage {
    pub migrations: Vec<MigrationRecord>,
    pub page_info: PageInfo,
}
