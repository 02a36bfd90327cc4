use dioxus::prelude::*;

use crate::services::github::{MigrationFilter, MigrationRecord};
use crate::utils::format_timestamp;

#[derive(Props, PartialEq, Clone)]
pub struct MigrationTableProps {
    pub migrations: Vec<MigrationRecord>,
    pub state_filter: MigrationFilter,
}

/// The failure-reason column exists only when viewing failed migrations.
pub fn shows_failure_reason(filter: MigrationFilter) -> bool {
    filter == MigrationFilter::Failed
}

/// Results table. Rows render in server order (newest first); an empty page
/// renders headers with no rows.
#[component]
pub fn MigrationTable(props: MigrationTableProps) -> Element {
    let with_failure_reason = shows_failure_reason(props.state_filter);

    rsx! {
        table {
            class: "migration-table",
            thead {
                tr {
                    th { style: "text-align: left", "Repository Name" }
                    th { style: "text-align: left", "Created At" }
                    th { style: "text-align: left; padding: 0 15px", "State" }
                    if with_failure_reason {
                        th { style: "text-align: left; padding: 0 15px", "Failure Reason" }
                    }
                }
            }
            tbody {
                for record in props.migrations {
                    tr {
                        key: "{record.id}",
                        td { "{record.repository_name}" }
                        td { {format_timestamp(&record.created_at)} }
                        td { style: "padding: 0 15px", "{record.state}" }
                        if with_failure_reason {
                            td {
                                style: "padding: 0 15px",
                                {record.failure_reason.clone().unwrap_or_default()}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_reason_column_only_for_failed_filter() {
        assert!(shows_failure_reason(MigrationFilter::Failed));
        assert!(!shows_failure_reason(MigrationFilter::InProgress));
        assert!(!shows_failure_reason(MigrationFilter::Queued));
        assert!(!shows_failure_reason(MigrationFilter::Succeeded));
    }
}
