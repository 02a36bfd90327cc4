//! The two read-only queries behind the dashboard.

use serde_json::{json, Value};

use super::client::GithubClient;
use super::errors::{ClientError, ClientResult};
use super::types::{MigrationFilter, MigrationPage, OrganizationPage, PageInfo};

pub const ORGANIZATIONS_QUERY: &str = r#"
query ($enterprise: String!, $cursor: String) {
  enterprise(slug: $enterprise) {
    name
    organizations(first: 100, after: $cursor) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        login
        id
      }
    }
  }
}
"#;

pub const MIGRATIONS_QUERY: &str = r#"
query getMigrations($before: String, $orgId: ID!, $state: MigrationState!) {
  node(id: $orgId) {
    ... on Organization {
      repositoryMigrations(before: $before, state: $state, last: 100, orderBy: {field: CREATED_AT, direction: DESC}) {
        nodes {
          id
          createdAt
          failureReason
          repositoryName
          state
          migrationLogUrl
        }
        pageInfo {
          hasPreviousPage
          startCursor
          endCursor
        }
      }
    }
  }
}
"#;

/// Fetch the first page of organizations for the configured enterprise.
///
/// The dashboard never paginates organizations, so the cursor variable is
/// always null.
pub async fn fetch_organizations(
    client: &GithubClient,
    enterprise_slug: &str,
) -> ClientResult<OrganizationPage> {
    let variables = json!({
        "enterprise": enterprise_slug,
        "cursor": null,
    });
    let response = client.execute(ORGANIZATIONS_QUERY, variables).await?;
    parse_organization_page(&response)
}

/// Fetch up to 100 migrations for an organization, newest first. `before`
/// pages backwards from the current window.
pub async fn fetch_migrations(
    client: &GithubClient,
    org_id: &str,
    state: MigrationFilter,
    before: Option<&str>,
) -> ClientResult<MigrationPage> {
    let variables = json!({
        "orgId": org_id,
        "state": state.as_graphql(),
        "before": before,
    });
    let response = client.execute(MIGRATIONS_QUERY, variables).await?;
    parse_migration_page(&response)
}

fn parse_organization_page(response: &Value) -> ClientResult<OrganizationPage> {
    let connection = response
        .pointer("/data/enterprise/organizations")
        .ok_or_else(|| ClientError::InvalidResponse {
            expected: "data.enterprise.organizations".to_string(),
        })?;
    Ok(OrganizationPage {
        organizations: parse_nodes(connection)?,
        page_info: parse_page_info(connection)?,
    })
}

fn parse_migration_page(response: &Value) -> ClientResult<MigrationPage> {
    let connection = response
        .pointer("/data/node/repositoryMigrations")
        .ok_or_else(|| ClientError::InvalidResponse {
            expected: "data.node.repositoryMigrations".to_string(),
        })?;
    Ok(MigrationPage {
        migrations: parse_nodes(connection)?,
        page_info: parse_page_info(connection)?,
    })
}

/// Missing or null `nodes` parses as an empty page, not an error.
fn parse_nodes<T: serde::de::DeserializeOwned>(connection: &Value) -> ClientResult<Vec<T>> {
    match connection.get("nodes") {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(nodes) => Ok(serde_json::from_value(nodes.clone())?),
    }
}

fn parse_page_info(connection: &Value) -> ClientResult<PageInfo> {
    match connection.get("pageInfo") {
        Some(Value::Null) | None => Ok(PageInfo::default()),
        Some(info) => Ok(serde_json::from_value(info.clone())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::github::types::{MigrationRecord, Organization};
    use serde_json::json;

    fn migrations_response(nodes: Value, page_info: Value) -> Value {
        json!({
            "data": {
                "node": {
                    "repositoryMigrations": {
                        "nodes": nodes,
                        "pageInfo": page_info,
                    }
                }
            }
        })
    }

    #[test]
    fn organizations_parse_in_server_order() {
        let response = json!({
            "data": {
                "enterprise": {
                    "name": "Acme",
                    "organizations": {
                        "pageInfo": { "hasNextPage": false, "endCursor": null },
                        "nodes": [
                            { "login": "acme-platform", "id": "O_1" },
                            { "login": "acme-tools", "id": "O_2" },
                        ]
                    }
                }
            }
        });

        let page = parse_organization_page(&response).unwrap();
        let logins: Vec<&str> = page
            .organizations
            .iter()
            .map(|org| org.login.as_str())
            .collect();
        assert_eq!(logins, vec!["acme-platform", "acme-tools"]);
        assert!(!page.page_info.has_next_page);
    }

    #[test]
    fn empty_migration_list_is_an_empty_page_not_an_error() {
        let response = migrations_response(
            json!([]),
            json!({ "hasPreviousPage": false, "startCursor": null, "endCursor": null }),
        );

        let page = parse_migration_page(&response).unwrap();
        assert!(page.migrations.is_empty());
        assert!(!page.page_info.has_previous_page);
    }

    #[test]
    fn migrations_preserve_descending_created_at_order() {
        // Server order is newest-first; the parser must not re-sort.
        let response = migrations_response(
            json!([
                {
                    "id": "RM_3",
                    "createdAt": "2024-03-01T09:00:00Z",
                    "failureReason": null,
                    "repositoryName": "gamma",
                    "state": "SUCCEEDED",
                    "migrationLogUrl": null
                },
                {
                    "id": "RM_2",
                    "createdAt": "2024-02-01T09:00:00Z",
                    "failureReason": null,
                    "repositoryName": "beta",
                    "state": "SUCCEEDED",
                    "migrationLogUrl": null
                },
                {
                    "id": "RM_1",
                    "createdAt": "2024-01-01T09:00:00Z",
                    "failureReason": null,
                    "repositoryName": "alpha",
                    "state": "SUCCEEDED",
                    "migrationLogUrl": null
                },
            ]),
            json!({ "hasPreviousPage": true, "startCursor": "Y3Vyc29yOjM=", "endCursor": "Y3Vyc29yOjE=" }),
        );

        let page = parse_migration_page(&response).unwrap();
        let names: Vec<&str> = page
            .migrations
            .iter()
            .map(|m| m.repository_name.as_str())
            .collect();
        assert_eq!(names, vec!["gamma", "beta", "alpha"]);
        assert!(page
            .migrations
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
        assert_eq!(page.page_info.start_cursor.as_deref(), Some("Y3Vyc29yOjM="));
    }

    #[test]
    fn failed_migration_carries_failure_reason() {
        let response = migrations_response(
            json!([{
                "id": "RM_9",
                "createdAt": "2024-04-02T16:45:00Z",
                "failureReason": "Git source migration failed.",
                "repositoryName": "delta",
                "state": "FAILED",
                "migrationLogUrl": "https://example.com/log/RM_9"
            }]),
            json!({ "hasPreviousPage": false, "startCursor": null, "endCursor": null }),
        );

        let page = parse_migration_page(&response).unwrap();
        assert_eq!(
            page.migrations[0].failure_reason.as_deref(),
            Some("Git source migration failed.")
        );
    }

    #[test]
    fn missing_connection_is_invalid_response() {
        // An org id that is not an Organization resolves `node` without the
        // repositoryMigrations field.
        let response = json!({ "data": { "node": null } });
        let err = parse_migration_page(&response).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { .. }));
    }

    #[test]
    fn node_types_round_trip_through_parse_nodes() {
        let connection = json!({
            "nodes": [{ "login": "acme-platform", "id": "O_1" }]
        });
        let orgs: Vec<Organization> = parse_nodes(&connection).unwrap();
        assert_eq!(orgs[0].id, "O_1");

        let empty: Vec<MigrationRecord> = parse_nodes(&json!({ "nodes": null })).unwrap();
        assert!(empty.is_empty());
    }
}
