//! GitHub GraphQL service layer.
//!
//! - **client**: cached GraphQL transport bound to the fixed GitHub endpoint
//! - **queries**: the two read-only queries behind the dashboard
//! - **types**: wire structs for organizations, migrations, and page info
//! - **errors**: common error type for the query layer

pub mod client;
pub mod errors;
pub mod queries;
pub mod types;

pub use client::GithubClient;
pub use errors::{ClientError, ClientResult};
pub use queries::{fetch_migrations, fetch_organizations};
pub use types::*;
