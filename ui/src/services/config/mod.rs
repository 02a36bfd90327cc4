//! Dashboard configuration sourced from the build environment.
//!
//! There is no runtime environment in the browser, so both values are baked
//! in at compile time. Missing values degrade silently to empty strings: a
//! missing token
//! produces unauthenticated requests, a missing slug an enterprise query that
//! matches nothing.

/// Build-time settings for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Enterprise personal access token. Empty when unset.
    pub token: String,
    /// Slug of the enterprise whose organizations are listed. Empty when unset.
    pub enterprise_slug: String,
}

impl DashboardConfig {
    /// Read `GITHUB_PAT` and `GITHUB_ENTERPRISE_NAME` from the build
    /// environment.
    pub fn from_build_env() -> Self {
        Self {
            token: option_env!("GITHUB_PAT").unwrap_or("").to_string(),
            enterprise_slug: option_env!("GITHUB_ENTERPRISE_NAME")
                .unwrap_or("")
                .to_string(),
        }
    }

    /// Construct a config with explicit values.
    pub fn new(token: impl Into<String>, enterprise_slug: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            enterprise_slug: enterprise_slug.into(),
        }
    }

    /// `Authorization` header value: `Bearer <token>`, or the empty string
    /// when no token is configured.
    pub fn authorization_header(&self) -> String {
        if self.token.is_empty() {
            String::new()
        } else {
            format!("Bearer {}", self.token)
        }
    }
}
