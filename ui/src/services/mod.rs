//! Infrastructure Services
//!
//! This module provides the core infrastructure for the dashboard:
//!
//! - **config**: Build-time environment configuration (token, enterprise slug)
//! - **github**: GitHub GraphQL client, queries, and response types
//!
//! The services are designed to be WASM-first: all async work runs inside
//! Dioxus resources, without Send/Sync bounds.

pub mod config;
pub mod github;
