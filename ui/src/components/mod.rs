//! User Interface Components
//!
//! Reusable Dioxus components for the dashboard:
//!
//! - **forms**: the organization selector and migration-state filter
//! - **display**: loading/error leaves and the migration results table

pub mod display;
pub mod forms;
