//! This crate contains all shared UI components for the migration status dashboard.

pub mod app;
pub use app::MigrationDashboard;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
