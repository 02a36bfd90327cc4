pub mod migration_dashboard;

pub use migration_dashboard::MigrationDashboard;
