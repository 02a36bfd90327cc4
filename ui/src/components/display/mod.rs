pub mod error_notice;
pub mod loading_indicator;
pub mod migration_table;

pub use error_notice::*;
pub use loading_indicator::*;
pub use migration_table::*;
