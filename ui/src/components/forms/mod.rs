pub mod org_selector;
pub mod state_filter;

pub use org_selector::*;
pub use state_filter::*;
