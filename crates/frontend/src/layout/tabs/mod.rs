//! Content regions of the dashboard
//!
//! - `page` - wrapper that mounts the region for the active tab
//! - `registry` - tab id -> View mapping, the only place that knows it

pub mod page;
pub mod registry;

pub use page::TabPage;
