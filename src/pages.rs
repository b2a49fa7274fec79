//! Page generation modules
//!
//! Each page module assembles a complete document from the shared
//! components: the card report page and the navigation page.

pub mod navigation;
pub mod report;
