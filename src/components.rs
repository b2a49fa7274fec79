//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the report and navigation pages.

pub mod card;
pub mod footer;
pub mod layout;
pub mod modal;
