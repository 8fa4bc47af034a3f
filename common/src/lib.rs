//! Platform-independent core of the image gallery widgets: data model,
//! validation rule set, submission pipeline, preview coordination, paged listing and
//! collection cache. The Yew frontend renders on top of these types.

pub mod cache;
pub mod config;
pub mod grid;
pub mod listing;
pub mod model;
pub mod preview;
pub mod requests;
pub mod submission;
pub mod validation;
