//! Navigation header for the talent-booking front end.
//!
//! The header renders the fixed set of view-switch triggers, projects the
//! page's favourites and unread counters onto badges, and reveals the admin
//! trigger for admin sessions. All state is supplied by the page; triggers
//! only report the requested destination back through a callback.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod model;
pub mod navigation;

pub use components::NavigationHeader;
pub use model::{HeaderCounter, HeaderError, HeaderState, NavDestination};
pub use navigation::{badge_count, nav_registry, project_header, NavDescriptor, NavEntry};
