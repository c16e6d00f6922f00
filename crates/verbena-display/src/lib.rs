//! Verbena Display
//!
//! Presentation helpers consumed by the catalog front end:
//! - badge classification for component descriptors, split into a
//!   provenance axis (official / community) and a lifecycle axis
//!   (deprecated / outdated / latest)
//! - a memo cache for the derived badge list, keyed by descriptor identity
//! - schedule timestamp formatting and status-to-style mapping
//!
//! Everything here is synchronous and stateless apart from the memo cache;
//! the rendering layer calls these on each redraw.

mod badge;
mod cache;
mod schedule;

pub use badge::{badges_for, classify, Badge, BadgeKind};
pub use cache::BadgeCache;
pub use schedule::{format_next_run, status_style, StatusStyle};
