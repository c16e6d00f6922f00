//! Verbena Component
//!
//! Serializable descriptor types for components in the Verbena catalog.
//! These types mirror the JSON shapes the back end sends to the front end;
//! the display crates derive presentation state (badges, styles) from them
//! without mutating them.

mod descriptor;
mod error;
mod schedule;

pub use descriptor::{Author, ComponentDescriptor, DescriptorKey, PublisherType};
pub use error::ComponentError;
pub use schedule::{Schedule, ScheduleStatus};
