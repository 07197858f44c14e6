//! Core data model for the timeline.

mod activity;

pub use activity::{Activity, ActivityId};
