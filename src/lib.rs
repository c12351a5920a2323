//! Small self-tracking tool: log what you actually did instead of what you meant to do, see
//! which distractions win most often and get a nudge back on task.
//!

pub mod analysis;
pub mod cli;
pub mod feedback;
pub mod tracker;
pub mod utils;
