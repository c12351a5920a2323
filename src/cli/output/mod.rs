//! Turns computed results into things a terminal can show.

pub mod chart;
pub mod rows;
