//! Text and symbols shown back to the user about their entries.

pub mod label;
pub mod suggestion;
