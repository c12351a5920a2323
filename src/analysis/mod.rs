//! Pure computations over a snapshot of the log collection. Nothing here is cached, every call
//! recomputes from the entries it's given.

pub mod aggregate;
pub mod classifier;
