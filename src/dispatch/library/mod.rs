//! Dispatch types.

pub mod delta;
pub mod report;
