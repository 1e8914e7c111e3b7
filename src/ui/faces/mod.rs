//! Clock face implementations.

pub mod analog;
pub mod digital;
