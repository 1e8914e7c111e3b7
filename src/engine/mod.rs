//! Engine sub-modules: animation phase and the per-tick time snapshot.

pub mod animation;
pub mod snapshot;
