//! UI layer: ClockApp orchestrator, ClockFace trait, colors, themes, faces.

pub mod app;
pub mod color;
pub mod faces;
pub mod theme;
pub mod window;
