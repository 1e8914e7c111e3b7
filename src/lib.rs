//! Themed desktop clock widgets built on `eframe`/`egui`.
//!
//! Two binaries share this library: `analog` (a vector clock face with
//! hour/minute/second hands) and `digital` (large time digits with blinking
//! colons). Both are a single [`ui::app::ClockApp`] window driving a 200 ms
//! render tick; the widget-specific drawing lives behind the
//! [`ui::window::ClockFace`] trait.

pub mod engine;
pub mod error;
pub mod ui;
