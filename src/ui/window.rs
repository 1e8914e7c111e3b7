//! The `ClockFace` trait and the shared `FaceState` view passed to each face.
//!
//! To add a new clock face:
//! 1. Create a new file in `ui/faces/`.
//! 2. Implement `ClockFace` for your struct.
//! 3. Add a binary under `src/bin/` that hands it to `ui::app::run`.

use crate::engine::snapshot::TimeSnapshot;
use crate::ui::theme::Theme;

/// Read-only view of window state shared with the face's `ui` call each tick.
pub struct FaceState<'a> {
    /// The time snapshot taken at the start of the current tick.
    pub snapshot: &'a TimeSnapshot,
    /// The active theme.
    pub theme: &'a Theme,
    /// Pulse intensity in [0, 1] for the second hand/digit highlight.
    pub pulse: f64,
}

/// Trait implemented by every clock face.
///
/// The orchestrator (`ClockApp`) owns the theme, the animation phase, and the
/// render tick; a face only turns the current `FaceState` into widgets and
/// painter calls.
pub trait ClockFace {
    /// Display name used as the window title.
    fn name(&self) -> &'static str;

    /// Fixed inner size of the window hosting this face.
    fn window_size(&self) -> egui::Vec2;

    /// Draw the face contents. Called every frame by `ClockApp::update`.
    fn ui(&mut self, ui: &mut egui::Ui, state: &FaceState<'_>);
}
