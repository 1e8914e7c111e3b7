//! Analog face: painted dial, hour/minute ticks, and three hands.

use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Pos2, RichText, Sense, Stroke, Vec2};

use crate::engine::snapshot::TimeSnapshot;
use crate::ui::color;
use crate::ui::theme::Theme;
use crate::ui::window::{ClockFace, FaceState};

// ── Hand angles ────────────────────────────────────────────────────────────────
//
// All angles are in degrees, offset by -90° so 12 o'clock points straight up
// (screen coordinates are y-down, matching the canvas the dial is painted on).

/// Hour hand angle: 30° per hour plus 0.5° per minute of creep.
pub fn hour_angle(hour: i8, minute: i8) -> f32 {
    f32::from(hour % 12) * 30.0 + f32::from(minute) * 0.5 - 90.0
}

/// Minute hand angle: 6° per minute plus 0.1° per second of creep.
pub fn minute_angle(minute: i8, second: i8) -> f32 {
    f32::from(minute) * 6.0 + f32::from(second) * 0.1 - 90.0
}

/// Second hand angle: 6° per second, stepping.
pub fn second_angle(second: i8) -> f32 {
    f32::from(second) * 6.0 - 90.0
}

/// Point at `length` from `center` along `angle_deg`.
fn radial_point(center: Pos2, angle_deg: f32, length: f32) -> Pos2 {
    center + Vec2::angled(angle_deg.to_radians()) * length
}

// ── Face ───────────────────────────────────────────────────────────────────────

/// The painted analog dial with date/meridiem/info labels around it.
pub struct AnalogFace {
    /// Side length of the square dial canvas, in points.
    dial_size: f32,
}

impl Default for AnalogFace {
    fn default() -> Self {
        Self { dial_size: 300.0 }
    }
}

impl AnalogFace {
    /// Dial outline, 12 labelled hour ticks, and 48 minor minute ticks.
    fn draw_dial(&self, painter: &Painter, center: Pos2, radius: f32, theme: &Theme) {
        painter.circle_stroke(center, radius, Stroke::new(2.0, theme.text));

        for i in 0..12_i8 {
            let angle = f32::from(i) * 30.0 - 90.0;
            painter.line_segment(
                [
                    radial_point(center, angle, radius - 20.0),
                    radial_point(center, angle, radius),
                ],
                Stroke::new(3.0, theme.text),
            );

            let numeral = if i == 0 { 12 } else { i };
            painter.text(
                radial_point(center, angle, radius - 40.0),
                Align2::CENTER_CENTER,
                numeral.to_string(),
                FontId::proportional(14.0),
                theme.text,
            );
        }

        for i in 0..60_i8 {
            if i % 5 == 0 {
                continue; // hour tick already drawn
            }
            let angle = f32::from(i) * 6.0 - 90.0;
            painter.line_segment(
                [
                    radial_point(center, angle, radius - 10.0),
                    radial_point(center, angle, radius),
                ],
                Stroke::new(1.0, theme.text),
            );
        }
    }

    /// Hour, minute, and pulsing second hands, plus the center cap.
    fn draw_hands(
        &self,
        painter: &Painter,
        center: Pos2,
        radius: f32,
        snap: &TimeSnapshot,
        theme: &Theme,
        pulse: f64,
    ) {
        painter.line_segment(
            [
                center,
                radial_point(center, hour_angle(snap.hour, snap.minute), radius * 0.5),
            ],
            Stroke::new(6.0, theme.primary),
        );
        painter.line_segment(
            [
                center,
                radial_point(center, minute_angle(snap.minute, snap.second), radius * 0.7),
            ],
            Stroke::new(4.0, theme.primary),
        );

        let second_color = color::blend(theme.secondary, Color32::WHITE, pulse);
        painter.line_segment(
            [
                center,
                radial_point(center, second_angle(snap.second), radius * 0.8),
            ],
            Stroke::new(2.0, second_color),
        );

        painter.circle_filled(center, 8.0, theme.secondary);
    }
}

impl ClockFace for AnalogFace {
    fn name(&self) -> &'static str {
        "Analog Clock"
    }

    fn window_size(&self) -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &FaceState<'_>) {
        let theme = state.theme;
        let snap = state.snapshot;

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new(snap.date.as_str()).size(24.0).color(theme.text));
            ui.add_space(20.0);

            let (response, painter) =
                ui.allocate_painter(Vec2::splat(self.dial_size), Sense::hover());
            let center = response.rect.center();
            let radius = self.dial_size / 2.0 - 10.0;
            self.draw_dial(&painter, center, radius, theme);
            self.draw_hands(&painter, center, radius, snap, theme, state.pulse);

            ui.add_space(8.0);
            ui.label(RichText::new(snap.meridiem()).size(24.0).color(theme.accent));
            ui.add_space(20.0);
            ui.label(
                RichText::new(format!(
                    "Day: {}    Week: {:02}",
                    snap.weekday, snap.iso_week
                ))
                .size(18.0)
                .color(theme.text),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_point_up_at_noon() {
        assert_eq!(hour_angle(12, 0), -90.0);
        assert_eq!(hour_angle(0, 0), -90.0);
        assert_eq!(minute_angle(0, 0), -90.0);
        assert_eq!(second_angle(0), -90.0);
    }

    #[test]
    fn hour_hand_points_right_at_three() {
        assert_eq!(hour_angle(3, 0), 0.0);
        assert_eq!(hour_angle(15, 0), 0.0);
    }

    #[test]
    fn hour_hand_creeps_with_minutes() {
        // Half past three: 3 * 30 + 30 * 0.5 - 90 = 15°.
        assert_eq!(hour_angle(3, 30), 15.0);
    }

    #[test]
    fn minute_hand_creeps_with_seconds() {
        assert_eq!(minute_angle(15, 0), 0.0);
        assert!((minute_angle(15, 30) - 3.0).abs() < 1e-4);
    }

    #[test]
    fn second_hand_steps_six_degrees() {
        assert_eq!(second_angle(15), 0.0);
        assert_eq!(second_angle(30), 90.0);
        assert_eq!(second_angle(45), 180.0);
    }

    #[test]
    fn radial_point_up_is_negative_y() {
        let center = Pos2::new(100.0, 100.0);
        let p = radial_point(center, -90.0, 50.0);
        assert!((p.x - 100.0).abs() < 1e-3);
        assert!((p.y - 50.0).abs() < 1e-3);
    }
}
