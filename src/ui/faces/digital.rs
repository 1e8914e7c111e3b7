//! Digital face: large time digits with blinking colons and a pulsing second.

use eframe::egui;
use egui::text::LayoutJob;
use egui::{Color32, FontId, RichText, TextFormat, Vec2};

use crate::ui::color;
use crate::ui::window::{ClockFace, FaceState};

#[derive(Default)]
pub struct DigitalFace;

impl ClockFace for DigitalFace {
    fn name(&self) -> &'static str {
        "Digital Clock"
    }

    fn window_size(&self) -> Vec2 {
        Vec2::new(800.0, 400.0)
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &FaceState<'_>) {
        let theme = state.theme;
        let snap = state.snapshot;

        // Colons render in the background color on odd seconds, which makes
        // them vanish against the panel.
        let colon_color = if snap.second % 2 == 0 {
            theme.text
        } else {
            theme.background
        };
        let second_color = color::blend(theme.secondary, Color32::WHITE, state.pulse);

        let digit = |color| TextFormat {
            font_id: FontId::proportional(80.0),
            color,
            ..Default::default()
        };

        // One layout job keeps the whole H:MM:SS row on a single centered
        // line while coloring every segment independently.
        let mut time_row = LayoutJob::default();
        time_row.append(&snap.hour_label(), 0.0, digit(theme.primary));
        time_row.append(":", 5.0, digit(colon_color));
        time_row.append(&snap.minute_label(), 5.0, digit(theme.primary));
        time_row.append(":", 5.0, digit(colon_color));
        time_row.append(&snap.second_label(), 5.0, digit(second_color));
        time_row.append(
            snap.meridiem(),
            12.0,
            TextFormat {
                font_id: FontId::proportional(24.0),
                color: theme.accent,
                ..Default::default()
            },
        );

        let info = TextFormat {
            font_id: FontId::proportional(18.0),
            color: theme.text,
            ..Default::default()
        };
        let mut info_row = LayoutJob::default();
        info_row.append(&format!("Day: {}", snap.weekday), 0.0, info.clone());
        info_row.append(&format!("Week: {:02}", snap.iso_week), 24.0, info);

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new(snap.date.as_str()).size(24.0).color(theme.text));
            ui.add_space(40.0);
            ui.label(time_row);
            ui.add_space(40.0);
            ui.label(info_row);
        });
    }
}
