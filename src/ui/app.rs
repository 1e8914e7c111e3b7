//! Window orchestrator: owns theme and animation state and drives the render tick.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::engine::animation::AnimationPhase;
use crate::engine::snapshot::TimeSnapshot;
use crate::error::Result;
use crate::ui::theme::Theme;
use crate::ui::window::{ClockFace, FaceState};

/// Interval between render ticks (snapshot refresh + animation step).
const TICK: Duration = Duration::from_millis(200);

/// How long the window stays always-on-top after launch.
const TOPMOST_HOLD: Duration = Duration::from_secs(2);

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level clock window, implementing [`eframe::App`].
///
/// All display logic lives in the face; `ClockApp` only:
/// 1. Refreshes the [`TimeSnapshot`] and advances the animation phase once
///    per tick.
/// 2. Releases the always-on-top window level two seconds after launch.
/// 3. Paints the themed background and delegates drawing to the face.
/// 4. Handles the right-click context menu (theme / fullscreen / exit).
pub struct ClockApp {
    theme: Theme,
    animation: AnimationPhase,
    snapshot: TimeSnapshot,
    face: Box<dyn ClockFace>,

    started: Instant,
    last_tick: Instant,
    topmost_released: bool,
    fullscreen: bool,
}

impl ClockApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, face: Box<dyn ClockFace>) -> Self {
        let now = Instant::now();
        Self {
            theme: Theme::default(),
            animation: AnimationPhase::default(),
            snapshot: TimeSnapshot::now(),
            face,
            started: now,
            last_tick: now,
            topmost_released: false,
            fullscreen: false,
        }
    }

    fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        log::info!("theme changed to {}", self.theme.name);
    }

    fn toggle_fullscreen(&mut self, ctx: &egui::Context) {
        self.fullscreen = !self.fullscreen;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
        log::info!("fullscreen: {}", self.fullscreen);
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Render tick: refresh snapshot, step the animation ──────────────
        if self.last_tick.elapsed() >= TICK {
            self.snapshot = TimeSnapshot::now();
            self.animation.advance();
            self.last_tick = Instant::now();
        }

        // ── 2. Release the launch-time always-on-top level (once) ─────────────
        if !self.topmost_released && self.started.elapsed() >= TOPMOST_HOLD {
            ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(
                egui::WindowLevel::Normal,
            ));
            self.topmost_released = true;
            log::debug!("released always-on-top window level");
        }

        // ── 3. Themed central panel, delegated to the face ────────────────────
        let frame = egui::Frame::default().fill(self.theme.background);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let response = ui.interact(
                ui.max_rect(),
                egui::Id::new("clock_background"),
                egui::Sense::click(),
            );

            let state = FaceState {
                snapshot: &self.snapshot,
                theme: &self.theme,
                pulse: self.animation.pulse(),
            };
            self.face.ui(ui, &state);

            // ── 4. Right-click context menu ───────────────────────────────────
            response.context_menu(|ui| {
                if ui.button("Change Theme").clicked() {
                    self.cycle_theme();
                    ui.close();
                }
                if ui.button("Toggle Fullscreen").clicked() {
                    self.toggle_fullscreen(ctx);
                    ui.close();
                }
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        // ── 5. Re-arm the tick ────────────────────────────────────────────────
        ctx.request_repaint_after(TICK);
    }
}

// ── Entry point ────────────────────────────────────────────────────────────────

/// Open a fixed-size, initially always-on-top window hosting the given face
/// and run it to completion.
pub fn run(face: Box<dyn ClockFace>) -> Result<()> {
    let title = face.name();
    let size = face.window_size();
    log::info!("starting {title} ({}x{})", size.x, size.y);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size)
            .with_resizable(false)
            .with_always_on_top(),
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(ClockApp::new(cc, face)))),
    )?;
    Ok(())
}
