//! The meshboard page as an eframe app.
//!
//! One window-sized canvas plus two navigation buttons floating in the top
//! left corner. Everything is recomposed every frame from the point history.

use eframe::egui;
use egui::{Color32, RichText};
use meshboard_board::{edge_dump, PointHistory};
use meshboard_core::{BoardStyle, Size};
use tracing::{info, trace, warn};

use crate::editor::{Canvas, Control, NavControl, WindowEvents};

const BUTTON_FILL: Color32 = Color32::from_rgb(243, 244, 246);

pub struct MeshboardApp {
    history: PointHistory,
    style: BoardStyle,
    // Dropped before the window so the resize listener is removed explicitly.
    canvas: Canvas,
    window: WindowEvents,
}

impl MeshboardApp {
    pub fn new(style: BoardStyle) -> Self {
        let style = match style.validate() {
            Ok(()) => style,
            Err(err) => {
                warn!(%err, "invalid board style, falling back to default");
                BoardStyle::default()
            }
        };

        // Real size arrives with the first frame.
        let window = WindowEvents::new(Size::ZERO);
        let canvas = Canvas::mount(&window);
        info!("meshboard started");

        Self {
            history: PointHistory::new(),
            style,
            canvas,
            window,
        }
    }

    pub fn history(&self) -> &PointHistory {
        &self.history
    }

    pub fn style(&self) -> &BoardStyle {
        &self.style
    }

    pub fn surface_size(&self) -> Size {
        self.canvas.size()
    }

    /// Forward the window size egui reports, if it changed.
    pub fn sync_window_size(&mut self, size: Size) {
        if size != self.window.inner_size() {
            self.window.resize(size);
        }
    }

    /// Apply a navigation control exactly as its button would.
    pub fn press(&mut self, control: NavControl) -> bool {
        control.apply(&mut self.history)
    }

    fn show_controls(&mut self, ctx: &egui::Context) {
        let inset = self.style.button_inset;
        let side = self.style.button_size;

        egui::Area::new(egui::Id::new("meshboard_nav"))
            .fixed_pos(egui::pos2(inset, inset))
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.x = self.style.button_gap;
                ui.horizontal(|ui| {
                    for control in NavControl::ALL {
                        let color = if control.enabled(&self.history) {
                            Color32::BLACK
                        } else {
                            Color32::GRAY
                        };
                        let button =
                            egui::Button::new(RichText::new(control.glyph()).color(color))
                                .fill(BUTTON_FILL)
                                .corner_radius(4.0);
                        let response = ui
                            .add_sized([side, side], button)
                            .on_hover_text(control.name());
                        if response.clicked() {
                            self.press(control);
                        }
                    }
                });
            });
    }

    fn show_edge_dump(&self, ctx: &egui::Context) {
        let dump = match edge_dump(&self.history) {
            Ok(dump) => dump,
            Err(err) => {
                warn!(%err, "could not serialize edges");
                return;
            }
        };
        let top = self.style.button_inset * 2.0 + self.style.button_size;

        egui::Area::new(egui::Id::new("meshboard_edge_dump"))
            .fixed_pos(egui::pos2(self.style.button_inset, top))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(RichText::new(dump).monospace().small());
            });
    }
}

impl Default for MeshboardApp {
    fn default() -> Self {
        Self::new(BoardStyle::default())
    }
}

impl eframe::App for MeshboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect().size();
        self.sync_window_size(Size {
            width: screen.x,
            height: screen.y,
        });

        self.show_controls(ctx);
        if self.style.show_edge_dump {
            self.show_edge_dump(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::WHITE))
            .show(ctx, |ui| {
                self.canvas.show(ui, &mut self.history, &self.style);
            });

        trace!(
            points = self.history.len(),
            steps_back = self.history.steps_back(),
            "frame done"
        );
    }
}
