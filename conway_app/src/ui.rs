// ui.rs - Control form, config form and canvas

use eframe::egui;
use egui::Color32;
use grid_display::PlayMode;
use grid_display::PointerPosition;

use crate::GridSimApp;
use crate::session::{self, Model};

const MAX_EXTENT: u32 = 512;

impl eframe::App for GridSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver the frame requested during the previous pass
        if let Ok(controller) = &mut self.session {
            controller.refresh();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("{} ({}x{})", self.model.label(), self.config.width, self.config.height));

            if self.config_form(ui) {
                self.apply_draft();
            }

            ui.separator();
            self.control_form(ui);
            ui.separator();
            self.canvas(ui);
        });
    }
}

impl GridSimApp {
    /// Returns true when Apply was pressed.
    fn config_form(&mut self, ui: &mut egui::Ui) -> bool {
        let mut apply = false;

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.draft_model, Model::Life, Model::Life.label());
            ui.selectable_value(&mut self.draft_model, Model::Lenia, Model::Lenia.label());

            ui.separator();

            ui.label("Width:");
            ui.add(egui::DragValue::new(&mut self.draft.width).clamp_range(1..=MAX_EXTENT));
            ui.label("Height:");
            ui.add(egui::DragValue::new(&mut self.draft.height).clamp_range(1..=MAX_EXTENT));
        });

        ui.horizontal(|ui| {
            ui.label("Pattern:");
            let selected = session::pattern_label(self.draft.pattern.as_deref()).to_owned();
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.draft.pattern, None, "Template");
                    for pattern in conway::PATTERNS {
                        ui.selectable_value(
                            &mut self.draft.pattern,
                            Some(pattern.name.to_string()),
                            pattern.name,
                        )
                        .on_hover_text(pattern.description);
                    }
                });

            ui.checkbox(&mut self.draft.show_grid_lines, "Grid lines");
            ui.checkbox(&mut self.draft.show_fps, "FPS");

            if ui.button("Apply").clicked() {
                apply = true;
            }
        });

        apply
    }

    fn control_form(&mut self, ui: &mut egui::Ui) {
        let Ok(controller) = &mut self.session else {
            return;
        };

        ui.horizontal(|ui| {
            let (label, mode) = if controller.is_running() {
                ("⏸ Pause", PlayMode::Pause)
            } else {
                ("▶ Play", PlayMode::Play)
            };
            if ui.button(label).clicked() {
                controller.set_play_mode(mode);
            }

            // Stepping only makes sense while paused
            if ui
                .add_enabled(controller.is_paused(), egui::Button::new("⏭ Next"))
                .clicked()
            {
                controller.step();
            }

            ui.separator();

            ui.label(format!("Generation: {}", controller.ticks()));
            if let Some(fps) = controller.fps() {
                ui.label(format!("{fps:.0} fps"));
            }

            ui.separator();

            ui.add(egui::Slider::new(&mut self.zoom, 1.0..=6.0).text("Zoom"));
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let controller = match &mut self.session {
            Ok(controller) => controller,
            Err(message) => {
                ui.colored_label(Color32::RED, message.as_str());
                return;
            }
        };

        let context = controller.surface().context();
        let (response, painter) =
            ui.allocate_painter(context.display_size(self.zoom), egui::Sense::click());
        context.paint(&painter, response.rect);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let pointer = PointerPosition::new(pos.x as f64, pos.y as f64);
                controller.click(pointer, response.rect.into());
            }
        }
    }
}
