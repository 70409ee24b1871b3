use eframe::egui::{self, Align, Layout, Ui, color_picker};

use crate::input::InputEvent;
use crate::plexus::PairScan;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_header(&mut self, ui: &mut Ui) -> Option<InputEvent> {
        let mut tilt_event = None;

        ui.horizontal(|ui| {
            ui.heading("plexus-view");
            ui.separator();

            if ui
                .button(format!("Theme: {}", self.theme.label()))
                .on_hover_text("Switch between the dark and light palettes.")
                .clicked()
            {
                self.theme = self.theme.toggled();
            }

            ui.label("Accent");
            color_picker::color_edit_button_srgba(
                ui,
                &mut self.accent,
                color_picker::Alpha::Opaque,
            )
            .on_hover_text("Colour used for highlighted links and focused nodes.");

            ui.checkbox(&mut self.show_graph, "Skill graph")
                .on_hover_text("Show the pointer-reactive skill graph panel.");

            ui.menu_button("Tuning", |ui| {
                ui.label("Link scan");
                ui.horizontal(|ui| {
                    let mut scan = self.plexus.scan();
                    let mut changed = ui
                        .selectable_value(&mut scan, PairScan::AllPairs, "All pairs")
                        .on_hover_text("Compare every particle against every other one.")
                        .changed();
                    changed |= ui
                        .selectable_value(&mut scan, PairScan::Grid, "Uniform grid")
                        .on_hover_text("Only compare particles in neighbouring grid cells.")
                        .changed();
                    if changed {
                        self.plexus.set_scan(scan);
                    }
                });

                ui.separator();
                ui.add(
                    egui::Slider::new(&mut self.pull.strength, 0.0..=0.3)
                        .text("Node pull")
                        .clamping(egui::SliderClamping::Always),
                )
                .on_hover_text("Draw nodes near the pointer slightly toward it.");

                ui.separator();
                let tilt_toggled = ui
                    .checkbox(&mut self.tilt_enabled, "Simulated tilt")
                    .on_hover_text("Steer the reference point with device-orientation angles.")
                    .changed();
                let mut tilt_changed = tilt_toggled && self.tilt_enabled;
                ui.add_enabled_ui(self.tilt_enabled, |ui| {
                    tilt_changed |= ui
                        .add(egui::Slider::new(&mut self.tilt_gamma, -90.0..=90.0).text("Gamma"))
                        .changed();
                    tilt_changed |= ui
                        .add(egui::Slider::new(&mut self.tilt_beta, -180.0..=180.0).text("Beta"))
                        .changed();
                });
                if tilt_changed {
                    tilt_event = Some(InputEvent::Orientation {
                        gamma: self.tilt_gamma,
                        beta: self.tilt_beta,
                    });
                }

                ui.separator();
                ui.checkbox(&mut self.show_stats, "Frame stats")
                    .on_hover_text("Show rolling frame statistics in the header.");
                ui.add_enabled_ui(self.show_stats, |ui| {
                    ui.checkbox(&mut self.stats_show_fps, "Frames per second");
                    ui.checkbox(&mut self.stats_show_frame_time, "Mean frame time");
                    ui.checkbox(&mut self.stats_show_links, "Mean links per frame");
                });
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(self.stats_text());
            });
        });

        tilt_event
    }
}
