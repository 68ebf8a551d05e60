/*
 * UI Module
 *
 * This module contains the control window for the simulation, built with
 * nannou_egui. It provides one slider per steering factor, a pause toggle,
 * and a couple of runtime stats.
 */

use nannou_egui::{egui, Egui};

use crate::params::SimulationParams;

// Update the UI, writing slider values straight into the params
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, fps: f32, bird_count: usize) {
    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.add(
                egui::Slider::new(
                    &mut params.togetherness_factor,
                    SimulationParams::get_factor_range(),
                )
                .text("Togetherness"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.alignment_factor,
                    SimulationParams::get_factor_range(),
                )
                .text("Alignment"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.separation_factor,
                    SimulationParams::get_factor_range(),
                )
                .text("Separation"),
            );

            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

            ui.separator();
            ui.label(format!("FPS: {:.1}", fps));
            ui.label(format!("Birds: {}", bird_count));
        });
}
