/*
 * Application Module
 *
 * This module defines the nannou model and frame callbacks. Every frame runs
 * one simulation tick followed by one render pass; the simulation core never
 * schedules anything itself.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::ui;
use crate::{Viewport, FLOCK_SIZE, NEIGHBOURHOOD_RADIUS};

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub viewport: Viewport,
    pub egui: Egui,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Create the main window
    let window_id = app
        .new_window()
        .title("Bird Flocking Simulation")
        .size(1280, 800)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    let rect = window.rect();
    let viewport = Viewport::new(rect.w(), rect.h());

    // Spawn the whole flock at the viewport centre with zero velocity
    let (spawn_x, spawn_y) = viewport.centre();
    let flock = Flock::new(FLOCK_SIZE, NEIGHBOURHOOD_RADIUS, spawn_x, spawn_y);

    Model {
        flock,
        params: SimulationParams::default(),
        viewport,
        egui,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);
    ui::update_ui(
        &mut model.egui,
        &mut model.params,
        app.fps(),
        model.flock.len(),
    );

    // Track the live window size so edge avoidance matches what is on screen
    let rect = app.window_rect();
    model.viewport = Viewport::new(rect.w(), rect.h());

    if !model.params.pause_simulation {
        model.flock.tick(&model.params, &model.viewport);
    }
}

// Render the current frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    for bird in model.flock.birds() {
        bird.draw(&draw, &model.viewport);
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
