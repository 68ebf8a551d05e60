/*
 * Bird Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The simulation core (vector, bird, neighbourhood, flock) has no
 * dependency on the windowing layer; app and ui wire it to nannou.
 */

// Re-export key components for easier access
pub use bird::Bird;
pub use flock::Flock;
pub use neighbourhood::Neighbourhood;
pub use params::SimulationParams;
pub use vector::Vector3;

// Define modules
pub mod app;
pub mod bird;
pub mod flock;
pub mod neighbourhood;
pub mod params;
pub mod ui;
pub mod vector;

// Constants
pub const BIRD_SIZE: f32 = 15.0;
pub const FLOCK_SIZE: usize = 300;
pub const NEIGHBOURHOOD_RADIUS: f32 = 200.0;
pub const SEPARATION_DISTANCE: f32 = 20.0;
pub const CRUISING_SPEED: f32 = 3.0;
pub const EDGE_MARGIN: f32 = 50.0;
pub const EDGE_NUDGE: f32 = 1.0;

// The world the birds fly in, in canvas-style coordinates: the origin is the
// top-left corner and y points down. The renderer maps these to nannou's
// centred coordinates when drawing.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn centre(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}
