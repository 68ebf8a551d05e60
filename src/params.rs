/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains the
 * adjustable weights for the steering rules. The UI writes them between
 * frames and each tick reads them fresh, so slider changes take effect on
 * the next update without any synchronisation.
 */

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub alignment_factor: f32,
    pub separation_factor: f32,
    pub togetherness_factor: f32,
    pub pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            alignment_factor: 0.5,
            separation_factor: -0.05,
            togetherness_factor: 0.01,
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    // Get parameter range for UI sliders
    pub fn get_factor_range() -> std::ops::RangeInclusive<f32> {
        -1.0..=1.0
    }
}
