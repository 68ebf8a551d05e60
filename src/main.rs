/*
 * Bird Flocking Simulation
 *
 * Entry point. The simulation core lives in the library; this binary wires
 * it to a nannou window with egui sliders for the steering weights.
 */

use birds::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
