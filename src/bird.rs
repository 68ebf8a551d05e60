/*
 * Bird Module
 *
 * This module defines the Bird struct and its behaviour. Each bird steers by
 * four contributions, accumulated in order:
 * 1. Togetherness: fly relative to the neighbourhood's average position
 * 2. Alignment: fly relative to the neighbourhood's average velocity
 * 3. Separation: steer off the single closest bird when it is too close
 * 4. Edge avoidance: hard nudges away from the viewport edges
 *
 * The sum only ever picks a direction; speed is fixed at CRUISING_SPEED once
 * the bird is moving.
 */

use rand::Rng;

use crate::neighbourhood::Neighbourhood;
use crate::params::SimulationParams;
use crate::vector::Vector3;
use crate::{Viewport, CRUISING_SPEED, EDGE_MARGIN, EDGE_NUDGE, SEPARATION_DISTANCE};

#[derive(Clone)]
pub struct Bird {
    pub size: f32,
    pub position: Vector3,
    pub velocity: Vector3,
}

impl Bird {
    pub fn new(size: f32, x: f32, y: f32) -> Self {
        Self {
            size,
            position: Vector3::new(x, y, 0.0),
            velocity: Vector3::ZERO,
        }
    }

    // Advance one tick: accumulate the steering contributions into the
    // current velocity, fix the speed, then take an Euler step.
    pub fn update(
        &mut self,
        neighbourhood: &Neighbourhood,
        params: &SimulationParams,
        viewport: &Viewport,
    ) {
        let mut velocity = self.velocity;

        // Togetherness measures from the neighbourhood centre to the bird.
        let to_centre = (self.position - neighbourhood.average_position()).normalised();
        velocity = velocity + to_centre * params.togetherness_factor;

        // Alignment subtracts the neighbourhood's average velocity from the
        // running velocity. The subtraction is deliberate; do not flip it to
        // steer towards the average heading.
        let alignment = (velocity - neighbourhood.average_velocity()).normalised();
        velocity = velocity + alignment * params.alignment_factor;

        // Negated so that positive slider values repel.
        velocity = velocity + self.separation(neighbourhood) * -params.separation_factor;

        // Edge avoidance is applied last and is never scaled by a factor.
        velocity = self.avoid_edges(velocity, viewport);

        // Contributions only ever choose a direction; the zero vector stays
        // zero, so an undisturbed stationary bird remains stationary.
        self.velocity = velocity.normalised() * CRUISING_SPEED;
        self.position = self.position + self.velocity;
    }

    // Direction away from the closest other member of the neighbourhood, if
    // one is within SEPARATION_DISTANCE and not practically on top of us.
    // Otherwise a random planar direction, which also scatters birds stacked
    // on the same spot.
    fn separation(&self, neighbourhood: &Neighbourhood) -> Vector3 {
        if let Some(closest) = neighbourhood.closest_neighbour() {
            if closest.distance < SEPARATION_DISTANCE && closest.distance > 1.0 {
                return (self.position - closest.position).normalised();
            }
        }

        let mut rng = rand::thread_rng();
        Vector3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 0.0).normalised()
    }

    fn avoid_edges(&self, mut velocity: Vector3, viewport: &Viewport) -> Vector3 {
        if viewport.width - self.position.x < EDGE_MARGIN {
            velocity.x -= EDGE_NUDGE;
        }
        if self.position.x < EDGE_MARGIN {
            velocity.x += EDGE_NUDGE;
        }
        if viewport.height - self.position.y < EDGE_MARGIN {
            velocity.y -= EDGE_NUDGE;
        }
        if self.position.y < EDGE_MARGIN {
            velocity.y += EDGE_NUDGE;
        }
        velocity
    }

    // Draw the bird as a filled square. World coordinates have the origin in
    // the top-left corner with y pointing down; nannou's are centred with y
    // pointing up.
    pub fn draw(&self, draw: &nannou::Draw, viewport: &Viewport) {
        let x = self.position.x - viewport.width / 2.0;
        let y = viewport.height / 2.0 - self.position.y;

        draw.rect()
            .x_y(x, y)
            .w_h(self.size, self.size)
            .color(nannou::color::BLUE);
    }
}
