/*
 * Flock Module
 *
 * Owns the birds and drives one simulation step per tick. Each tick scans
 * the whole flock once per bird to build that bird's neighbourhood, so a
 * tick costs O(n^2); there is deliberately no spatial index. Birds are
 * updated in index order, and a neighbourhood built later in a tick sees
 * the already-moved state of birds updated earlier in the same tick.
 */

use crate::bird::Bird;
use crate::neighbourhood::Neighbourhood;
use crate::params::SimulationParams;
use crate::{Viewport, BIRD_SIZE};

pub struct Flock {
    birds: Vec<Bird>,
    neighbourhood_radius: f32,
}

impl Flock {
    // All birds start at the spawn point with zero velocity. The flock size
    // is fixed for the lifetime of the simulation.
    pub fn new(count: usize, neighbourhood_radius: f32, spawn_x: f32, spawn_y: f32) -> Self {
        let birds = (0..count)
            .map(|_| Bird::new(BIRD_SIZE, spawn_x, spawn_y))
            .collect();

        Self {
            birds,
            neighbourhood_radius,
        }
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn len(&self) -> usize {
        self.birds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birds.is_empty()
    }

    // Advance every bird by one simulation step.
    pub fn tick(&mut self, params: &SimulationParams, viewport: &Viewport) {
        for index in 0..self.birds.len() {
            let neighbourhood = self.neighbourhood_of(index);
            self.birds[index].update(&neighbourhood, params, viewport);
        }
    }

    // Membership is every bird strictly inside the radius, the bird itself
    // included (it is at distance zero), so the neighbourhood is never
    // empty. Distances are measured in the XY plane. Birds are told apart by
    // index, not by position, so stacked birds still see each other.
    fn neighbourhood_of(&self, index: usize) -> Neighbourhood {
        let bird = &self.birds[index];
        let mut neighbourhood = Neighbourhood::new();

        for (other_index, other) in self.birds.iter().enumerate() {
            let distance = bird.position.planar_distance(other.position);
            if distance < self.neighbourhood_radius {
                neighbourhood.add_member(
                    other.position,
                    other.velocity,
                    distance,
                    other_index == index,
                );
            }
        }

        neighbourhood
    }
}

#[cfg(test)]
mod tests {
    use super::Flock;
    use crate::params::SimulationParams;
    use crate::vector::Vector3;
    use crate::{Viewport, CRUISING_SPEED};

    // Large enough that edge avoidance never fires in these tests.
    fn open_sky() -> Viewport {
        Viewport::new(2000.0, 2000.0)
    }

    #[test]
    fn every_bird_is_in_its_own_neighbourhood() {
        let flock = Flock::new(1, 0.001, 100.0, 100.0);
        assert_eq!(flock.neighbourhood_of(0).len(), 1);
    }

    #[test]
    fn membership_is_strictly_inside_the_radius() {
        let mut flock = Flock::new(2, 100.0, 0.0, 0.0);

        flock.birds[1].position = Vector3::new(100.0, 0.0, 0.0);
        assert_eq!(flock.neighbourhood_of(0).len(), 1);

        flock.birds[1].position = Vector3::new(99.0, 0.0, 0.0);
        assert_eq!(flock.neighbourhood_of(0).len(), 2);
    }

    #[test]
    fn neighbourhoods_aggregate_only_nearby_birds() {
        let mut flock = Flock::new(3, 100.0, 0.0, 0.0);
        flock.birds[1].position = Vector3::new(30.0, 40.0, 0.0);
        flock.birds[2].position = Vector3::new(300.0, 0.0, 0.0);

        let hood = flock.neighbourhood_of(0);
        assert_eq!(hood.len(), 2);
        assert_eq!(hood.average_position(), Vector3::new(15.0, 20.0, 0.0));

        let closest = hood.closest_neighbour().unwrap();
        assert_eq!(closest.distance, 50.0);
        assert_eq!(closest.position, Vector3::new(30.0, 40.0, 0.0));
    }

    #[test]
    fn flock_size_is_constant_across_ticks() {
        let params = SimulationParams::default();
        let viewport = open_sky();
        let mut flock = Flock::new(30, 200.0, 1000.0, 1000.0);

        for _ in 0..5 {
            flock.tick(&params, &viewport);
        }

        assert_eq!(flock.len(), 30);
    }

    // Two birds spawned on the same spot, each the other's only neighbour,
    // reference factor values: one tick sends both off at cruising speed.
    #[test]
    fn one_tick_sets_every_bird_moving_at_cruising_speed() {
        let params = SimulationParams::default();
        let viewport = open_sky();
        let mut flock = Flock::new(2, 200.0, 1000.0, 1000.0);

        flock.tick(&params, &viewport);

        for bird in flock.birds() {
            assert!((bird.velocity.length() - CRUISING_SPEED).abs() < 1.0e-4);

            // Each bird moved by exactly its own new velocity.
            let expected = Vector3::new(1000.0, 1000.0, 0.0) + bird.velocity;
            assert!((bird.position - expected).length() < 1.0e-4);
        }
    }

    #[test]
    fn later_neighbourhoods_see_birds_already_moved_this_tick() {
        let mut flock = Flock::new(2, 200.0, 1000.0, 1000.0);

        // Move the first bird by hand; the second bird's neighbourhood must
        // reflect the moved position immediately.
        flock.birds[0].position = Vector3::new(1010.0, 1000.0, 0.0);
        let hood = flock.neighbourhood_of(1);
        assert_eq!(hood.average_position(), Vector3::new(1005.0, 1000.0, 0.0));
    }
}
