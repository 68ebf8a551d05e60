/*
 * Neighbourhood Module
 *
 * A transient per-bird view of the flock, rebuilt from scratch for every
 * bird on every tick and discarded as soon as that bird has updated. It
 * accumulates running sums instead of holding references to the member
 * birds, which keeps the O(n^2) neighbour scan allocation-free.
 */

use crate::vector::Vector3;

// The nearest member of a neighbourhood other than the bird it was built for.
#[derive(Clone, Copy, Debug)]
pub struct ClosestNeighbour {
    pub position: Vector3,
    pub distance: f32,
}

#[derive(Debug, Default)]
pub struct Neighbourhood {
    count: usize,
    position_sum: Vector3,
    velocity_sum: Vector3,
    closest: Option<ClosestNeighbour>,
}

impl Neighbourhood {
    pub fn new() -> Self {
        Self::default()
    }

    // Record a member. `is_self` marks the bird the neighbourhood is being
    // built for; it contributes to the averages but never counts as its own
    // closest neighbour.
    pub fn add_member(&mut self, position: Vector3, velocity: Vector3, distance: f32, is_self: bool) {
        self.count += 1;
        self.position_sum = self.position_sum + position;
        self.velocity_sum = self.velocity_sum + velocity;

        if !is_self && self.closest.map_or(true, |c| distance < c.distance) {
            self.closest = Some(ClosestNeighbour { position, distance });
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    // Every bird is a member of its own neighbourhood, so by the time a bird
    // reads the averages the count is at least one.
    pub fn average_position(&self) -> Vector3 {
        assert!(self.count > 0, "averages of an empty neighbourhood");
        self.position_sum * (1.0 / self.count as f32)
    }

    pub fn average_velocity(&self) -> Vector3 {
        assert!(self.count > 0, "averages of an empty neighbourhood");
        self.velocity_sum * (1.0 / self.count as f32)
    }

    pub fn closest_neighbour(&self) -> Option<&ClosestNeighbour> {
        self.closest.as_ref()
    }
}
