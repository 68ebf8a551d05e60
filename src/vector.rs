/*
 * Vector Module
 *
 * Minimal 3D vector value type used throughout the simulation. The motion is
 * planar (z stays zero everywhere) but the type carries a z component so the
 * maths would extend to 3D without touching call sites.
 */

use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    // Euclidean distance in the XY plane; z is ignored because birds never
    // leave the plane.
    pub fn planar_distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    // Total: the zero vector normalises to itself instead of dividing by zero.
    pub fn normalised(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / length, self.y / length, self.z / length)
    }

    // Componentwise mean. Callers must pass at least one vector.
    pub fn average(vectors: &[Self]) -> Self {
        assert!(!vectors.is_empty(), "average of an empty set of vectors");
        let sum = vectors.iter().fold(Self::ZERO, |acc, &v| acc + v);
        sum * (1.0 / vectors.len() as f32)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
