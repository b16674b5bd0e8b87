// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Randomly drifting point clouds.
//!
//! Points spawn in a small square around the origin and move with a constant
//! velocity, bouncing off a rectangular boundary. Re-triangulating after every
//! [`DriftingCloud::step`] gives one frame of a moving Delaunay mesh.

use rand::Rng;

use crate::error::TriangulationError;
use crate::geometry::{Point2, Vector2};
use crate::operations::triangulation::config::TriangulationConfig;
use crate::operations::triangulation::delaunay::{Triangulation, triangulate_with};

/// New points are drawn from `[-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT)` on both axes.
pub const SPAWN_HALF_EXTENT: f64 = 25.0;

/// Velocity components are drawn from `[-MAX_SPEED, MAX_SPEED)`.
pub const MAX_SPEED: f64 = 0.125;

/// Rectangle the points bounce inside, centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftBounds {
    pub half_width: f64,
    pub half_height: f64,
}

impl Default for DriftBounds {
    fn default() -> Self {
        DriftBounds {
            half_width: 100.0,
            half_height: 50.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DriftingCloud {
    points: Vec<Point2<f64>>,
    velocities: Vec<Vector2<f64>>,
    bounds: DriftBounds,
}

impl DriftingCloud {
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut cloud = DriftingCloud::from_parts(Vec::new(), DriftBounds::default());
        for _ in 0..n {
            cloud.push_random(rng);
        }
        cloud
    }

    pub fn from_parts(particles: Vec<(Point2<f64>, Vector2<f64>)>, bounds: DriftBounds) -> Self {
        let (points, velocities) = particles.into_iter().unzip();
        DriftingCloud {
            points,
            velocities,
            bounds,
        }
    }

    /// Appends one random point with a random velocity; returns its index.
    pub fn push_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let p = Point2::new(
            rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
            rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
        );
        let v = Vector2::new(
            rng.random_range(-MAX_SPEED..MAX_SPEED),
            rng.random_range(-MAX_SPEED..MAX_SPEED),
        );
        self.push(p, v)
    }

    pub fn push(&mut self, point: Point2<f64>, velocity: Vector2<f64>) -> usize {
        self.points.push(point);
        self.velocities.push(velocity);
        self.points.len() - 1
    }

    /// Advances every point by its velocity. A point that ends up past the
    /// boundary keeps its position and has that velocity component negated.
    pub fn step(&mut self) {
        let DriftBounds {
            half_width,
            half_height,
        } = self.bounds;
        for (p, v) in self.points.iter_mut().zip(self.velocities.iter_mut()) {
            *p = *p + *v;
            if p.x > half_width || p.x < -half_width {
                v.x = -v.x;
            }
            if p.y > half_height || p.y < -half_height {
                v.y = -v.y;
            }
        }
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn velocities(&self) -> &[Vector2<f64>] {
        &self.velocities
    }

    pub fn bounds(&self) -> DriftBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Triangulates the current positions.
    pub fn triangulate(&self) -> Result<Triangulation, TriangulationError> {
        self.triangulate_with(&TriangulationConfig::default())
    }

    pub fn triangulate_with(
        &self,
        config: &TriangulationConfig<f64>,
    ) -> Result<Triangulation, TriangulationError> {
        triangulate_with(&self.points, config)
    }
}
