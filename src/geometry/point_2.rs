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

use std::ops::{Add, Sub};

use num_traits::Float;

use crate::geometry::Vector2;

/// A planar coordinate. Vertex identity is carried by arena indices, so two
/// `Point2` values with equal coordinates are still distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Float> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn from_vals(vals: [T; 2]) -> Self {
        Self {
            x: vals[0],
            y: vals[1],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> Add<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;
    fn add(self, rhs: Vector2<T>) -> Point2<T> {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Float> Sub for Point2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: Point2<T>) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Anything exposing two planar coordinates can be triangulated.
///
/// The engine copies coordinates into its own arena; triangles it returns
/// index back into the caller's slice, so the caller's points are never
/// cloned or moved.
pub trait PlanarPoint {
    type Scalar: Float;

    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;

    fn to_point2(&self) -> Point2<Self::Scalar> {
        Point2::new(self.x(), self.y())
    }
}

impl<T: Float> PlanarPoint for Point2<T> {
    type Scalar = T;

    fn x(&self) -> T {
        self.x
    }
    fn y(&self) -> T {
        self.y
    }
    fn to_point2(&self) -> Point2<T> {
        *self
    }
}

impl<T: Float> PlanarPoint for [T; 2] {
    type Scalar = T;

    fn x(&self) -> T {
        self[0]
    }
    fn y(&self) -> T {
        self[1]
    }
}

impl<T: Float> PlanarPoint for (T, T) {
    type Scalar = T;

    fn x(&self) -> T {
        self.0
    }
    fn y(&self) -> T {
        self.1
    }
}
