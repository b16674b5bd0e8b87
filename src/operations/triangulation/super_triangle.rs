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

use num_traits::Float;

use crate::geometry::{Aabb2, Point2};
use crate::numeric::lit;
use crate::operations::triangulation::sentinel::SentinelFrame;

/// Where the three sentinel vertices go.
#[derive(Clone, Debug, PartialEq)]
pub enum SuperTriangle<T> {
    /// Sentinels at infinity along the rays of an equilateral triangle
    /// around the input. Encloses every finite point.
    Unbounded,
    /// Caller-chosen finite corners. Every point must lie strictly inside,
    /// and a real triangle whose circumcircle reaches a corner is lost at
    /// pruning time.
    Fixed([Point2<T>; 3]),
}

impl<T: Float> SuperTriangle<T> {
    /// The fixed corners used by the drifting-point visualization:
    /// `(0, 1000)`, `(-1000, -1000)`, `(1000, -1000)`.
    pub fn classic() -> Self {
        SuperTriangle::Fixed([
            Point2::new(T::zero(), lit(1000.0)),
            Point2::new(lit(-1000.0), lit(-1000.0)),
            Point2::new(lit(1000.0), lit(-1000.0)),
        ])
    }

    /// Arena positions of the three sentinels for input bounded by `bounds`.
    pub fn corners(&self, bounds: &Aabb2<T>) -> [Point2<T>; 3] {
        match self {
            SuperTriangle::Fixed(corners) => *corners,
            SuperTriangle::Unbounded => SentinelFrame::enclosing(bounds).anchors(),
        }
    }

    /// The symbolic frame, for the unbounded variant only.
    pub fn frame(&self, bounds: &Aabb2<T>) -> Option<SentinelFrame<T>> {
        match self {
            SuperTriangle::Fixed(_) => None,
            SuperTriangle::Unbounded => Some(SentinelFrame::enclosing(bounds)),
        }
    }
}

impl<T> Default for SuperTriangle<T> {
    fn default() -> Self {
        SuperTriangle::Unbounded
    }
}
