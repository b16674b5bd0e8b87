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

use std::cmp::Ordering;

use num_traits::Float;

use crate::error::TriangulationError;
use crate::geometry::Point2;

/// Predicate backend used by validation.
///
/// The engine always runs on plain floating point; kernels let callers
/// re-check a finished triangulation with different arithmetic.
pub trait Kernel2 {
    /// Sign of the oriented area of `a`, `b`, `c` (CCW is `Greater`).
    fn orient2d<T: Float>(
        a: &Point2<T>,
        b: &Point2<T>,
        c: &Point2<T>,
    ) -> Result<Ordering, TriangulationError>;

    /// Whether `d` lies strictly inside the circle through the CCW triangle
    /// `a`, `b`, `c`.
    fn in_circle<T: Float>(
        a: &Point2<T>,
        b: &Point2<T>,
        c: &Point2<T>,
        d: &Point2<T>,
    ) -> Result<bool, TriangulationError>;
}
