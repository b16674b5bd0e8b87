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
use crate::kernel::kernel::Kernel2;
use crate::kernel::predicates;

/// Native floating point, identical to what the engine evaluates.
pub struct F64Kernel;

impl Kernel2 for F64Kernel {
    fn orient2d<T: Float>(
        a: &Point2<T>,
        b: &Point2<T>,
        c: &Point2<T>,
    ) -> Result<Ordering, TriangulationError> {
        Ok(predicates::orient2d(a, b, c)
            .partial_cmp(&T::zero())
            .unwrap_or(Ordering::Equal))
    }

    fn in_circle<T: Float>(
        a: &Point2<T>,
        b: &Point2<T>,
        c: &Point2<T>,
        d: &Point2<T>,
    ) -> Result<bool, TriangulationError> {
        Ok(predicates::in_circle(a, b, c, d))
    }
}
