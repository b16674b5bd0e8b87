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

use crate::operations::triangulation::super_triangle::SuperTriangle;

/// Knobs for a triangulation run.
///
/// ```
/// use drift_delaunay::{SuperTriangle, TriangulationConfig};
///
/// let config = TriangulationConfig::<f64>::default()
///     .with_super_triangle(SuperTriangle::classic())
///     .with_input_validation(false);
/// assert!(!config.validate_input);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TriangulationConfig<T> {
    pub super_triangle: SuperTriangle<T>,
    /// Reject NaN and infinite coordinates before inserting anything.
    pub validate_input: bool,
}

impl<T: Float> Default for TriangulationConfig<T> {
    fn default() -> Self {
        TriangulationConfig {
            super_triangle: SuperTriangle::default(),
            validate_input: true,
        }
    }
}

impl<T: Float> TriangulationConfig<T> {
    pub fn with_super_triangle(mut self, super_triangle: SuperTriangle<T>) -> Self {
        self.super_triangle = super_triangle;
        self
    }

    pub fn with_input_validation(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }
}
