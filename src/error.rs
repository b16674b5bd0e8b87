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

//! Error types for triangulation operations.

use thiserror::Error;

/// Errors raised by the triangulation engine and its validators.
///
/// Geometric degeneracy (coincident, collinear or cocircular points) is not
/// an error: those inputs produce whatever the predicates decide.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// Fewer than three points were supplied.
    #[error("invalid input: a triangulation needs at least 3 points, got {count}")]
    InvalidInput {
        /// Number of points supplied.
        count: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point in the caller's sequence.
        index: usize,
    },

    /// A point does not lie strictly inside the supertriangle.
    #[error("point {index} lies outside the supertriangle")]
    OutsideSuperTriangle {
        /// Index of the offending point in the caller's sequence.
        index: usize,
    },

    /// A coordinate could not be lifted into the exact kernel.
    #[error("coordinate {value} cannot be represented exactly")]
    Unrepresentable {
        /// The rejected value.
        value: f64,
    },
}
