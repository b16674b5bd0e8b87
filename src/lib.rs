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

//! Incremental Delaunay triangulation of moving planar point sets.
//!
//! The engine is the classic Bowyer-Watson scheme: a sentinel supertriangle,
//! an in-circle scan per inserted point, cavity retriangulation from the
//! boundary edges, and a final prune of everything touching the sentinel.
//! Points are owned by the caller; triangles refer to them by index.

pub mod error;
pub mod geometry;
pub mod kernel;
pub(crate) mod numeric;
pub mod operations;
pub mod sampling;

pub use error::TriangulationError;
pub use geometry::{Aabb2, CanonicalEdge, PlanarPoint, Point2, Triangle, Vector2, VertexId};
pub use operations::triangulation::{
    SuperTriangle, Triangulation, TriangulationConfig, Triangulator, triangulate,
    triangulate_with, validate,
};
