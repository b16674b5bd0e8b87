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

//! Incremental Delaunay triangulation with a sentinel supertriangle.
//!
//! # Algorithm
//!
//! 1. Seed the store with a supertriangle enclosing every input point. By
//!    default its vertices sit at infinity (see
//!    [`SuperTriangle::Unbounded`](crate::SuperTriangle::Unbounded)), so the
//!    hull of the input survives step 3 however flat it is.
//! 2. Insert the points one at a time in input order. Each insertion removes
//!    the triangles whose circumcircle contains the point and fans the
//!    boundary of that cavity to the point.
//! 3. Drop every triangle touching a supertriangle vertex.
//!
//! Every insertion scans the whole store, so a full run is quadratic in the
//! number of points.
//!
//! # Degenerate input
//!
//! Coincident, collinear and cocircular points are not detected. The
//! predicates run in plain floating point with no tolerance, and ties are
//! resolved by whatever sign the determinant evaluates to. The result may
//! then depend on input order.
//!
//! A [`SuperTriangle::Fixed`](crate::SuperTriangle::Fixed) supertriangle is
//! finite: a real triangle whose circumcircle reaches one of its corners is
//! replaced by triangles touching that corner and disappears at pruning,
//! leaving hull points uncovered.
//!
//! # Example
//!
//! ```
//! use drift_delaunay::{triangulate, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 4.0),
//! ];
//! let triangulation = triangulate(&points).unwrap();
//! assert_eq!(triangulation.len(), 1);
//! ```

use std::collections::BTreeSet;

use num_traits::Float;
use tracing::debug;

use crate::error::TriangulationError;
use crate::geometry::{Aabb2, CanonicalEdge, PlanarPoint, Point2, Triangle, VertexId};
use crate::kernel::predicates::{orient2d, sort_vertices};
use crate::operations::triangulation::config::TriangulationConfig;
use crate::operations::triangulation::inserter::{InsertionReport, insert_point};
use crate::operations::triangulation::sentinel::{SUPER_VERTEX_COUNT, SentinelFrame};
use crate::operations::triangulation::store::TriangleStore;

const SUPER_VERTICES: [VertexId; SUPER_VERTEX_COUNT] = [0, 1, 2];

/// A finished triangulation. Triangle ids index the caller's point slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    point_count: usize,
}

impl Triangulation {
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of points the triangle ids refer to.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Distinct undirected edges, sorted.
    pub fn edges(&self) -> Vec<CanonicalEdge> {
        let set: BTreeSet<CanonicalEdge> = self.triangles.iter().flat_map(|t| t.edges()).collect();
        set.into_iter().collect()
    }

    /// Point indices referenced by at least one triangle, sorted.
    pub fn used_vertices(&self) -> Vec<VertexId> {
        let set: BTreeSet<VertexId> = self.triangles.iter().flat_map(|t| t.vertices()).collect();
        set.into_iter().collect()
    }

    /// Whether some triangle has exactly these three vertices, in any order.
    pub fn contains(&self, a: VertexId, b: VertexId, c: VertexId) -> bool {
        let key = Triangle::new(a, b, c).as_sorted_indices();
        self.triangles.iter().any(|t| t.as_sorted_indices() == key)
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

impl<'a> IntoIterator for &'a Triangulation {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

/// Triangulates `points` with the default configuration.
///
/// Fails with [`TriangulationError::InvalidInput`] for fewer than three
/// points. Each call recomputes everything from scratch.
pub fn triangulate<P: PlanarPoint>(points: &[P]) -> Result<Triangulation, TriangulationError> {
    triangulate_with(points, &TriangulationConfig::default())
}

/// Triangulates `points` with an explicit configuration.
pub fn triangulate_with<P: PlanarPoint>(
    points: &[P],
    config: &TriangulationConfig<P::Scalar>,
) -> Result<Triangulation, TriangulationError> {
    if points.len() < 3 {
        return Err(TriangulationError::InvalidInput {
            count: points.len(),
        });
    }

    let coords: Vec<Point2<P::Scalar>> = points.iter().map(PlanarPoint::to_point2).collect();
    if config.validate_input {
        if let Some(index) = coords.iter().position(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }
    }

    let Some(bounds) = Aabb2::from_points(&coords) else {
        return Err(TriangulationError::InvalidInput { count: 0 });
    };

    let mut triangulator = Triangulator::new(config.clone(), &bounds);
    triangulator.extend(coords)?;
    let triangulation = triangulator.into_triangulation();

    debug!(
        points = points.len(),
        triangles = triangulation.len(),
        "triangulated point set"
    );
    Ok(triangulation)
}

/// A triangulation that stays live between insertions.
///
/// The store keeps its supertriangle, so further points can be inserted
/// without starting over; [`Triangulator::triangulation`] produces a pruned
/// snapshot at any time.
#[derive(Clone, Debug)]
pub struct Triangulator<T> {
    vertices: Vec<Point2<T>>,
    store: TriangleStore,
    super_triangle: Triangle,
    sentinels: Option<SentinelFrame<T>>,
    validate_input: bool,
}

impl<T: Float> Triangulator<T> {
    /// Creates an empty triangulator whose supertriangle encloses `bounds`
    /// (ignored by [`SuperTriangle::Fixed`](crate::SuperTriangle::Fixed)).
    pub fn new(config: TriangulationConfig<T>, bounds: &Aabb2<T>) -> Self {
        let vertices = config.super_triangle.corners(bounds).to_vec();
        let seed = sort_vertices(Triangle::new(0, 1, 2), &vertices);
        Triangulator {
            vertices,
            store: TriangleStore::seeded(seed),
            super_triangle: seed,
            sentinels: config.super_triangle.frame(bounds),
            validate_input: config.validate_input,
        }
    }

    /// Inserts one point and returns its index among the inserted points.
    pub fn insert(&mut self, point: Point2<T>) -> Result<usize, TriangulationError> {
        self.insert_reporting(point).map(|(index, _)| index)
    }

    /// [`insert`](Self::insert), also returning what the insertion did.
    pub fn insert_reporting(
        &mut self,
        point: Point2<T>,
    ) -> Result<(usize, InsertionReport), TriangulationError> {
        let index = self.len();
        if self.validate_input && !point.is_finite() {
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }
        if !self.encloses(&point) {
            return Err(TriangulationError::OutsideSuperTriangle { index });
        }

        let pid = self.vertices.len();
        self.vertices.push(point);
        let report = insert_point(pid, &self.vertices, self.sentinels.as_ref(), &mut self.store);
        if report.created == 0 {
            debug!(index, "point fell on no circumcircle and was left unconnected");
        }
        Ok((index, report))
    }

    /// Inserts points in iteration order, stopping at the first failure.
    pub fn extend<I>(&mut self, points: I) -> Result<(), TriangulationError>
    where
        I: IntoIterator<Item = Point2<T>>,
    {
        for p in points {
            self.insert(p)?;
        }
        Ok(())
    }

    /// Whether `p` is strictly inside the supertriangle. Always true for a
    /// finite point when the sentinels are at infinity.
    pub fn encloses(&self, p: &Point2<T>) -> bool {
        if self.sentinels.is_some() {
            return p.is_finite();
        }
        let [a, b, c] = self.super_triangle.vertices().map(|v| &self.vertices[v]);
        let zero = T::zero();
        let s = [orient2d(a, b, p), orient2d(b, c, p), orient2d(c, a, p)];
        s.iter().all(|&v| v > zero) || s.iter().all(|&v| v < zero)
    }

    /// Number of inserted points.
    pub fn len(&self) -> usize {
        self.vertices.len() - SUPER_VERTEX_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserted points, in insertion order.
    pub fn points(&self) -> &[Point2<T>] {
        &self.vertices[SUPER_VERTEX_COUNT..]
    }

    /// Arena positions of the supertriangle. Finite anchors only, when the
    /// sentinels are at infinity.
    pub fn super_vertices(&self) -> &[Point2<T>] {
        &self.vertices[..SUPER_VERTEX_COUNT]
    }

    /// The raw store, supertriangle included, in arena ids.
    pub fn store(&self) -> &TriangleStore {
        &self.store
    }

    /// Pruned snapshot of the current state; the live store is untouched.
    pub fn triangulation(&self) -> Triangulation {
        let mut store = self.store.clone();
        store.prune_touching(&SUPER_VERTICES);
        self.finish(store)
    }

    /// Prunes the supertriangle and hands back the result.
    pub fn into_triangulation(mut self) -> Triangulation {
        let pruned = self.store.prune_touching(&SUPER_VERTICES);
        debug!(pruned, "removed triangles touching the supertriangle");
        let store = std::mem::take(&mut self.store);
        self.finish(store)
    }

    fn finish(&self, store: TriangleStore) -> Triangulation {
        Triangulation {
            triangles: store
                .into_vec()
                .into_iter()
                .map(|t| t.map(|v| v - SUPER_VERTEX_COUNT))
                .collect(),
            point_count: self.len(),
        }
    }
}
