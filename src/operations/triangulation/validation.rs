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

//! Checks a finished triangulation against the properties the engine
//! guarantees for non-degenerate input.

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::error::TriangulationError;
use crate::geometry::{CanonicalEdge, PlanarPoint, Point2, Triangle, VertexId};
use crate::kernel::f64_kernel::F64Kernel;
use crate::kernel::kernel::Kernel2;
use crate::kernel::predicates::sort_vertices;
use crate::operations::triangulation::delaunay::Triangulation;

/// A single broken property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A triangle references a point that does not exist.
    IndexOutOfRange { triangle: Triangle },
    /// `point` lies strictly inside the circumcircle of `triangle`.
    EmptyCircumcircle { triangle: Triangle, point: VertexId },
    /// No triangle uses `point`.
    UncoveredPoint { point: VertexId },
    /// More than two triangles share `edge`.
    OverSharedEdge { edge: CanonicalEdge, count: usize },
    /// Re-sorting the triangle changes it.
    NonCanonical { triangle: Triangle },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// True when no circumcircle contains a foreign point.
    pub fn is_delaunay(&self) -> bool {
        !self
            .violations
            .iter()
            .any(|v| matches!(v, Violation::EmptyCircumcircle { .. }))
    }
}

/// Validates with the same floating-point predicates the engine uses.
pub fn validate<P: PlanarPoint>(
    points: &[P],
    triangulation: &Triangulation,
) -> Result<ValidationReport, TriangulationError> {
    validate_with::<F64Kernel, P>(points, triangulation)
}

/// Validates with the predicates of kernel `K`.
pub fn validate_with<K: Kernel2, P: PlanarPoint>(
    points: &[P],
    triangulation: &Triangulation,
) -> Result<ValidationReport, TriangulationError> {
    let coords: Vec<Point2<P::Scalar>> = points.iter().map(PlanarPoint::to_point2).collect();
    let mut violations = Vec::new();
    let mut covered = vec![false; coords.len()];
    let mut edge_uses: AHashMap<CanonicalEdge, usize> = AHashMap::default();

    for &t in triangulation.iter() {
        if t.vertices().iter().any(|&v| v >= coords.len()) {
            violations.push(Violation::IndexOutOfRange { triangle: t });
            continue;
        }
        for v in t.vertices() {
            covered[v] = true;
        }
        for e in t.edges() {
            *edge_uses.entry(e).or_insert(0) += 1;
        }

        let canonical = sort_vertices(t, &coords);
        if canonical != t {
            violations.push(Violation::NonCanonical { triangle: t });
        }

        let (a, b, c) = (
            &coords[canonical.a],
            &coords[canonical.b],
            &coords[canonical.c],
        );
        for (i, p) in coords.iter().enumerate() {
            if t.contains_vertex(i) {
                continue;
            }
            if K::in_circle(a, b, c, p)? {
                violations.push(Violation::EmptyCircumcircle {
                    triangle: t,
                    point: i,
                });
            }
        }
    }

    violations.extend(
        covered
            .iter()
            .enumerate()
            .filter(|(_, c)| !**c)
            .map(|(point, _)| Violation::UncoveredPoint { point }),
    );

    let mut over_shared: Vec<(CanonicalEdge, usize)> = edge_uses
        .into_iter()
        .filter(|&(_, count)| count > 2)
        .collect();
    over_shared.sort_unstable();
    let over_shared = over_shared
        .into_iter()
        .map(|(edge, count)| Violation::OverSharedEdge { edge, count });
    violations.extend(over_shared);

    for v in &violations {
        warn!(violation = ?v, "triangulation property violated");
    }
    debug!(
        triangles = triangulation.len(),
        points = coords.len(),
        violations = violations.len(),
        "validated triangulation"
    );

    Ok(ValidationReport { violations })
}
