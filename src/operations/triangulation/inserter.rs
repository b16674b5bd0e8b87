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
use tracing::trace;

use crate::geometry::{Point2, Triangle, VertexId};
use crate::kernel::predicates::{circumcircle_contains, sort_vertices};
use crate::operations::triangulation::ledger::EdgeLedger;
use crate::operations::triangulation::sentinel::{SentinelFrame, is_sentinel};
use crate::operations::triangulation::store::TriangleStore;

/// What one insertion did to the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertionReport {
    /// Triangles whose circumcircle contained the point.
    pub invalidated: usize,
    /// Triangles fanned from the cavity boundary to the point.
    pub created: usize,
}

/// Inserts vertex `pid` (already present in `vertices`) with one
/// Bowyer-Watson step.
///
/// Every stored triangle is tested against the same unmodified store; the
/// invalidated ones are removed only once the scan is over. Their edges go
/// through a fresh [`EdgeLedger`], and each boundary edge is joined to the
/// new vertex.
///
/// With `sentinels` set, triangles touching vertices `0..3` are tested with
/// those vertices at infinity; otherwise the arena positions are used as is.
pub fn insert_point<T: Float>(
    pid: VertexId,
    vertices: &[Point2<T>],
    sentinels: Option<&SentinelFrame<T>>,
    store: &mut TriangleStore,
) -> InsertionReport {
    let p = &vertices[pid];
    let contains = |t: Triangle| match sentinels {
        Some(frame) if t.vertices().into_iter().any(is_sentinel) => {
            frame.circumcircle_contains(t, vertices, p)
        }
        _ => circumcircle_contains(t, vertices, p),
    };

    let invalidated: Vec<usize> = store
        .iter()
        .enumerate()
        .filter(|(_, t)| contains(**t))
        .map(|(i, _)| i)
        .collect();

    let mut ledger = EdgeLedger::with_capacity(invalidated.len() + 2);
    for &i in &invalidated {
        let t = store.as_slice()[i];
        for (u, v) in t.directed_edges() {
            ledger.record(u, v);
        }
    }
    store.remove_marked(&invalidated);

    let boundary = ledger.take_boundary();
    for &(p1, p2) in &boundary {
        store.insert(sort_vertices(Triangle::new(p1, p2, pid), vertices));
    }

    trace!(
        pid,
        invalidated = invalidated.len(),
        created = boundary.len(),
        "inserted vertex"
    );

    InsertionReport {
        invalidated: invalidated.len(),
        created: boundary.len(),
    }
}
