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

//! Per-insertion edge bookkeeping for the Bowyer-Watson cavity.
//!
//! Every triangle invalidated by a new point reports its three edges here.
//! An edge reported once lies on the cavity boundary; an edge reported twice
//! is shared by two invalidated triangles and is interior to the cavity.

use ahash::AHashMap;
use smallvec::SmallVec;
use std::collections::hash_map::Entry;
use tracing::trace;

use crate::geometry::{CanonicalEdge, VertexId};

/// Adjacency table `vertex -> [(neighbor, active)]`, recorded from both
/// endpoints of every edge.
#[derive(Debug, Default, Clone)]
pub struct EdgeLedger {
    rows: AHashMap<VertexId, SmallVec<[(VertexId, bool); 6]>>,
    // vertices in first-seen order, so emission order does not depend on hashing
    order: Vec<VertexId>,
}

impl EdgeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        EdgeLedger {
            rows: AHashMap::with_capacity(vertices),
            order: Vec::with_capacity(vertices),
        }
    }

    /// Records one occurrence of the edge `p1`-`p2`.
    ///
    /// The first occurrence marks the pair active in both directions, the
    /// second marks it inactive in both. A valid triangulation never reports
    /// an edge a third time.
    pub fn record(&mut self, p1: VertexId, p2: VertexId) {
        match self.flag(p1, p2).or_else(|| self.flag(p2, p1)) {
            Some(seen_active) => {
                if !seen_active {
                    trace!(p1, p2, "edge reported more than twice");
                }
                self.set(p1, p2, false);
                self.set(p2, p1, false);
            }
            None => {
                self.set(p1, p2, true);
                self.set(p2, p1, true);
            }
        }
    }

    /// Directional flag for `from -> to`, `None` if never recorded.
    pub fn flag(&self, from: VertexId, to: VertexId) -> Option<bool> {
        self.rows
            .get(&from)?
            .iter()
            .find(|(v, _)| *v == to)
            .map(|&(_, active)| active)
    }

    pub fn is_active(&self, p1: VertexId, p2: VertexId) -> bool {
        self.flag(p1, p2).unwrap_or(false)
    }

    pub fn deactivate(&mut self, p1: VertexId, p2: VertexId) {
        self.set(p1, p2, false);
        self.set(p2, p1, false);
    }

    /// Active edges, each once, without consuming them.
    pub fn active_edges(&self) -> Vec<CanonicalEdge> {
        let mut out: Vec<CanonicalEdge> = self
            .rows
            .iter()
            .flat_map(|(&p1, row)| {
                row.iter()
                    .filter(move |&&(p2, active)| active && p1 < p2)
                    .map(move |&(p2, _)| CanonicalEdge::new(p1, p2))
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// Drains the cavity boundary.
    ///
    /// Each active edge is yielded once as `(p1, p2)` with `p1` the endpoint
    /// seen first, and both directions are deactivated as soon as it is
    /// yielded.
    pub fn take_boundary(&mut self) -> Vec<(VertexId, VertexId)> {
        let mut boundary = Vec::new();
        for i in 0..self.order.len() {
            let p1 = self.order[i];
            let row_len = self.rows.get(&p1).map_or(0, |row| row.len());
            for j in 0..row_len {
                let Some(&(p2, active)) = self.rows.get(&p1).and_then(|row| row.get(j)) else {
                    continue;
                };
                if active {
                    boundary.push((p1, p2));
                    self.deactivate(p1, p2);
                }
            }
        }
        boundary
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn set(&mut self, from: VertexId, to: VertexId, active: bool) {
        let row = match self.rows.entry(from) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                self.order.push(from);
                e.insert(SmallVec::new())
            }
        };
        match row.iter_mut().find(|(v, _)| *v == to) {
            Some(slot) => slot.1 = active,
            None => row.push((to, active)),
        }
    }
}
