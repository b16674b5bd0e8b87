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

use crate::geometry::{CanonicalEdge, VertexId};

/// Three vertex ids in canonical (counter-clockwise) order.
///
/// Inside the engine the ids index the vertex arena; triangles handed back
/// to callers index the caller's own point slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: VertexId,
    pub b: VertexId,
    pub c: VertexId,
}

impl Triangle {
    #[inline]
    pub const fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        Triangle { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [VertexId; 3] {
        [self.a, self.b, self.c]
    }

    /// Directed edges `ab`, `bc`, `ca`.
    #[inline]
    pub fn directed_edges(&self) -> [(VertexId, VertexId); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    pub fn edges(&self) -> [CanonicalEdge; 3] {
        self.directed_edges().map(|(u, v)| CanonicalEdge::new(u, v))
    }

    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    pub fn as_sorted_indices(&self) -> (VertexId, VertexId, VertexId) {
        let mut v = self.vertices();
        v.sort_unstable();
        (v[0], v[1], v[2])
    }

    pub(crate) fn map(self, f: impl Fn(VertexId) -> VertexId) -> Triangle {
        Triangle::new(f(self.a), f(self.b), f(self.c))
    }
}
