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

use crate::geometry::{Triangle, VertexId};

/// The current triangle set. Membership is what matters; the order is
/// insertion order and carries no meaning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleStore {
    triangles: Vec<Triangle>,
}

impl TriangleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: Triangle) -> Self {
        TriangleStore {
            triangles: vec![seed],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub fn as_slice(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn contains(&self, t: &Triangle) -> bool {
        self.triangles.contains(t)
    }

    pub fn insert(&mut self, t: Triangle) {
        self.triangles.push(t);
    }

    /// Removes the triangles at `marked` positions (as of before the call).
    pub fn remove_marked(&mut self, marked: &[usize]) {
        if marked.is_empty() {
            return;
        }
        let mut keep = vec![true; self.triangles.len()];
        for &i in marked {
            if let Some(k) = keep.get_mut(i) {
                *k = false;
            }
        }
        let mut pos = 0;
        self.triangles.retain(|_| {
            let k = keep[pos];
            pos += 1;
            k
        });
    }

    /// Drops every triangle that references one of `sentinels`; returns how
    /// many were dropped.
    pub fn prune_touching(&mut self, sentinels: &[VertexId]) -> usize {
        let before = self.triangles.len();
        self.triangles
            .retain(|t| !sentinels.iter().any(|&s| t.contains_vertex(s)));
        before - self.triangles.len()
    }

    pub fn into_vec(self) -> Vec<Triangle> {
        self.triangles
    }
}

impl<'a> IntoIterator for &'a TriangleStore {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
