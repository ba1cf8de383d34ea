//! Dense weighted digraph with a distinguished hub vertex.
//!
//! Weights are stored row-major: `w[u][v]` is the influence `u` exerts on
//! `v`. Scoring a vertex walks its incoming column.

use std::fmt;

use crate::{Error, Result, StateVector, Weight};

/// Index of a vertex in `[0, vertex_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VertexId(pub usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Weighted adjacency matrix plus the hub index.
///
/// The hub is fixed for the lifetime of the graph. Apart from construction,
/// the only mutation is [`Graph::set_hub_weight`], which rewrites the hub's
/// outgoing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    hub: VertexId,
    weights: Vec<Weight>,
}

impl Graph {
    /// An edgeless graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize, hub: VertexId) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::EmptyGraph);
        }
        if hub.index() >= vertex_count {
            return Err(Error::HubOutOfRange {
                hub: hub.index(),
                vertex_count,
            });
        }
        let cells = vertex_count
            .checked_mul(vertex_count)
            .ok_or(Error::TooManyVertices(vertex_count))?;
        Ok(Self {
            vertex_count,
            hub,
            weights: vec![0; cells],
        })
    }

    /// Build from an explicit square matrix, `rows[u][v] = w[u][v]`.
    pub fn from_rows(rows: &[Vec<Weight>], hub: VertexId) -> Result<Self> {
        let mut graph = Self::new(rows.len(), hub)?;
        for (u, row) in rows.iter().enumerate() {
            if row.len() != rows.len() {
                return Err(Error::NotSquare {
                    row: u,
                    len: row.len(),
                    expected: rows.len(),
                });
            }
            let start = u * graph.vertex_count;
            graph.weights[start..start + row.len()].copy_from_slice(row);
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn hub(&self) -> VertexId {
        self.hub
    }

    pub fn is_hub(&self, v: VertexId) -> bool {
        v == self.hub
    }

    /// Fail with [`Error::OutOfRange`] unless `v` is a vertex of this graph.
    pub fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v.index() < self.vertex_count {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex: v.index(),
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Fail with [`Error::InvalidState`] unless `s` covers exactly this graph's vertices.
    pub fn check_state(&self, s: &StateVector) -> Result<()> {
        if s.len() == self.vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidState {
                expected: self.vertex_count,
                actual: s.len(),
            })
        }
    }

    /// Weight of the edge `u -> v`.
    pub fn weight(&self, u: VertexId, v: VertexId) -> Result<Weight> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.weights[u.index() * self.vertex_count + v.index()])
    }

    /// Set the weight of the edge `u -> v`. Used by generators and fixtures.
    pub fn set_weight(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.weights[u.index() * self.vertex_count + v.index()] = weight;
        Ok(())
    }

    /// Uniform hub broadcast: `w[hub][v] = weight` for every non-hub `v`.
    pub fn set_hub_weight(&mut self, weight: Weight) {
        let start = self.hub.index() * self.vertex_count;
        let hub = self.hub.index();
        for (v, w) in self.weights[start..start + self.vertex_count]
            .iter_mut()
            .enumerate()
        {
            if v != hub {
                *w = weight;
            }
        }
    }

    /// Incoming column of `v`: `(u, w[u][v])` for every vertex `u`.
    pub fn incoming(&self, v: VertexId) -> Result<impl Iterator<Item = (VertexId, Weight)> + '_> {
        self.check_vertex(v)?;
        let n = self.vertex_count;
        Ok((0..n).map(move |u| (VertexId::new(u), self.weights[u * n + v.index()])))
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count).map(VertexId::new)
    }

    /// All vertices except the hub, in index order.
    pub fn non_hubs(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices().filter(move |&v| v != self.hub)
    }

    /// Number of non-hub vertices, `V - 1`.
    pub fn non_hub_count(&self) -> usize {
        self.vertex_count - 1
    }

    /// Number of edges with non-zero weight.
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }
}
