//! The two vertex states and total assignments of them.

use std::fmt;

use crate::{Error, Result, VertexId};

/// The state held by a vertex.
///
/// `Glory` is the hub's allegiance and wins ties. The derived ordering puts
/// `Gnash < Glory`, so "more Glory" compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    Gnash,
    Glory,
}

impl State {
    /// The opposing state.
    pub const fn other(self) -> Self {
        match self {
            State::Glory => State::Gnash,
            State::Gnash => State::Glory,
        }
    }

    pub const fn is_glory(self) -> bool {
        matches!(self, State::Glory)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Glory => f.write_str("Glory"),
            State::Gnash => f.write_str("Gnash"),
        }
    }
}

/// A total assignment of every vertex to a [`State`].
///
/// The length is fixed at construction. Reads and writes are bounds-checked
/// and fail with [`Error::OutOfRange`] instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateVector {
    states: Vec<State>,
}

impl StateVector {
    /// Every vertex in the same state.
    pub fn uniform(len: usize, state: State) -> Self {
        Self {
            states: vec![state; len],
        }
    }

    /// The canonical sweep starting point: hub in `Glory`, everyone else in `Gnash`.
    pub fn initial(len: usize, hub: VertexId) -> Result<Self> {
        let mut s = Self::uniform(len, State::Gnash);
        s.set(hub, State::Glory)?;
        Ok(s)
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of `v`.
    pub fn get(&self, v: VertexId) -> Result<State> {
        self.states
            .get(v.index())
            .copied()
            .ok_or(Error::OutOfRange {
                vertex: v.index(),
                vertex_count: self.states.len(),
            })
    }

    /// Overwrite the state of `v`.
    pub fn set(&mut self, v: VertexId, state: State) -> Result<()> {
        let vertex_count = self.states.len();
        let slot = self.states.get_mut(v.index()).ok_or(Error::OutOfRange {
            vertex: v.index(),
            vertex_count,
        })?;
        *slot = state;
        Ok(())
    }

    /// How many vertices hold `state`.
    pub fn count(&self, state: State) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Iterate `(vertex, state)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(i, &s)| (VertexId::new(i), s))
    }

    pub fn as_slice(&self) -> &[State] {
        &self.states
    }
}

impl From<Vec<State>> for StateVector {
    fn from(states: Vec<State>) -> Self {
        Self { states }
    }
}
