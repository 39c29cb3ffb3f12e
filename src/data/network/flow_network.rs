//! # Flow networks
//!
//! The input of the maximum flow algorithms: a list of arcs with capacities, together with a
//! designated source and sink.
use std::ops::Range;

use thiserror::Error;

use crate::data::network::{Capacity, Vertex};

/// A directed arc with a capacity, as it appears in the input network.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CapacityArc<C> {
    /// Vertex the arc leaves.
    pub tail: Vertex,
    /// Vertex the arc enters.
    pub head: Vertex,
    /// Maximum amount of flow the arc can carry.
    pub capacity: C,
}

impl<C> CapacityArc<C> {
    /// Create a new arc.
    pub fn new(tail: Vertex, head: Vertex, capacity: C) -> Self {
        Self { tail, head, capacity }
    }
}

impl<C> From<(Vertex, Vertex, C)> for CapacityArc<C> {
    fn from((tail, head, capacity): (Vertex, Vertex, C)) -> Self {
        Self::new(tail, head, capacity)
    }
}

/// A flow network as a set of arcs with capacity.
///
/// Immutable once constructed: the algorithms only read it, so it can be shared between any number
/// of solver runs.
///
/// Self-loops, parallel arcs and arcs with a zero capacity are allowed. A self-loop never carries
/// any flow.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FlowNetwork<C> {
    nr_vertices: usize,
    source: Vertex,
    sink: Vertex,
    arcs: Vec<CapacityArc<C>>,
}

impl<C: Capacity> FlowNetwork<C> {
    /// Create a new flow network.
    ///
    /// # Arguments
    ///
    /// * `nr_vertices`: Number of vertices `n`, vertices are numbered `0..n`.
    /// * `source`: Vertex the flow leaves.
    /// * `sink`: Vertex the flow arrives at.
    /// * `arcs`: The arcs, their order is the order of the arc flows in any computed `Flow`.
    ///
    /// # Errors
    ///
    /// If the source or sink is not a vertex, if they are equal, or if an arc has an endpoint that
    /// is not a vertex.
    pub fn new(
        nr_vertices: usize,
        source: Vertex,
        sink: Vertex,
        arcs: impl IntoIterator<Item = impl Into<CapacityArc<C>>>,
    ) -> Result<Self, NetworkError> {
        if source >= nr_vertices {
            return Err(NetworkError::SourceOutOfRange { vertex: source, nr_vertices });
        }
        if sink >= nr_vertices {
            return Err(NetworkError::SinkOutOfRange { vertex: sink, nr_vertices });
        }
        if source == sink {
            return Err(NetworkError::SourceIsSink(source));
        }

        let arcs = arcs.into_iter().map(Into::into).collect::<Vec<_>>();
        if let Some((arc, vertex)) = arcs.iter().enumerate()
            .flat_map(|(index, arc)| [(index, arc.tail), (index, arc.head)])
            .find(|&(_, vertex)| vertex >= nr_vertices) {
            return Err(NetworkError::VertexOutOfRange { arc, vertex, nr_vertices });
        }

        Ok(Self { nr_vertices, source, sink, arcs })
    }

    /// Number of vertices, `n`.
    pub fn nr_vertices(&self) -> usize {
        self.nr_vertices
    }

    /// Number of arcs, `m`.
    pub fn nr_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// All vertices.
    pub fn vertices(&self) -> Range<Vertex> {
        0..self.nr_vertices
    }

    /// Vertex the flow leaves.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Vertex the flow arrives at.
    pub fn sink(&self) -> Vertex {
        self.sink
    }

    /// The arcs in their original order.
    pub fn arcs(&self) -> &[CapacityArc<C>] {
        &self.arcs
    }
}

/// Structural problems that make a set of arcs unusable as a flow network.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum NetworkError {
    /// The source index is not a vertex.
    #[error("source {vertex} is not a vertex of a network with {nr_vertices} vertices")]
    SourceOutOfRange {
        /// The designated source.
        vertex: Vertex,
        /// Number of vertices in the network.
        nr_vertices: usize,
    },
    /// The sink index is not a vertex.
    #[error("sink {vertex} is not a vertex of a network with {nr_vertices} vertices")]
    SinkOutOfRange {
        /// The designated sink.
        vertex: Vertex,
        /// Number of vertices in the network.
        nr_vertices: usize,
    },
    /// Source and sink coincide.
    #[error("vertex {0} is both the source and the sink")]
    SourceIsSink(Vertex),
    /// An arc leaves or enters something that is not a vertex.
    #[error(
        "arc {arc} has endpoint {vertex}, which is not a vertex of a network with {nr_vertices} \
        vertices"
    )]
    VertexOutOfRange {
        /// Index of the arc in the original order.
        arc: usize,
        /// The offending endpoint.
        vertex: Vertex,
        /// Number of vertices in the network.
        nr_vertices: usize,
    },
}
