//! # Residual networks
//!
//! Every arc of a flow network appears twice in its residual network: once in the original
//! direction, with the capacity that is still left, and once in the opposite direction, with the
//! amount of flow that could be cancelled. The two copies are each other's *pair*.
//!
//! All arcs live in a single arena, grouped by tail vertex ("glued" adjacency lists). Arcs refer to
//! their pair by arena index, and the arena is a boxed slice, so those indices stay valid for the
//! lifetime of the network.
use std::iter::once;
use std::ops::Range;

use crate::data::network::{Capacity, FlowNetwork, Vertex};

/// An arc in a residual network.
///
/// The residual capacity is the amount of flow that can still be pushed along the arc.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ResidualArc<C> {
    head: Vertex,
    residual_capacity: C,
    pair: usize,
}

impl<C: Capacity> ResidualArc<C> {
    /// Vertex the arc enters.
    pub fn head(&self) -> Vertex {
        self.head
    }

    /// Amount of flow that can still be pushed along this arc.
    pub fn residual_capacity(&self) -> C {
        self.residual_capacity
    }

    /// Arena index of the arc running in the opposite direction.
    pub fn pair(&self) -> usize {
        self.pair
    }

    /// No flow can be pushed along this arc anymore.
    pub fn is_saturated(&self) -> bool {
        self.residual_capacity.is_zero()
    }

    /// Some flow can still be pushed along this arc.
    pub fn is_residual(&self) -> bool {
        !self.is_saturated()
    }
}

/// Residual network with all adjacency lists stored contiguously in one arena.
///
/// Built once from a `FlowNetwork`, after which only residual capacities change, through
/// `push_flow`. The outgoing arcs of vertex `u` are `arcs[first_out[u]..first_out[u + 1]]`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResidualNetwork<C> {
    source: Vertex,
    sink: Vertex,
    /// The "glued" adjacency lists, two arcs for each arc of the original network.
    arcs: Box<[ResidualArc<C>]>,
    /// Start of each vertex' adjacency list, followed by the total number of arcs.
    first_out: Box<[usize]>,
}

impl<C: Capacity> ResidualNetwork<C> {
    /// Derive the residual network of the zero flow.
    ///
    /// Within the adjacency list of a vertex, the arcs appear in the order in which the arcs they
    /// were derived from appear in `network`. `Flow::extract` relies on this.
    ///
    /// Memory use is linear in the number of vertices and arcs; the number of vertices of
    /// `network` is trusted.
    pub fn new(network: &FlowNetwork<C>) -> Self {
        let nr_vertices = network.nr_vertices();

        // Out degrees, counting the reversed copy of an arc at its head
        let mut degree_out = vec![0; nr_vertices];
        for arc in network.arcs() {
            degree_out[arc.tail] += 1;
            degree_out[arc.head] += 1;
        }

        let first_out = once(0)
            .chain(degree_out.iter().scan(0, |total, degree| {
                *total += degree;
                Some(*total)
            }))
            .collect::<Box<[_]>>();
        debug_assert_eq!(first_out[nr_vertices], 2 * network.nr_arcs());

        // Fill the adjacency lists
        let placeholder = ResidualArc { head: 0, residual_capacity: C::zero(), pair: 0 };
        let mut arcs = vec![placeholder; 2 * network.nr_arcs()].into_boxed_slice();
        let mut next_free = first_out[..nr_vertices].to_vec();
        for arc in network.arcs() {
            let forward = next_free[arc.tail];
            next_free[arc.tail] += 1;
            let backward = next_free[arc.head];
            next_free[arc.head] += 1;

            arcs[forward] = ResidualArc {
                head: arc.head,
                residual_capacity: arc.capacity,
                pair: backward,
            };
            arcs[backward] = ResidualArc {
                head: arc.tail,
                residual_capacity: C::zero(),
                pair: forward,
            };
        }
        debug_assert!(network.vertices().all(|u| next_free[u] == first_out[u + 1]));

        Self {
            source: network.source(),
            sink: network.sink(),
            arcs,
            first_out,
        }
    }

    /// Number of vertices.
    pub fn nr_vertices(&self) -> usize {
        self.first_out.len() - 1
    }

    /// Number of arcs, twice the number of arcs in the original network.
    pub fn nr_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// All vertices.
    pub fn vertices(&self) -> Range<Vertex> {
        0..self.nr_vertices()
    }

    /// Vertex the flow leaves.
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Vertex the flow arrives at.
    pub fn sink(&self) -> Vertex {
        self.sink
    }

    /// Arena indices of the arcs leaving a vertex.
    pub fn arcs_out(&self, vertex: Vertex) -> Range<usize> {
        debug_assert!(vertex < self.nr_vertices());

        self.first_out[vertex]..self.first_out[vertex + 1]
    }

    /// Number of arcs leaving a vertex, including the reversed copies.
    pub fn degree_out(&self, vertex: Vertex) -> usize {
        self.arcs_out(vertex).len()
    }

    /// Arc by arena index.
    pub fn arc(&self, index: usize) -> &ResidualArc<C> {
        &self.arcs[index]
    }

    /// The arc running in the opposite direction.
    pub fn pair(&self, index: usize) -> &ResidualArc<C> {
        &self.arcs[self.arcs[index].pair]
    }

    /// Vertex an arc leaves, the head of its pair.
    pub fn tail(&self, index: usize) -> Vertex {
        self.pair(index).head
    }

    /// Push flow along an arc.
    ///
    /// The residual capacity of the arc decreases by `flow`, that of its pair increases by `flow`.
    /// The sum of both residual capacities is the capacity of the original arc, so neither can
    /// overflow.
    pub fn push_flow(&mut self, index: usize, flow: C) {
        debug_assert!(flow <= self.arcs[index].residual_capacity);

        let pair = self.arcs[index].pair;
        self.arcs[index].residual_capacity = self.arcs[index].residual_capacity - flow;
        self.arcs[pair].residual_capacity = self.arcs[pair].residual_capacity + flow;
    }
}
