//! # Dinitz-Cherkassky
//!
//! Dinitz' blocking flow algorithm, implemented as recommended by Boris V. Cherkassky. It runs in
//! phases. Each phase computes for every vertex its distance to the sink ("rank") and then
//! saturates a blocking flow using only arcs that lead from a vertex of rank `i + 1` to a vertex of
//! rank `i`.
//!
//! No layered network is built and no arcs are removed: a single depth-first search from the
//! source simply skips arcs that are saturated or don't decrease the rank. Each vertex remembers
//! the arc it is currently exploring, and once the search backtracks over an arc, that arc is not
//! considered again for the remainder of the phase. This bounds the work per phase by `O(nm)`, and
//! since the distance from the source to the sink increases with every phase, there are at most `n`
//! of them.
use log::{debug, trace};

use crate::algorithm::{MaximumFlow, Overflow};
use crate::data::network::{Capacity, FlowNetwork, ResidualNetwork, Vertex};

/// Rank of vertices from which the sink can't be reached.
const UNREACHED: usize = usize::MAX;

/// Solver state for the algorithm of Dinitz and Cherkassky.
#[derive(Debug, Clone)]
pub struct DinitzCherkassky<C> {
    residual: ResidualNetwork<C>,
    /// For each vertex, the index of the first arc that has not been ruled out in this phase.
    current_arc: Vec<usize>,
    /// Distance of each vertex to the sink, in the residual network at the start of the phase.
    rank: Vec<usize>,
    /// Vertices in the order the rank computation discovered them; also used as the queue.
    bfs_ordering: Vec<Vertex>,
    /// Arcs of the path the depth-first search is currently extending, each together with the
    /// smallest residual capacity on the path up to and including that arc.
    path: Vec<(usize, C)>,
}

impl<C: Capacity> DinitzCherkassky<C> {
    /// Compute the distance of each vertex to the sink.
    ///
    /// A single breadth-first search from the sink, following arcs in the reverse direction: the
    /// search moves from `v` to `u` if the residual arc `(u, v)` is not saturated. That arc is the
    /// pair of the arc `(v, u)` in the adjacency list of `v`.
    ///
    /// # Return value
    ///
    /// Whether the sink can be reached from the source.
    fn compute_rank(&mut self) -> bool {
        let sink = self.residual.sink();

        self.rank.fill(UNREACHED);
        self.rank[sink] = 0;
        self.bfs_ordering.clear();
        self.bfs_ordering.push(sink);

        let mut next = 0;
        while let Some(&v) = self.bfs_ordering.get(next) {
            next += 1;

            for index in self.residual.arcs_out(v) {
                let u = self.residual.arc(index).head();
                if self.rank[u] == UNREACHED && self.residual.pair(index).is_residual() {
                    self.rank[u] = self.rank[v] + 1;
                    self.bfs_ordering.push(u);
                }
            }
        }

        self.rank[self.residual.source()] != UNREACHED
    }

    fn reset_current_arc(&mut self) {
        for u in self.residual.vertices() {
            self.current_arc[u] = self.residual.arcs_out(u).start;
        }
    }

    /// Whether flow could be pushed along an arc in this phase.
    fn is_admissible(&self, tail: Vertex, index: usize) -> bool {
        let arc = self.residual.arc(index);
        let head_rank = self.rank[arc.head()];

        arc.is_residual() && head_rank != UNREACHED && self.rank[tail] == head_rank + 1
    }

    /// Find a path of admissible arcs from the source to the sink, and saturate it.
    ///
    /// The search is a depth-first search that continues at the current arc of each vertex. When
    /// no admissible arc is left at a vertex, the search backtracks and the arc that led to that
    /// vertex is skipped from then on.
    ///
    /// # Return value
    ///
    /// The amount of flow pushed, zero if the source has no admissible path to the sink left.
    fn augment(&mut self) -> C {
        let (source, sink) = (self.residual.source(), self.residual.sink());

        self.path.clear();
        let mut u = source;
        while u != sink {
            let end = self.residual.arcs_out(u).end;
            while self.current_arc[u] < end && !self.is_admissible(u, self.current_arc[u]) {
                self.current_arc[u] += 1;
            }

            if self.current_arc[u] < end {
                // Advance
                let index = self.current_arc[u];
                let arc = self.residual.arc(index);
                let bound = self.path.last().map_or(arc.residual_capacity(), |&(_, bound)| bound);
                self.path.push((index, bound.min(arc.residual_capacity())));
                u = arc.head();
            } else {
                // Retreat, `u` is a dead end for the rest of this phase
                match self.path.pop() {
                    Some((index, _)) => {
                        u = self.residual.tail(index);
                        self.current_arc[u] += 1;
                    }
                    None => return C::zero(),
                }
            }
        }

        let bottleneck = self.path.last().map_or(C::zero(), |&(_, bound)| bound);
        for &(index, _) in &self.path {
            self.residual.push_flow(index, bottleneck);
        }
        trace!("Pushed {bottleneck} along a path of {} arcs", self.path.len());

        bottleneck
    }
}

impl<C: Capacity> MaximumFlow<C> for DinitzCherkassky<C> {
    fn new(network: &FlowNetwork<C>) -> Self {
        let residual = ResidualNetwork::new(network);
        let current_arc = residual.vertices().map(|u| residual.arcs_out(u).start).collect();

        Self {
            residual,
            current_arc,
            rank: vec![UNREACHED; network.nr_vertices()],
            bfs_ordering: Vec::with_capacity(network.nr_vertices()),
            path: Vec::new(),
        }
    }

    fn saturate(&mut self) -> Result<C, Overflow> {
        let mut value = C::zero();
        let mut nr_phases = 0_usize;

        while self.compute_rank() {
            nr_phases += 1;
            self.reset_current_arc();

            let mut phase_value = C::zero();
            loop {
                let pushed = self.augment();
                if pushed.is_zero() {
                    break;
                }
                phase_value = phase_value.checked_add(&pushed).ok_or(Overflow)?;
            }
            value = value.checked_add(&phase_value).ok_or(Overflow)?;

            debug!(
                "Phase {nr_phases}: distance {} from source to sink, pushed {phase_value}, \
                flow value {value}",
                self.rank[self.residual.source()],
            );
        }

        debug!("Dinitz-Cherkassky: {nr_phases} phases, flow value {value}");
        Ok(value)
    }

    fn residual_network(&self) -> &ResidualNetwork<C> {
        &self.residual
    }
}
