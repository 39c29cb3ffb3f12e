//! # Edmonds-Karp
//!
//! The Ford-Fulkerson method, always augmenting along a shortest path. Paths are found with a
//! breadth-first search from the source, so that the distance from the source to the sink never
//! decreases and at most `O(nm)` augmentations are needed, each costing `O(m)`.
use std::iter::successors;

use log::{debug, trace};

use crate::algorithm::{MaximumFlow, Overflow};
use crate::data::network::{Capacity, FlowNetwork, ResidualNetwork, Vertex};

/// Solver state for the algorithm of Edmonds and Karp.
///
/// The search buffers are kept between iterations to avoid reallocating them.
#[derive(Debug, Clone)]
pub struct EdmondsKarp<C> {
    residual: ResidualNetwork<C>,
    /// Vertices in the order the search discovered them; also used as the queue.
    bfs_ordering: Vec<Vertex>,
    /// Arc through which the search reached each vertex.
    predecessor: Vec<Option<usize>>,
}

impl<C: Capacity> EdmondsKarp<C> {
    /// Breadth-first search from the source, stopping as soon as the sink is reached.
    ///
    /// # Return value
    ///
    /// Whether the sink is reachable. If so, the predecessor arcs describe a shortest path.
    fn find_augmenting_path(&mut self) -> bool {
        let (source, sink) = (self.residual.source(), self.residual.sink());

        self.predecessor.fill(None);
        self.bfs_ordering.clear();
        self.bfs_ordering.push(source);

        let mut next = 0;
        while let Some(&u) = self.bfs_ordering.get(next) {
            next += 1;

            for index in self.residual.arcs_out(u) {
                let arc = self.residual.arc(index);
                let v = arc.head();
                // The source has no predecessor, but should not be discovered again
                if self.predecessor[v].is_none() && v != source && arc.is_residual() {
                    self.predecessor[v] = Some(index);
                    if v == sink {
                        return true;
                    }
                    self.bfs_ordering.push(v);
                }
            }
        }

        false
    }

    /// Arcs of the path found by the last search, from the sink back to the source.
    fn path(&self) -> impl Iterator<Item = usize> + '_ {
        successors(
            self.predecessor[self.residual.sink()],
            |&index| self.predecessor[self.residual.tail(index)],
        )
    }
}

impl<C: Capacity> MaximumFlow<C> for EdmondsKarp<C> {
    fn new(network: &FlowNetwork<C>) -> Self {
        Self {
            residual: ResidualNetwork::new(network),
            bfs_ordering: Vec::with_capacity(network.nr_vertices()),
            predecessor: vec![None; network.nr_vertices()],
        }
    }

    fn saturate(&mut self) -> Result<C, Overflow> {
        let mut value = C::zero();
        let mut nr_augmentations = 0_usize;

        while self.find_augmenting_path() {
            let bottleneck = self.path()
                .map(|index| self.residual.arc(index).residual_capacity())
                .fold(C::max_value(), Ord::min);

            let mut next = self.predecessor[self.residual.sink()];
            while let Some(index) = next {
                self.residual.push_flow(index, bottleneck);
                next = self.predecessor[self.residual.tail(index)];
            }

            value = value.checked_add(&bottleneck).ok_or(Overflow)?;
            nr_augmentations += 1;
            trace!("Augmentation {nr_augmentations}: pushed {bottleneck}, flow value {value}");
        }

        debug!("Edmonds-Karp: {nr_augmentations} augmentations, flow value {value}");
        Ok(value)
    }

    fn residual_network(&self) -> &ResidualNetwork<C> {
        &self.residual
    }
}
