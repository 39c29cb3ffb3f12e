//! # Algorithms
//!
//! Both algorithms repeatedly push flow along augmenting paths in a residual network, until the
//! sink can no longer be reached from the source.
use std::fmt::{Display, Formatter};
use std::fmt;

use thiserror::Error;

use crate::algorithm::dinitz_cherkassky::DinitzCherkassky;
use crate::algorithm::edmonds_karp::EdmondsKarp;
use crate::data::network::{Capacity, Flow, FlowNetwork, ResidualNetwork};

pub mod dinitz_cherkassky;
pub mod edmonds_karp;

/// An algorithm that computes a maximum flow by saturating a residual network.
///
/// A solver owns the residual network it works on, so independent solvers never share mutable
/// state and can run in parallel on the same `FlowNetwork`.
pub trait MaximumFlow<C: Capacity>: Sized {
    /// Prepare the residual network of the zero flow and any buffers the algorithm reuses.
    fn new(network: &FlowNetwork<C>) -> Self;

    /// Push flow until no augmenting path is left in the residual network.
    ///
    /// # Return value
    ///
    /// The value of the flow pushed.
    ///
    /// # Errors
    ///
    /// If the flow value doesn't fit in the number type `C`.
    fn saturate(&mut self) -> Result<C, Overflow>;

    /// Residual network in its current state.
    fn residual_network(&self) -> &ResidualNetwork<C>;

    /// Compute a maximum flow.
    ///
    /// # Errors
    ///
    /// If the value of a maximum flow doesn't fit in the number type `C`.
    fn solve(network: &FlowNetwork<C>) -> Result<Flow<C>, Overflow> {
        let mut solver = Self::new(network);
        let value = solver.saturate()?;

        Ok(Flow::extract(value, network, solver.residual_network()))
    }
}

/// The value of the flow exceeds the largest value of the number type.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("the flow value does not fit in the capacity type")]
pub struct Overflow;

/// Compute a maximum flow with the algorithm of Edmonds and Karp in `O(nm²)`.
///
/// # Errors
///
/// If the value of a maximum flow doesn't fit in the number type `C`.
pub fn edmonds_karp<C: Capacity>(network: &FlowNetwork<C>) -> Result<Flow<C>, Overflow> {
    EdmondsKarp::<C>::solve(network)
}

/// Compute a maximum flow with the algorithm of Dinitz, as implemented by Cherkassky, in `O(n²m)`.
///
/// # Errors
///
/// If the value of a maximum flow doesn't fit in the number type `C`.
pub fn dinitz_cherkassky<C: Capacity>(network: &FlowNetwork<C>) -> Result<Flow<C>, Overflow> {
    DinitzCherkassky::<C>::solve(network)
}

/// The available maximum flow algorithms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Shortest augmenting paths, see `edmonds_karp`.
    EdmondsKarp,
    /// Blocking flows, see `dinitz_cherkassky`.
    DinitzCherkassky,
}

impl Algorithm {
    /// All algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::EdmondsKarp, Algorithm::DinitzCherkassky];

    /// Compute a maximum flow with this algorithm.
    ///
    /// # Errors
    ///
    /// If the value of a maximum flow doesn't fit in the number type `C`.
    pub fn solve<C: Capacity>(self, network: &FlowNetwork<C>) -> Result<Flow<C>, Overflow> {
        match self {
            Algorithm::EdmondsKarp => edmonds_karp(network),
            Algorithm::DinitzCherkassky => dinitz_cherkassky(network),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::EdmondsKarp => "Edmonds-Karp",
            Algorithm::DinitzCherkassky => "Dinitz-Cherkassky",
        })
    }
}
