//! # Integration tests that require a look inside the crate.
//!
//! Each problem goes from a DIMACS string through every intermediate representation to a maximum
//! flow. Convention for function names:
//!
//! * `const DIMACS_LITERAL_STRING`
//! * `fn flow_network()`
//! * `fn flow()`
use std::collections::HashSet;

use crate::algorithm::MaximumFlow;
use crate::data::network::{Capacity, FlowNetwork, ResidualNetwork, Vertex};


/// Vertices reachable from the source through arcs that are not saturated.
fn reachable_from_source<C: Capacity>(residual: &ResidualNetwork<C>) -> HashSet<Vertex> {
    let mut reached = HashSet::from([residual.source()]);
    let mut stack = vec![residual.source()];
    while let Some(u) = stack.pop() {
        for index in residual.arcs_out(u) {
            let arc = residual.arc(index);
            if arc.is_residual() && reached.insert(arc.head()) {
                stack.push(arc.head());
            }
        }
    }

    reached
}

/// Saturate and return the cut between the vertices the source can still reach and all others.
fn minimum_cut<C: Capacity, M: MaximumFlow<C>>(network: &FlowNetwork<C>) -> (C, HashSet<Vertex>) {
    let mut solver = M::new(network);
    let value = solver.saturate().unwrap();

    let source_side = reachable_from_source(solver.residual_network());
    assert!(!source_side.contains(&network.sink()));
    let cut_capacity = network.arcs().iter()
        .filter(|arc| source_side.contains(&arc.tail) && !source_side.contains(&arc.head))
        .fold(C::zero(), |total, arc| total + arc.capacity);
    assert_eq!(cut_capacity, value);

    (value, source_side)
}
