//! # Properties of maximum flows on random networks
//!
//! Both algorithms should agree, produce feasible flows and leave a residual network in which the
//! sink can't be reached. The vertices that can still be reached from the source form a cut whose
//! capacity is the flow value.
use std::collections::HashSet;

use proptest::collection::vec;
use proptest::prelude::*;

use maxflow::algorithm::dinitz_cherkassky::DinitzCherkassky;
use maxflow::algorithm::edmonds_karp::EdmondsKarp;
use maxflow::algorithm::{Algorithm, MaximumFlow};
use maxflow::data::network::{FlowNetwork, ResidualNetwork, Vertex};

/// Networks with source `0` and sink `n - 1`, possibly with self-loops, parallel arcs and arcs of
/// capacity zero.
fn networks() -> impl Strategy<Value = FlowNetwork<u32>> {
    (2_usize..12)
        .prop_flat_map(|nr_vertices| {
            let arc = (0..nr_vertices, 0..nr_vertices, 0_u32..20);
            (Just(nr_vertices), vec(arc, 0..40))
        })
        .prop_map(|(nr_vertices, arcs)| {
            FlowNetwork::new(nr_vertices, 0, nr_vertices - 1, arcs).unwrap()
        })
}

fn reachable_from_source(residual: &ResidualNetwork<u32>) -> HashSet<Vertex> {
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

fn cut_capacity(network: &FlowNetwork<u32>, source_side: &HashSet<Vertex>) -> u32 {
    network.arcs().iter()
        .filter(|arc| source_side.contains(&arc.tail) && !source_side.contains(&arc.head))
        .map(|arc| arc.capacity)
        .sum()
}

fn check_optimality<M: MaximumFlow<u32>>(network: &FlowNetwork<u32>) -> u32 {
    let mut solver = M::new(network);
    let value = solver.saturate().unwrap();

    let source_side = reachable_from_source(solver.residual_network());
    assert!(!source_side.contains(&network.sink()), "augmenting path left");
    assert_eq!(cut_capacity(network, &source_side), value);

    value
}

proptest! {
    #[test]
    fn prop_algorithms_agree(network in networks()) {
        let flows = Algorithm::ALL.map(|algorithm| algorithm.solve(&network).unwrap());
        prop_assert_eq!(flows[0].value, flows[1].value);
        for flow in &flows {
            prop_assert_eq!(flow.flow_arcs.len(), network.nr_arcs());
            prop_assert_eq!(flow.verify(&network), Ok(()));
        }
    }

    #[test]
    fn prop_capacity_bound(network in networks()) {
        for algorithm in Algorithm::ALL {
            let flow = algorithm.solve(&network).unwrap();
            for (arc, &flow) in network.arcs().iter().zip(&flow.flow_arcs) {
                prop_assert!(flow <= arc.capacity);
                if arc.tail == arc.head {
                    prop_assert_eq!(flow, 0);
                }
            }
        }
    }

    #[test]
    fn prop_minimum_cut(network in networks()) {
        let value = check_optimality::<EdmondsKarp<_>>(&network);
        prop_assert_eq!(check_optimality::<DinitzCherkassky<_>>(&network), value);
    }

    #[test]
    fn prop_deterministic(network in networks()) {
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.solve(&network), algorithm.solve(&network));
        }
    }

    #[test]
    fn prop_no_path(network in networks()) {
        // Drop every arc into the sink
        let sink = network.sink();
        let arcs = network.arcs().iter()
            .copied()
            .filter(|arc| arc.head != sink)
            .collect::<Vec<_>>();
        let network = FlowNetwork::new(network.nr_vertices(), network.source(), sink, arcs)
            .unwrap();

        for algorithm in Algorithm::ALL {
            let flow = algorithm.solve(&network).unwrap();
            prop_assert_eq!(flow.value, 0);
            prop_assert!(flow.flow_arcs.iter().all(|&flow| flow == 0));
        }
    }
}
