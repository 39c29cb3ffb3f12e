//! # Flows
//!
//! The output of the maximum flow algorithms.
use itertools::Itertools;
use thiserror::Error;

use crate::data::network::{Capacity, FlowNetwork, ResidualNetwork, Vertex};

/// A flow on a `FlowNetwork`: its value, and the amount of flow on each arc.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Flow<C> {
    /// Net amount of flow leaving the source.
    pub value: C,
    /// Flow for each arc, in the order of the arcs of the network.
    pub flow_arcs: Vec<C>,
}

impl<C: Capacity> Flow<C> {
    /// Read the arc flows off the residual network that an algorithm left behind.
    ///
    /// In the residual network an original arc can't be distinguished from the reverse copy of
    /// another arc. The adjacency lists are however filled in the order of the original arcs, so
    /// walking the original arcs while keeping a cursor in each adjacency list finds, in `O(m)`,
    /// the copy that belongs to each arc. The flow on it equals the residual capacity of its pair.
    ///
    /// # Arguments
    ///
    /// * `value`: Flow value as computed by the algorithm.
    /// * `network`: The network `residual` was derived from.
    /// * `residual`: Residual network of the flow.
    pub fn extract(value: C, network: &FlowNetwork<C>, residual: &ResidualNetwork<C>) -> Self {
        debug_assert_eq!(network.nr_vertices(), residual.nr_vertices());
        debug_assert_eq!(2 * network.nr_arcs(), residual.nr_arcs());

        let mut current_arc = residual.vertices()
            .map(|u| residual.arcs_out(u).start)
            .collect::<Vec<_>>();
        let flow_arcs = network.arcs().iter()
            .map(|arc| {
                let forward = current_arc[arc.tail];
                debug_assert_eq!(residual.arc(forward).head(), arc.head);
                current_arc[arc.tail] += 1;
                current_arc[arc.head] += 1;

                residual.pair(forward).residual_capacity()
            })
            .collect();

        Self { value, flow_arcs }
    }

    /// Check that this is a feasible flow of the claimed value.
    ///
    /// Every arc flow should be within the capacity, flow should be conserved at every vertex other
    /// than the source and sink, and the net amount of flow leaving the source and entering the
    /// sink should be the value.
    ///
    /// # Errors
    ///
    /// The first violation found.
    pub fn verify(&self, network: &FlowNetwork<C>) -> Result<(), FlowError> {
        if self.flow_arcs.len() != network.nr_arcs() {
            return Err(FlowError::Length {
                nr_flows: self.flow_arcs.len(),
                nr_arcs: network.nr_arcs(),
            });
        }

        let mut inflow = vec![C::zero(); network.nr_vertices()];
        let mut outflow = vec![C::zero(); network.nr_vertices()];
        for (index, (arc, &flow)) in network.arcs().iter().zip_eq(&self.flow_arcs).enumerate() {
            if flow > arc.capacity {
                return Err(FlowError::Capacity {
                    arc: index,
                    flow: flow.to_string(),
                    capacity: arc.capacity.to_string(),
                });
            }
            outflow[arc.tail] = outflow[arc.tail]
                .checked_add(&flow)
                .ok_or(FlowError::Overflow(arc.tail))?;
            inflow[arc.head] = inflow[arc.head]
                .checked_add(&flow)
                .ok_or(FlowError::Overflow(arc.head))?;
        }

        let (source, sink) = (network.source(), network.sink());
        let source_out = inflow[source]
            .checked_add(&self.value)
            .ok_or(FlowError::Overflow(source))?;
        if outflow[source] != source_out {
            return Err(FlowError::Value { vertex: source, value: self.value.to_string() });
        }
        let sink_in = outflow[sink].checked_add(&self.value).ok_or(FlowError::Overflow(sink))?;
        if inflow[sink] != sink_in {
            return Err(FlowError::Value { vertex: sink, value: self.value.to_string() });
        }

        match network.vertices()
            .filter(|&u| u != source && u != sink)
            .find(|&u| inflow[u] != outflow[u]) {
            Some(vertex) => Err(FlowError::Conservation(vertex)),
            None => Ok(()),
        }
    }
}

/// Ways in which a `Flow` can fail to be a feasible flow of its value.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum FlowError {
    /// There is not exactly one flow value for each arc.
    #[error("{nr_flows} arc flows for {nr_arcs} arcs")]
    Length {
        /// Number of arc flows.
        nr_flows: usize,
        /// Number of arcs in the network.
        nr_arcs: usize,
    },
    /// An arc carries more flow than its capacity.
    #[error("arc {arc} carries {flow} units of flow, but has capacity {capacity}")]
    Capacity {
        /// Index of the arc.
        arc: usize,
        /// Flow on the arc.
        flow: String,
        /// Capacity of the arc.
        capacity: String,
    },
    /// Inflow and outflow differ at a vertex that is neither the source nor the sink.
    #[error("flow is not conserved at vertex {0}")]
    Conservation(Vertex),
    /// The net flow out of the source, or into the sink, is not the flow value.
    #[error("net flow at terminal {vertex} does not match the flow value {value}")]
    Value {
        /// Source or sink.
        vertex: Vertex,
        /// The claimed flow value.
        value: String,
    },
    /// The total flow through a vertex doesn't fit in the number type.
    #[error("total flow through vertex {0} overflows")]
    Overflow(Vertex),
}

#[cfg(test)]
mod test {
    use crate::data::network::{Flow, FlowError, FlowNetwork, ResidualNetwork};

    fn network() -> FlowNetwork<u32> {
        FlowNetwork::new(4, 0, 3, [(0, 1, 5), (0, 2, 7), (1, 2, 1), (2, 3, 4), (1, 3, 2)]).unwrap()
    }

    #[test]
    fn extract_zero_flow() {
        let network = network();
        let residual = ResidualNetwork::new(&network);
        let flow = Flow::extract(0, &network, &residual);
        assert_eq!(flow, Flow { value: 0, flow_arcs: vec![0; 5] });
        assert_eq!(flow.verify(&network), Ok(()));
    }

    #[test]
    fn extract_after_pushes() {
        let network = network();
        let mut residual = ResidualNetwork::new(&network);
        // 0 -> 1 -> 3, two units
        residual.push_flow(0, 2);
        residual.push_flow(4, 2);
        // 0 -> 1 -> 2 -> 3, one unit
        residual.push_flow(0, 1);
        residual.push_flow(3, 1);
        residual.push_flow(7, 1);
        // 0 -> 2 -> 3, three units
        residual.push_flow(1, 3);
        residual.push_flow(7, 3);

        let flow = Flow::extract(6, &network, &residual);
        assert_eq!(flow.flow_arcs, [3, 3, 1, 4, 2]);
        assert_eq!(flow.verify(&network), Ok(()));
    }

    #[test]
    fn extract_with_self_loop_and_parallel_arcs() {
        let network = FlowNetwork::<u32>::new(3, 0, 2, [
            (0, 1, 3), (1, 1, 9), (0, 1, 2), (1, 2, 4),
        ]).unwrap();
        let mut residual = ResidualNetwork::new(&network);
        // Second parallel arc, then the arc into the sink
        let second = residual.arcs_out(0).start + 1;
        residual.push_flow(second, 2);
        let into_sink = residual.arcs_out(1).end - 1;
        assert_eq!(residual.arc(into_sink).head(), 2);
        residual.push_flow(into_sink, 2);

        let flow = Flow::extract(2, &network, &residual);
        assert_eq!(flow.flow_arcs, [0, 0, 2, 2]);
        assert_eq!(flow.verify(&network), Ok(()));
    }

    #[test]
    fn verify() {
        let network = network();
        let valid = Flow { value: 6, flow_arcs: vec![3, 3, 1, 4, 2] };
        assert_eq!(valid.verify(&network), Ok(()));

        let short = Flow { value: 6, flow_arcs: vec![3, 3, 1, 4] };
        assert_eq!(short.verify(&network), Err(FlowError::Length { nr_flows: 4, nr_arcs: 5 }));

        let over_capacity = Flow { value: 7, flow_arcs: vec![3, 4, 2, 5, 2] };
        assert!(matches!(over_capacity.verify(&network), Err(FlowError::Capacity { arc: 2, .. })));

        let wrong_value = Flow { value: 5, flow_arcs: vec![3, 3, 1, 4, 2] };
        assert!(matches!(wrong_value.verify(&network), Err(FlowError::Value { vertex: 0, .. })));

        let short_at_sink = Flow { value: 6, flow_arcs: vec![3, 3, 1, 3, 2] };
        assert!(matches!(short_at_sink.verify(&network), Err(FlowError::Value { vertex: 3, .. })));

        let leaking = Flow { value: 6, flow_arcs: vec![3, 3, 0, 4, 2] };
        assert_eq!(leaking.verify(&network), Err(FlowError::Conservation(1)));
    }

    #[test]
    fn verify_overflow() {
        let network = FlowNetwork::<u8>::new(3, 0, 2, [
            (0, 1, 200), (0, 1, 200), (1, 2, 255),
        ]).unwrap();
        let flow = Flow { value: 255, flow_arcs: vec![200, 200, 255] };
        assert_eq!(flow.verify(&network), Err(FlowError::Overflow(0)));
    }
}
