//! Compute a maximum flow in a small network and print the flow on every arc.
use maxflow::algorithm::edmonds_karp;
use maxflow::data::network::FlowNetwork;

fn main() {
    // Maximum flow value of 19
    let network = FlowNetwork::<u64>::new(6, 0, 5, [
        (0, 1, 10), (0, 2, 10), (1, 2, 2), (1, 3, 4), (1, 4, 8),
        (2, 4, 9), (3, 5, 10), (4, 3, 6), (4, 5, 10),
    ]).expect("the arcs only use vertices 0 to 5");

    // Or `dinitz_cherkassky(&network)`
    let maximum_flow = edmonds_karp(&network).expect("19 fits in a u64");

    println!("Maximum flow value: {}", maximum_flow.value);
    println!("Arcs flow/capacity:");
    for (arc, flow) in network.arcs().iter().zip(&maximum_flow.flow_arcs) {
        println!("    * ({},{}) {flow}/{}", arc.tail, arc.head, arc.capacity);
    }
}
