use maxflow::algorithm::{Algorithm, dinitz_cherkassky, edmonds_karp};
use maxflow::data::network::FlowNetwork;
use maxflow::io::error::ImportError;
use maxflow::io::{import, import_solution};

use super::get_test_file_path;

fn solve_and_compare(name: &str) -> FlowNetwork<u64> {
    let network = import(&get_test_file_path(name, "max")).unwrap();
    let expected = import_solution::<u64>(&get_test_file_path(name, "sol")).unwrap();

    for algorithm in Algorithm::ALL {
        let flow = algorithm.solve(&network).unwrap();
        assert_eq!(flow.value, expected, "{algorithm} on {name}");
        assert_eq!(flow.verify(&network), Ok(()), "{algorithm} on {name}");
    }

    network
}

#[test]
fn example() {
    let network = solve_and_compare("example");
    assert_eq!(network.nr_vertices(), 6);
    assert_eq!(network.nr_arcs(), 9);
}

#[test]
fn matching() {
    let network = solve_and_compare("matching");
    let flow = dinitz_cherkassky(&network).unwrap();

    // Every left vertex is matched to exactly one right vertex, and the other way around
    let matched = network.arcs().iter()
        .zip(&flow.flow_arcs)
        .filter(|&(arc, &flow)| {
            arc.tail != network.source() && arc.head != network.sink() && flow == 1
        })
        .map(|(arc, _)| (arc.tail, arc.head))
        .collect::<Vec<_>>();
    assert_eq!(matched.len(), 3);
    for vertex in 1..7 {
        let incident = matched.iter()
            .filter(|&&(left, right)| left == vertex || right == vertex)
            .count();
        assert_eq!(incident, 1);
    }
}

#[test]
fn cancellation() {
    solve_and_compare("cancellation");
}

#[test]
fn disconnected() {
    let network = solve_and_compare("disconnected");
    assert!(edmonds_karp(&network).unwrap().flow_arcs.iter().all(|&flow| flow == 0));
}

#[test]
fn missing_file() {
    let result = import::<u64>(&get_test_file_path("does_not_exist", "max"));
    assert!(matches!(result, Err(ImportError::IO(_))));
}
