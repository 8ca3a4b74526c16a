use lex_dfs::{find_lex_dfs_violation, lex_dfs_checked};
use petgraph::dot::Config::EdgeNoLabel;
use petgraph::dot::Dot;
use petgraph::graph::UnGraph;

fn main() {
    let names = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k'];
    let edges = ["ab", "ac", "ad", "bc", "be", "cd", "de", "df", "dg", "ef", "fg", "fh", "gi", "hi", "hj", "hk"];

    let mut graph = UnGraph::<char, ()>::new_undirected();
    let nodes: Vec<_> = names.iter().map(|&name| graph.add_node(name)).collect();
    for edge in edges {
        let [u, v] = [0, 1].map(|i| {
            let name = edge.as_bytes()[i] as char;
            nodes[names.iter().position(|&x| x == name).unwrap()]
        });
        graph.add_edge(u, v, ());
    }
    println!("{:?}", Dot::with_config(&graph, &[EdgeNoLabel]));

    // The alphabetical order is umbrella-free.
    let order = match lex_dfs_checked(&graph, &nodes) {
        Ok(order) => order,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let names: String = order.iter().map(|&u| graph[u]).collect();
    println!("{names}");
    assert_eq!(find_lex_dfs_violation(&graph, &order), None);
}
