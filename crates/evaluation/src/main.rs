use common::instances::{interval_graph, permutation_graph, Instance};
use lex_dfs::{is_lex_dfs_ordering, lex_dfs};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::error::Error;
use std::time::{Duration, Instant};

/// Permutation graphs are dense, so they are only generated up to this size.
const MAX_PERMUTATION_GRAPH_SIZE: usize = 1 << 12;
/// Outputs are certified up to this size.
const MAX_VERIFIED_SIZE: usize = 1 << 8;

fn run(name: &str, instance: &Instance) -> Result<Duration, Box<dyn Error>> {
    let start = Instant::now();
    let order = lex_dfs(&instance.graph, &instance.sigma)?;
    let t = start.elapsed();

    if instance.graph.node_count() <= MAX_VERIFIED_SIZE && !is_lex_dfs_ordering(&instance.graph, &order) {
        return Err(format!("{name}: output is not a Lex-DFS ordering").into());
    }
    Ok(t)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<_> = env::args().collect();
    let max_exp: u32 = args.get(1).map(|arg| arg.parse()).transpose()?.unwrap_or(16);
    let seed: u64 = args.get(2).map(|arg| arg.parse()).transpose()?.unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);

    for exp in 4..=max_exp {
        let n = 1_usize << exp;
        let mut instances = vec![("interval-short", interval_graph(&mut rng, n, 8))];
        instances.push(("interval-long", interval_graph(&mut rng, n, 1 << (exp / 2))));
        if n <= MAX_PERMUTATION_GRAPH_SIZE {
            instances.push(("permutation", permutation_graph(&mut rng, n)));
        }

        for (name, instance) in &instances {
            let instance = instance.shuffled(&mut rng);
            let t = run(name, &instance)?;
            let (n, m) = (instance.graph.node_count(), instance.graph.edge_count());
            println!(
                "{name:<16} n {n:9} m {m:11}  lex-dfs {:9} μs  {:6.2} ns/(n+m)",
                t.as_micros(),
                t.as_nanos() as f64 / (n + m) as f64
            );
        }
    }
    Ok(())
}
