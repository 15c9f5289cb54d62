use beluga::graphlib::{Graph, GraphOptions};
use beluga::{EdgeLabel, GraphLabel, NodeLabel, layout};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone)]
struct GraphSpec {
    node_ids: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    fn build(&self) -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
        let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> =
            Graph::new(GraphOptions { multigraph: true });
        g.set_graph(GraphLabel::default());

        for id in &self.node_ids {
            g.set_node(
                id.clone(),
                NodeLabel {
                    width: 172.0,
                    height: 36.0,
                    ..Default::default()
                },
            );
        }
        for (i, &(from, to)) in self.edges.iter().enumerate() {
            g.set_edge_named(
                self.node_ids[from].clone(),
                self.node_ids[to].clone(),
                Some(i.to_string()),
                None,
            );
        }
        g
    }
}

fn build_dag_spec(name: &str, node_count: usize, fanout: usize) -> GraphSpec {
    let node_ids: Vec<String> = (0..node_count).map(|i| format!("{name}_n{i}")).collect();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for i in 0..node_count.saturating_sub(1) {
        edges.push((i, i + 1));
    }
    for i in 0..node_count {
        for k in 2..=(fanout + 1) {
            let to = i + k;
            if to >= node_count {
                break;
            }
            edges.push((i, to));
        }
        // One back edge every so often to exercise cycle breaking.
        if i % 17 == 16 {
            edges.push((i, i - 7));
        }
    }

    GraphSpec { node_ids, edges }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("dag_50_f2", 50usize, 2usize),
        ("dag_200_f3", 200usize, 3usize),
        ("dag_400_f3", 400usize, 3usize),
    ];

    for (name, nodes, fanout) in cases {
        let spec = build_dag_spec(name, nodes, fanout);
        group.bench_with_input(BenchmarkId::new("layout", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build(),
                |mut g| {
                    layout(black_box(&mut g));
                    black_box(g.graph().width);
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
