use algograph::graph::*;

/// Small arbitrary link graph: no self-loops, no dangling links, at least
/// one vertex, just as corpus construction guarantees.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub graph: directed::TreeBackedGraph,
}

impl quickcheck::Arbitrary for RandomGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 10;

        let n: usize = usize::arbitrary(g) % N + 1;
        let mut graph = directed::TreeBackedGraph::new();
        let vertices: Vec<_> = (0..n).map(|_| graph.add_vertex()).collect();
        for _ in 0..(usize::arbitrary(g) % (2 * n)) {
            let v0 = vertices[usize::arbitrary(g) % vertices.len()];
            let v1 = vertices[usize::arbitrary(g) % vertices.len()];
            if v0 != v1 {
                graph.add_edge(v0, v1);
            }
        }
        Self { graph }
    }
}
