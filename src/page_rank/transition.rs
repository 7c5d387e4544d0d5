use crate::Error;
use algograph::graph::*;
use std::collections::{HashMap, HashSet};

/// One step of the random surfer standing on `page`: with probability
/// `damping` it follows one of the page's outbound links, otherwise it
/// jumps to a vertex chosen uniformly from the whole graph.
///
/// A vertex without outbound links is treated as linking to every vertex,
/// itself included, so the returned distribution is uniform there. Every
/// vertex receives a strictly positive probability (for `damping < 1`)
/// and the values sum to 1.0 up to rounding.
pub fn transition<G: QueryableGraph>(
    graph: &G,
    page: VertexId,
    damping: f64,
) -> crate::Result<HashMap<VertexId, f64, ahash::RandomState>> {
    if graph.vertex_size() == 0 {
        return Err(Error::EmptyGraph);
    }
    if !(0.0..=1.0).contains(&damping) {
        return Err(Error::DampingOutOfRange(damping));
    }
    if !graph.contains_vertex(&page) {
        return Err(Error::PageNotInGraph(page));
    }

    let n = graph.vertex_size() as f64;
    let links: HashSet<VertexId, ahash::RandomState> =
        graph.out_edges(&page).map(|e| e.sink).collect();

    let mut dist = HashMap::with_hasher(ahash::RandomState::new());
    if links.is_empty() {
        for v in graph.iter_vertices() {
            dist.insert(v, 1.0 / n);
        }
        return Ok(dist);
    }

    let jump = (1.0 - damping) / n;
    let follow = damping / (links.len() as f64);
    for v in graph.iter_vertices() {
        let p = if links.contains(&v) { jump + follow } else { jump };
        dist.insert(v, p);
    }
    Ok(dist)
}
