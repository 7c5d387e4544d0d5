use super::*;
use crate::{norm_inf, Error};
use algograph::graph::*;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Solves the PageRank fixed point directly: every rank starts at `1/N`
/// and the recurrence is swept until no rank moves by `epsilon` or more.
///
/// A vertex without outbound links is treated as linking to every vertex,
/// the same convention as [`transition`], so both estimators target the
/// same stationary distribution.
pub struct IteratedPageRank<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    epsilon: f64,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    dead_ends: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Per-vertex convergence threshold.
    pub epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 0.001,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    pub delta: HashMap<VertexId, f64, ahash::RandomState>,
    pub rounds: usize,
}

impl<'a, G: QueryableGraph> IteratedPageRank<'a, G> {
    pub fn new(g: &'a G, config: &Config) -> crate::Result<Self> {
        if g.vertex_size() == 0 {
            return Err(Error::EmptyGraph);
        }
        let damping = config.damping;
        if !(0.0..=1.0).contains(&damping) {
            return Err(Error::DampingOutOfRange(damping));
        }
        let epsilon = config.epsilon;
        assert!(epsilon > 0.0, "epsilon={epsilon}");
        let mut dead_ends = vec![];
        let transitions = {
            let mut transitions = BTreeMap::new();
            for u in g.iter_vertices() {
                let links: HashSet<VertexId, ahash::RandomState> =
                    g.out_edges(&u).map(|e| e.sink).collect();
                if links.is_empty() {
                    dead_ends.push(u);
                    continue;
                }
                let unit = damping / (links.len() as f64);
                for v in links {
                    transitions.insert((u, v), unit);
                }
            }
            transitions
        };
        Ok(Self {
            graph: g,
            damping,
            epsilon,
            transitions,
            dead_ends,
        })
    }
}

impl<G: QueryableGraph> PageRank for IteratedPageRank<'_, G> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let n = self.graph.vertex_size() as f64;
        let mut p: HashMap<VertexId, f64, ahash::RandomState> =
            self.graph.iter_vertices().map(|v| (v, 1.0 / n)).collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut delta = HashMap::with_hasher(ahash::RandomState::new());
        let mut rounds = 0;
        loop {
            rounds += 1;
            // Rank flowing out of dead ends spreads uniformly, so it lands
            // in the per-vertex base term together with the teleport mass.
            let dead_mass: f64 = self.dead_ends.iter().map(|v| *p.get(v).unwrap()).sum();
            let base = (1.0 - self.damping) / n + self.damping * dead_mass / n;
            for v in self.graph.iter_vertices() {
                r.insert(v, base);
            }
            for ((v0, v1), w) in self.transitions.iter() {
                let from = *p.get(v0).unwrap();
                let to = r.get_mut(v1).unwrap();
                *to += from * w;
            }

            delta.clear();
            for v in self.graph.iter_vertices() {
                let a = p.get(&v).unwrap();
                let b = r.get(&v).unwrap();
                delta.insert(v, a - b);
            }

            if norm_inf(&delta) < self.epsilon {
                return Ok(Self::Result {
                    page_rank: r,
                    delta,
                    rounds,
                });
            }

            std::mem::swap(&mut p, &mut r);
            r.clear();
        }
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &HashMap<VertexId, f64, ahash::RandomState> {
        &self.page_rank
    }

    fn debug<'a, G: QueryableGraph>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a, G: QueryableGraph> {
    graph: &'a G,
    result: &'a self::Result,
}

impl<G: QueryableGraph> std::fmt::Debug for ResultDebug<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            let p = self.result.page_rank.get(&v).unwrap();
            let d = self.result.delta.get(&v).unwrap();
            writeln!(f, "{v:?}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
