use super::*;
use crate::Error;
use algograph::graph::*;
use rand::{prelude::*, rngs::SmallRng};
use std::collections::HashMap;

/// Estimates page ranks empirically: a surfer walks the chain induced by
/// [`transition`] for a fixed number of steps and every vertex's rank is
/// the fraction of steps spent on it.
pub struct SampledPageRank<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    samples: usize,
    seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Number of steps the surfer walks. Zero is rejected at construction
    /// rather than producing an all-zero ranking.
    pub samples: usize,
    /// Fixed seed for reproducible walks; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    /// Raw visit counts before normalization.
    pub visits: HashMap<VertexId, u64, ahash::RandomState>,
}

impl<'a, G: QueryableGraph> SampledPageRank<'a, G> {
    pub fn new(g: &'a G, config: &Config) -> crate::Result<Self> {
        if g.vertex_size() == 0 {
            return Err(Error::EmptyGraph);
        }
        if !(0.0..=1.0).contains(&config.damping) {
            return Err(Error::DampingOutOfRange(config.damping));
        }
        if config.samples == 0 {
            return Err(Error::ZeroSamples);
        }
        Ok(Self {
            graph: g,
            damping: config.damping,
            samples: config.samples,
            seed: config.seed,
        })
    }
}

impl<G: QueryableGraph> PageRank for SampledPageRank<'_, G> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        // Sorted so that a fixed seed yields the same walk regardless of
        // the graph's internal iteration order.
        let vertices = {
            let mut vs: Vec<_> = self.graph.iter_vertices().collect();
            vs.sort();
            vs
        };
        let mut visits: HashMap<VertexId, u64, ahash::RandomState> =
            vertices.iter().map(|v| (*v, 0u64)).collect();

        let mut current = *vertices.choose(&mut rng).unwrap();
        for _ in 0..self.samples {
            *visits.get_mut(&current).unwrap() += 1;
            let dist = transition(self.graph, current, self.damping)?;
            current = *vertices
                .choose_weighted(&mut rng, |v| *dist.get(v).unwrap())
                .unwrap();
        }

        let total = self.samples as f64;
        let page_rank = visits
            .iter()
            .map(|(v, count)| (*v, *count as f64 / total))
            .collect();
        Ok(Self::Result { page_rank, visits })
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
            let c = self.result.visits.get(&v).unwrap();
            writeln!(f, "{v:?}: {p:?}, {c} visits")?;
        }
        Ok(())
    }
}
