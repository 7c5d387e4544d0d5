use algograph::graph::*;
use corpus_rank::page_rank::{iterated, sampled, PageRank};
use criterion::*;
use rand::{prelude::*, rngs::SmallRng};

criterion_main!(benches);
criterion_group!(benches, random_graph_iterated, random_graph_sampled);

fn random_graph_iterated(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[10usize, 20usize, 40usize, 80usize, 160usize];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut group = c.benchmark_group("RandomGraph");
    group.plot_config(plot_config);
    let mut rng = SmallRng::seed_from_u64(3407);
    for v_n in V_SIZE.iter() {
        let g = gen_random_graph(&mut rng, *v_n, v_n * 4);
        group.bench_with_input(BenchmarkId::new("IteratedPR", v_n), v_n, |b, _| {
            b.iter(|| {
                let pr = iterated::IteratedPageRank::new(&g, &iterated::Config::default()).unwrap();
                black_box(pr.calc().unwrap());
            })
        });
    }
    group.finish();
}

fn random_graph_sampled(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[10usize, 20usize, 40usize, 80usize];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut group = c.benchmark_group("RandomGraphSampled");
    group.plot_config(plot_config);
    let mut rng = SmallRng::seed_from_u64(3407);
    for v_n in V_SIZE.iter() {
        let g = gen_random_graph(&mut rng, *v_n, v_n * 4);
        let cfg = sampled::Config {
            seed: Some(3407),
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("SampledPR", v_n), v_n, |b, _| {
            b.iter(|| {
                let pr = sampled::SampledPageRank::new(&g, &cfg).unwrap();
                black_box(pr.calc().unwrap());
            })
        });
    }
    group.finish();
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn gen_random_graph<R: Rng>(rng: &mut R, v_n: usize, e_n: usize) -> directed::TreeBackedGraph {
    let mut g = directed::TreeBackedGraph::new();
    let vs: Vec<_> = (0..v_n).map(|_| g.add_vertex()).collect();
    for _ in 0..e_n {
        let u = *vs.choose(rng).unwrap();
        let v = *vs.choose(rng).unwrap();
        if u != v {
            g.add_edge(u, v);
        }
    }
    g
}
