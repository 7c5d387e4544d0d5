use anyhow::Context;
use clap::Parser;
use corpus_rank::page_rank::{iterated, sampled, PageRank, PageRankResult};
use corpus_rank::Corpus;
use std::path::PathBuf;

/// Rank the pages of an HTML corpus with two PageRank estimators.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory of .html documents to rank.
    corpus: PathBuf,
    /// Probability of following an outbound link instead of teleporting.
    #[arg(long, default_value_t = 0.85)]
    damping: f64,
    /// Number of random-surfer steps for the sampling estimator.
    #[arg(long, default_value_t = 10_000)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let corpus = Corpus::crawl(&args.corpus)
        .with_context(|| format!("failed to read corpus at {}", args.corpus.display()))?;

    let sampled = {
        let cfg = sampled::Config {
            damping: args.damping,
            samples: args.samples,
            ..Default::default()
        };
        sampled::SampledPageRank::new(corpus.graph(), &cfg)?.calc()?
    };
    println!("PageRank Results from Sampling (n = {})", args.samples);
    print_ranks(&corpus, sampled.page_rank());

    let iterated = {
        let cfg = iterated::Config {
            damping: args.damping,
            ..Default::default()
        };
        iterated::IteratedPageRank::new(corpus.graph(), &cfg)?.calc()?
    };
    println!("PageRank Results from Iteration");
    print_ranks(&corpus, iterated.page_rank());
    Ok(())
}

fn print_ranks(
    corpus: &Corpus,
    ranks: &std::collections::HashMap<algograph::graph::VertexId, f64, ahash::RandomState>,
) {
    for (page, rank) in corpus.named(ranks) {
        println!("  {page}: {rank:.4}");
    }
}
