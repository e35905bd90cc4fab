//! Corpus Scoring Benchmarking Tool
//!
//! This binary measures the throughput of the scoring pipeline on real
//! corpus files, like the complete works of Shakespeare plus a Scrabble
//! word list. It's designed to give realistic numbers for the workload
//! the engine was built for.
//!
//! ## What It Measures
//!
//! Three stages, each timed separately:
//!
//! 1. **Normalization**: Uppercasing raw text, collapsing whitespace
//! 2. **Tokenization**: Splitting normalized text into word tokens
//! 3. **Full Pipeline**: Filter, score, and group the whole corpus
//!
//! ## Usage
//!
//! ```bash
//! # Default (parallel) pipeline
//! ./target/release/corpus_bench shakespeare.txt scrabble.txt
//!
//! # Force single-threaded execution
//! ./target/release/corpus_bench shakespeare.txt scrabble.txt sequential
//! ```
//!
//! ## Tips for Accurate Results
//!
//! - Build with `--release`
//! - Use a large corpus (10MB+) for stable measurements
//! - Consider `taskset` to pin cores, and disable turbo boost

use std::env;
use std::time::{Duration, Instant};

use tilescore_core::analyzer::{Normalizer, Tokenizer};
use tilescore_core::corpus::{load_corpus, load_dictionary};
use tilescore_core::{LoadError, PipelineConfig, Tilescore};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), LoadError> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: corpus_bench <corpus> <dictionary> [sequential]");
        std::process::exit(1);
    }

    let config = match args.get(3).map(String::as_str) {
        Some("sequential") => PipelineConfig::sequential(),
        _ => PipelineConfig::parallel(),
    };

    println!("Loading resources...");
    let raw = load_corpus(&args[1])?;
    let dictionary = load_dictionary(&args[2])?;

    println!("Corpus size : {}", fmt_bytes(raw.len() as u64));
    println!("Dictionary  : {} words", fmt_count(dictionary.len() as u64));
    println!(
        "Execution   : {}\n",
        if config.parallel { "parallel" } else { "sequential" }
    );

    bench_normalize(&raw);
    bench_tokenize(&raw);
    bench_pipeline(&raw, dictionary, config);

    Ok(())
}

fn bench_normalize(raw: &str) {
    let normalizer = Normalizer::new();
    let mut out = String::with_capacity(raw.len());

    println!("=== Normalize ===");

    warmup(|| {
        normalizer.normalize_into(raw, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.normalize_into(raw, &mut out);
    });

    print_perf("Normalize", raw.len(), elapsed, 0);
}

fn bench_tokenize(raw: &str) {
    let normalized = Normalizer::new().normalize(raw);
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(&normalized, |_t, _p| {
            sink += 1;
        });
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(&normalized, |_t, _p| {
            local += 1;
        });
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", normalized.len(), elapsed, tokens);
}

fn bench_pipeline(
    raw: &str,
    dictionary: rustc_hash::FxHashSet<Box<str>>,
    config: PipelineConfig,
) {
    let mut engine = Tilescore::with_config(config);
    engine.set_dictionary(dictionary);
    engine.set_corpus(raw);

    println!("=== Pipeline ===");

    warmup(|| {
        std::hint::black_box(engine.run());
    });

    let elapsed = measure(|| {
        std::hint::black_box(engine.run());
    });

    let words = engine
        .last_run_stats()
        .map(|stats| stats.tokens_seen)
        .unwrap_or(0);
    print_perf("Pipeline", raw.len(), elapsed, words);

    if let Some(stats) = engine.last_run_stats() {
        println!("Stats       : {}\n", stats);
    }

    println!("Top groups:");
    for group in engine.top_groups() {
        let preview: Vec<&str> = group.words.iter().take(5).map(String::as_str).collect();
        println!(
            "  {:>4} pts  {} words  [{}{}]",
            group.score,
            group.words.len(),
            preview.join(", "),
            if group.words.len() > 5 { ", ..." } else { "" }
        );
    }
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, words: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.2} MiB/s", mib / secs);

    if words > 0 {
        println!("Words       : {}", fmt_count(words));
        println!("Words/sec   : {}", fmt_count((words as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
