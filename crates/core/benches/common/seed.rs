use std::env;

pub fn bench_seed() -> u32 {
    env::var("RSEQ_BENCH_SEED")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(0xC0FFEE)
}
