use std::time::Duration;

use criterion::Criterion;

pub type BenchCriterion = Criterion;

pub fn bench_criterion() -> BenchCriterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .configure_from_args()
}
