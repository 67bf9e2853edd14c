//! Reproducible `i32` inputs for tests and benchmarks.
//!
//! Every random pattern draws from an `StdRng` seeded with [`seed`]. The seed is picked once per
//! process, or taken from the `OVERRIDE_SEED` env var to replay a failing run.

use std::env;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

static SEED: OnceLock<u64> = OnceLock::new();
static FRESH_SEEDS: AtomicBool = AtomicBool::new(false);

/// The seed shared by all patterns of this process.
pub fn seed() -> u64 {
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(val) => val
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED must be a u64, got {val:?}")),
        Err(_) => thread_rng().gen(),
    })
}

/// Makes every following pattern call draw from a new seed. Benchmarks use this so repeated
/// batches don't measure the same input over and over.
pub fn fresh_seed_per_call() {
    assert!(
        env::var("OVERRIDE_SEED").is_err(),
        "OVERRIDE_SEED asks for reproducible patterns"
    );
    FRESH_SEEDS.store(true, Ordering::Relaxed);
}

fn rng() -> StdRng {
    if FRESH_SEEDS.load(Ordering::Relaxed) {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(seed())
    }
}

/// Values spread over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Values drawn from `range`. A narrow range gives many duplicates.
pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let dist = Uniform::from(range);
    dist.sample_iter(rng()).take(len).collect()
}

/// `len.log2()` distinct values.
pub fn random_dense(len: usize) -> Vec<i32> {
    let max = (usize::BITS - len.leading_zeros()) as i32;
    random_uniform(len, 0..=max)
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into `runs` sorted runs, every other one descending.
pub fn saws(len: usize, runs: usize) -> Vec<i32> {
    let mut v = random(len);
    let run_len = len.div_ceil(runs.max(1)).max(1);

    for (i, run) in v.chunks_mut(run_len).enumerate() {
        run.sort_unstable();
        if i % 2 == 1 {
            run.reverse();
        }
    }

    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_values() {
        assert_eq!(random(20), random(20));
        assert_eq!(random_uniform(20, -5..=5), random_uniform(20, -5..=5));
    }

    #[test]
    fn uniform_stays_in_range() {
        assert!(random_uniform(500, -3..=3).iter().all(|x| (-3..=3).contains(x)));
        assert!(random_dense(1024).iter().all(|x| (0..=11).contains(x)));
    }

    #[test]
    fn saws_have_runs() {
        let v = saws(100, 4);
        assert_eq!(v.len(), 100);

        let runs = v.chunks(25).collect::<Vec<_>>();
        assert!(runs[0].windows(2).all(|w| w[0] <= w[1]));
        assert!(runs[1].windows(2).all(|w| w[0] >= w[1]));

        assert!(saws(0, 3).is_empty());
        assert_eq!(saws(5, 0).len(), 5);
    }
}
