//! Parallel-for glue for per-point analysis loops.

use rayon::prelude::*;

/// Item count below which forking a rayon job costs more than it saves.
pub const PARALLEL_MIN_ITEMS: usize = 1000;

/// Map `f` over `0..n`, producing one output slot per index.
///
/// Runs sequentially below [`PARALLEL_MIN_ITEMS`] and on the rayon pool
/// otherwise. `f` only reads shared state; every output is written exactly
/// once, so both paths produce identical vectors.
pub fn parallel_map_indexed<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if n < PARALLEL_MIN_ITEMS {
        (0..n).map(f).collect()
    } else {
        (0..n).into_par_iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_and_large_agree() {
        let f = |i: usize| (i * i) as u64;
        let small: Vec<u64> = parallel_map_indexed(100, f);
        assert_eq!(small, (0..100).map(f).collect::<Vec<_>>());

        let large: Vec<u64> = parallel_map_indexed(5000, f);
        assert_eq!(large, (0..5000).map(f).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty() {
        let out: Vec<u8> = parallel_map_indexed(0, |_| 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_order_preserved_above_threshold() {
        let out = parallel_map_indexed(PARALLEL_MIN_ITEMS + 1, |i| i);
        for (i, v) in out.iter().enumerate() {
            assert_eq!(i, *v);
        }
    }
}
