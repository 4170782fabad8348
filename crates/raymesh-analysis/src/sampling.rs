//! Stratified direction sampling on the unit sphere.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raymesh_math::Vec3;

/// Draw `n` unit directions, stratified over the sphere.
///
/// An `m x m` grid with `m = floor(sqrt(n))` partitions the cylindrical
/// parameterization: `z` uniform in each latitude slab, the azimuth uniform
/// in each angular slab, one jittered sample per cell. Uniform area follows
/// from the cylinder-sphere area-preserving map. The `n - m*m` remainder is
/// filled with unconstrained uniform samples. Deterministic for a fixed
/// seed.
pub fn sample_directions(n: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = (n as f64).sqrt().floor() as usize;
    let mut dirs = Vec::with_capacity(n);

    for i in 0..m {
        for j in 0..m {
            let z = -1.0 + 2.0 * (i as f64 + rng.gen::<f64>()) / m as f64;
            let theta = TAU * (j as f64 + rng.gen::<f64>()) / m as f64;
            dirs.push(from_cylindrical(z, theta));
        }
    }
    while dirs.len() < n {
        let z = rng.gen_range(-1.0..1.0);
        let theta = rng.gen_range(0.0..TAU);
        dirs.push(from_cylindrical(z, theta));
    }
    dirs
}

fn from_cylindrical(z: f64, theta: f64) -> Vec3 {
    // Clamp guards z jittered onto the slab boundary at the poles.
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_unit_length() {
        for n in [1, 4, 37, 100, 1000] {
            let dirs = sample_directions(n, 7);
            assert_eq!(dirs.len(), n);
            for d in &dirs {
                assert!((d.norm() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let a = sample_directions(256, 42);
        let b = sample_directions(256, 42);
        assert_eq!(a, b);
        let c = sample_directions(256, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_covers_both_hemispheres() {
        let dirs = sample_directions(400, 1);
        let up = dirs.iter().filter(|d| d.z > 0.0).count();
        // Stratification keeps the latitude split close to even.
        assert!(up > 120 && up < 280, "unbalanced split: {up}");
    }

    #[test]
    fn test_mean_near_zero() {
        let dirs = sample_directions(900, 3);
        let mean = dirs.iter().sum::<Vec3>() / 900.0;
        assert!(mean.norm() < 0.1, "biased sampler: {mean:?}");
    }
}
