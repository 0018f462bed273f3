use glam::DVec2;

use super::{gravitational_force, ComputeMethod};
use crate::{error::Result, particle::PointMass};

/// A brute-force [`ComputeMethod`] using the CPU.
///
/// Each pair is visited once and its force applied to both point-masses with opposite signs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl ComputeMethod for BruteForce {
    #[inline]
    fn compute(&mut self, point_masses: &[PointMass]) -> Result<Vec<DVec2>> {
        let len = point_masses.len();
        let mut forces = vec![DVec2::ZERO; len];

        for i in 0..len {
            let point_mass1 = &point_masses[i];
            let mut force = DVec2::ZERO;

            for j in (i + 1)..len {
                let point_mass2 = &point_masses[j];

                if point_mass1.id == point_mass2.id {
                    continue;
                }

                let f = gravitational_force(point_mass1, point_mass2)?;

                force += f;
                forces[j] -= f;
            }

            forces[i] += force;
        }

        Ok(forces)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests;
    use super::*;

    #[test]
    fn brute_force() {
        tests::force_computation(BruteForce);
    }

    #[test]
    fn brute_force_degenerate() {
        tests::degenerate_detection(BruteForce);
    }

    #[test]
    fn brute_force_same_identity() {
        tests::same_identity_ignored(BruteForce);
    }
}
