use glam::DVec2;

use super::{gravitational_force, ComputeMethod};
use crate::{error::Result, particle::PointMass};

/// A brute-force [`ComputeMethod`] using the CPU with [rayon](https://github.com/rayon-rs/rayon).
///
/// The force on each point-mass is summed independently, one point-mass per task.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl ComputeMethod for BruteForce {
    #[inline]
    fn compute(&mut self, point_masses: &[PointMass]) -> Result<Vec<DVec2>> {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

        point_masses
            .par_iter()
            .map(|point_mass1| {
                point_masses
                    .iter()
                    .filter(|point_mass2| point_mass2.id != point_mass1.id)
                    .try_fold(DVec2::ZERO, |force, point_mass2| -> Result<DVec2> {
                        Ok(force + gravitational_force(point_mass1, point_mass2)?)
                    })
            })
            .collect()
    }
}
