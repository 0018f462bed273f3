#[cfg(feature = "parallel")]
/// Compute methods that use multiple CPU threads.
pub mod parallel;

/// Compute methods that use one CPU thread.
pub mod sequential;

use glam::DVec2;

use crate::{
    constants::G,
    error::{Error, Result},
    particle::PointMass,
};

/// Trait for algorithms computing the net gravitational force on every point-mass of a snapshot.
///
/// # Example
///
/// ```
/// # use orrery::prelude::*;
/// # use glam::DVec2;
/// struct NoGravity;
///
/// impl ComputeMethod for NoGravity {
///     fn compute(&mut self, point_masses: &[PointMass]) -> orrery::Result<Vec<DVec2>> {
///         Ok(vec![DVec2::ZERO; point_masses.len()])
///     }
/// }
/// ```
pub trait ComputeMethod {
    /// Computes the force all the other point-masses exert on each point-mass.
    ///
    /// The returned vector holds one force per input, in input order. Point-masses sharing an
    /// identity do not interact. Fails with [`Error::DegenerateConfiguration`] if two distinct
    /// point-masses share a position.
    fn compute(&mut self, point_masses: &[PointMass]) -> Result<Vec<DVec2>>;
}

impl<C> ComputeMethod for &mut C
where
    C: ComputeMethod,
{
    #[inline]
    fn compute(&mut self, point_masses: &[PointMass]) -> Result<Vec<DVec2>> {
        (**self).compute(point_masses)
    }
}

/// Newtonian gravitational force `source` exerts on `target`.
///
/// The magnitude is `G * m1 * m2 / r²`, directed from `target` towards `source`.
#[inline]
pub fn gravitational_force(target: &PointMass, source: &PointMass) -> Result<DVec2> {
    let degenerate = || Error::DegenerateConfiguration {
        first: target.id,
        second: source.id,
    };

    let dir = source.position - target.position;
    let mag_2 = dir.length_squared();

    if mag_2 == 0.0 {
        return Err(degenerate());
    }

    let force = G * target.mass * source.mass / mag_2;
    let theta = dir.y.atan2(dir.x);
    let force = DVec2::new(theta.cos() * force, theta.sin() * force);

    // Separations small enough to overflow are as degenerate as zero ones.
    if !force.is_finite() {
        return Err(degenerate());
    }

    Ok(force)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::body::Body;
    use crate::particle::Particle;

    fn point_masses() -> Vec<PointMass> {
        [
            (DVec2::new(0.0, 0.0), 2.0e24),
            (DVec2::new(1.0e8, 0.0), 3.0e22),
            (DVec2::new(-4.0e7, 9.0e7), 5.0e20),
            (DVec2::new(2.0e8, -1.0e8), 1.0),
        ]
        .into_iter()
        .map(|(position, mass)| Body::new("P", position, mass).unwrap().point_mass())
        .collect()
    }

    pub fn force_computation<C>(mut cm: C)
    where
        C: ComputeMethod,
    {
        let point_masses = point_masses();
        let computed = cm.compute(&point_masses).unwrap();

        assert_eq!(computed.len(), point_masses.len());

        for (point_mass1, computed) in point_masses.iter().zip(computed) {
            let mut force = DVec2::ZERO;

            for point_mass2 in point_masses.iter() {
                let dir = point_mass2.position - point_mass1.position;
                let mag_2 = dir.length_squared();

                if mag_2 != 0.0 {
                    force += dir * (G * point_mass1.mass * point_mass2.mass)
                        / (mag_2 * mag_2.sqrt());
                }
            }

            assert!((force - computed).length() <= force.length() * 1E-9);
        }
    }

    pub fn degenerate_detection<C>(mut cm: C)
    where
        C: ComputeMethod,
    {
        let mut point_masses = point_masses();
        point_masses[3].position = point_masses[1].position;

        let err = cm.compute(&point_masses).unwrap_err();

        assert!(matches!(err, Error::DegenerateConfiguration { .. }));
    }

    pub fn same_identity_ignored<C>(mut cm: C)
    where
        C: ComputeMethod,
    {
        let point_mass = point_masses()[0];

        let computed = cm.compute(&[point_mass, point_mass]).unwrap();

        assert_eq!(computed, vec![DVec2::ZERO, DVec2::ZERO]);
    }

    #[test]
    fn force_points_towards_source() {
        let point_masses = point_masses();
        let force = gravitational_force(&point_masses[0], &point_masses[1]).unwrap();

        assert!(force.x > 0.0);
        assert!(force.y.abs() <= force.x * 1E-12);
    }

    #[test]
    fn inverse_square_law() {
        let point_masses = point_masses();
        let near = point_masses[1];
        let mut far = near;
        far.position *= 2.0;

        let ratio = gravitational_force(&point_masses[0], &near).unwrap().length()
            / gravitational_force(&point_masses[0], &far).unwrap().length();

        assert!((ratio - 4.0).abs() < 1E-9);
    }
}
