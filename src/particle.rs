use glam::DVec2;

use crate::body::BodyId;

/// Trait to describe a particle which consists of an [identity](Particle::id), a
/// [position](Particle::position) and a [mass](Particle::mass).
///
/// Identity is what tells two particles apart when computing forces: a particle never attracts
/// itself, even through a snapshot, while two distinct particles with equal positions and masses
/// still interact.
///
/// ```
/// # use orrery::prelude::*;
/// # use glam::DVec2;
/// let body = Body::new("Probe", DVec2::new(1.0, 2.0), 5.0)?;
/// let point_mass = body.point_mass();
///
/// assert_eq!(point_mass.id, body.id());
/// assert_eq!(point_mass.position, DVec2::new(1.0, 2.0));
/// assert_eq!(point_mass.mass, 5.0);
/// # Ok::<(), orrery::Error>(())
/// ```
pub trait Particle {
    /// Identity of the particle.
    fn id(&self) -> BodyId;

    /// The position of the particle in meters.
    fn position(&self) -> DVec2;

    /// The mass of the particle in kilograms.
    fn mass(&self) -> f64;

    /// Immutable snapshot of the particle used by force computations.
    #[inline]
    fn point_mass(&self) -> PointMass {
        PointMass::new(self.id(), self.position(), self.mass())
    }
}

/// Point-mass snapshot of a particle at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMass {
    /// Identity of the particle the snapshot was taken from.
    pub id: BodyId,
    /// Position of the particle.
    pub position: DVec2,
    /// Mass of the particle.
    pub mass: f64,
}

impl PointMass {
    /// Creates a new [`PointMass`].
    #[inline]
    pub const fn new(id: BodyId, position: DVec2, mass: f64) -> Self {
        Self { id, position, mass }
    }
}

impl Particle for PointMass {
    #[inline]
    fn id(&self) -> BodyId {
        self.id
    }

    #[inline]
    fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    fn point_mass(&self) -> PointMass {
        *self
    }
}

impl<P> Particle for &P
where
    P: Particle,
{
    #[inline]
    fn id(&self) -> BodyId {
        (**self).id()
    }

    #[inline]
    fn position(&self) -> DVec2 {
        (**self).position()
    }

    #[inline]
    fn mass(&self) -> f64 {
        (**self).mass()
    }
}
