use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{
    compute_method::gravitational_force,
    error::{Error, Result},
    extrema::{DistanceExtrema, ExtremaPolicy},
    particle::Particle,
    trail::Trail,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a [`Body`], unique within the process.
///
/// Clones of a body share its identity: they are snapshots of the same body, not new bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u64);

impl BodyId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// RGB color a presentation layer may draw a body with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    #[allow(missing_docs)]
    pub const WHITE: Self = Self([255, 255, 255]);
    #[allow(missing_docs)]
    pub const YELLOW: Self = Self([255, 255, 0]);
    #[allow(missing_docs)]
    pub const BLUE: Self = Self([100, 149, 237]);
    #[allow(missing_docs)]
    pub const RED: Self = Self([188, 39, 50]);
    #[allow(missing_docs)]
    pub const DARK_GREY: Self = Self([80, 78, 81]);
}

/// A gravitating point mass and the trajectory it went through.
///
/// ```
/// # use orrery::prelude::*;
/// # use glam::DVec2;
/// let sun = Body::new("Sun", DVec2::ZERO, 1.98892e30)?.anchored();
/// let mut earth = Body::new("Earth", DVec2::new(-AU, 0.0), 5.9742e24)?
///     .with_velocity(DVec2::new(0.0, 29_783.0));
///
/// let force = earth.compute_force([&sun])?;
/// earth.integrate(force, DEFAULT_TIMESTEP);
///
/// assert!(earth.velocity().x > 0.0);
/// assert_eq!(earth.trail().len(), 1);
/// # Ok::<(), orrery::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    name: String,
    position: DVec2,
    velocity: DVec2,
    mass: f64,
    radius: f64,
    color: Color,
    is_anchor: bool,
    trail: Trail,
    extrema: DistanceExtrema,
    extrema_policy: ExtremaPolicy,
}

impl Body {
    /// Creates a body at rest.
    ///
    /// Fails with [`Error::InvalidMass`] if `mass` is not strictly positive and finite.
    pub fn new(name: impl Into<String>, position: DVec2, mass: f64) -> Result<Self> {
        let name = name.into();

        if !(mass.is_finite() && mass > 0.0) {
            return Err(Error::InvalidMass { name, mass });
        }

        Ok(Self {
            id: BodyId::next(),
            name,
            position,
            velocity: DVec2::ZERO,
            mass,
            radius: 0.0,
            color: Color::WHITE,
            is_anchor: false,
            trail: Trail::new(),
            extrema: DistanceExtrema::default(),
            extrema_policy: ExtremaPolicy::default(),
        })
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the display radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Marks the body as the gravitational center of the system.
    pub fn anchored(mut self) -> Self {
        self.is_anchor = true;
        self
    }

    /// Caps the trail to the `limit` most recent positions.
    pub fn with_trail_limit(mut self, limit: usize) -> Self {
        self.trail = Trail::with_limit(limit);
        self
    }

    /// Sets how the distance extrema are updated.
    pub fn with_extrema_policy(mut self, policy: ExtremaPolicy) -> Self {
        self.extrema_policy = policy;
        self
    }

    pub(crate) fn set_extrema_policy(&mut self, policy: ExtremaPolicy) {
        self.extrema_policy = policy;
    }
}

impl Body {
    /// Computes the net gravitational force the `others` exert on this body and refreshes its
    /// distance from the origin and the extrema.
    ///
    /// Particles sharing this body's [identity](Body::id) are skipped. On error the body is left
    /// untouched.
    pub fn compute_force<I>(&mut self, others: I) -> Result<DVec2>
    where
        I: IntoIterator,
        I::Item: Particle,
    {
        let force = self.net_force(others)?;
        self.record_distance();

        Ok(force)
    }

    /// Computes the net gravitational force the `others` exert on this body without touching it.
    pub fn net_force<I>(&self, others: I) -> Result<DVec2>
    where
        I: IntoIterator,
        I::Item: Particle,
    {
        let target = self.point_mass();

        others
            .into_iter()
            .filter(|other| other.id() != self.id)
            .try_fold(DVec2::ZERO, |force, other| -> Result<DVec2> {
                Ok(force + gravitational_force(&target, &other.point_mass())?)
            })
    }

    /// Recomputes the distance from the origin and tightens the extrema.
    #[inline]
    pub fn record_distance(&mut self) {
        self.extrema
            .record(self.position.length(), self.extrema_policy);
    }

    /// Advances the body by `dt` seconds under `force` with a semi-implicit Euler step and
    /// records the new position in the trail.
    #[inline]
    pub fn integrate(&mut self, force: DVec2, dt: f64) {
        self.velocity += force / self.mass * dt;
        self.position += self.velocity * dt;
        self.trail.push(self.position);
    }
}

impl Body {
    /// Identity of the body.
    #[inline]
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current position in meters.
    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current velocity in meters per second.
    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Mass in kilograms.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Momentum in kg⋅m/s.
    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Display radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Display color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the body is the gravitational center of the system.
    #[inline]
    pub fn is_anchor(&self) -> bool {
        self.is_anchor
    }

    /// Positions the body went through, oldest first.
    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Distance from the origin when it was last recorded.
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.extrema.distance()
    }

    /// Closest recorded distance from the origin (perigee).
    #[inline]
    pub fn min_distance(&self) -> f64 {
        self.extrema.min()
    }

    /// Farthest recorded distance from the origin (apogee).
    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.extrema.max()
    }

    /// How the distance extrema are updated.
    #[inline]
    pub fn extrema_policy(&self) -> ExtremaPolicy {
        self.extrema_policy
    }
}

impl Particle for Body {
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
}
