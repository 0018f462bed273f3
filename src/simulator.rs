use std::collections::HashSet;

use glam::DVec2;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    body::{Body, BodyId},
    compute_method::{gravitational_force, sequential, ComputeMethod},
    constants::DEFAULT_TIMESTEP,
    error::{Error, Result},
    extrema::ExtremaPolicy,
    particle::{Particle, PointMass},
};

/// Which positions the force on a body is computed against during a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateOrder {
    /// Every force of a step is computed against the positions from the end of the previous step.
    #[default]
    Simultaneous,
    /// Bodies are advanced one after the other, so the force on a body sees the already advanced
    /// positions of the bodies before it in the collection.
    Sequential,
}

/// The structure owning the bodies and advancing them in time.
///
/// ```
/// # use orrery::prelude::*;
/// let mut simulator = Simulator::new(scenario::solar_system()?, DEFAULT_TIMESTEP)?;
///
/// for _ in 0..10 {
///     simulator.step()?;
/// }
///
/// for body in simulator.bodies().iter().filter(|b| !b.is_anchor()) {
///     assert_eq!(body.trail().len(), 10);
///     assert!(body.min_distance() <= body.max_distance());
/// }
/// # Ok::<(), orrery::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<Body>,
    timestep: f64,
    update_order: UpdateOrder,
    steps: u64,
}

impl Simulator {
    /// Creates a simulator advancing `bodies` by `timestep` seconds per step.
    ///
    /// Fails if the timestep is not strictly positive and finite, if a body is given twice, if
    /// more than one body is anchored, or if two bodies share a position.
    pub fn new(bodies: Vec<Body>, timestep: f64) -> Result<Self> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(Error::InvalidTimestep(timestep));
        }

        let mut ids = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            if !ids.insert(body.id()) {
                return Err(Error::DuplicateBody(body.id()));
            }
        }

        let anchors: Vec<_> = bodies
            .iter()
            .filter(|body| body.is_anchor())
            .map(|body| body.name().to_owned())
            .collect();

        if anchors.len() > 1 {
            return Err(Error::MultipleAnchors(anchors));
        }

        for (i, body1) in bodies.iter().enumerate() {
            for body2 in &bodies[i + 1..] {
                if body1.position() == body2.position() {
                    return Err(Error::DegenerateConfiguration {
                        first: body1.id(),
                        second: body2.id(),
                    });
                }
            }
        }

        debug!(
            "simulating {} bodies with a timestep of {} s",
            bodies.len(),
            timestep
        );

        Ok(Self {
            bodies,
            timestep,
            update_order: UpdateOrder::default(),
            steps: 0,
        })
    }

    /// Creates a simulator using [`DEFAULT_TIMESTEP`].
    pub fn with_default_timestep(bodies: Vec<Body>) -> Result<Self> {
        Self::new(bodies, DEFAULT_TIMESTEP)
    }

    /// Sets the [`UpdateOrder`] used by the following steps.
    pub fn with_update_order(mut self, update_order: UpdateOrder) -> Self {
        self.update_order = update_order;
        self
    }

    /// Sets the [`ExtremaPolicy`] of every body.
    pub fn with_extrema_policy(mut self, policy: ExtremaPolicy) -> Self {
        for body in &mut self.bodies {
            body.set_extrema_policy(policy);
        }
        self
    }
}

impl Simulator {
    /// Advances every body by one timestep.
    ///
    /// Forces are computed with [`sequential::BruteForce`]. On error, no body is modified.
    #[inline]
    pub fn step(&mut self) -> Result<()> {
        self.step_with(sequential::BruteForce)
    }

    /// Advances every body by one timestep using the provided [`ComputeMethod`].
    ///
    /// The compute method is only used with [`UpdateOrder::Simultaneous`]; sequential updates
    /// are inherently single-threaded. On error, no body is modified.
    pub fn step_with<C>(&mut self, mut cm: C) -> Result<()>
    where
        C: ComputeMethod,
    {
        let forces = match self.update_order {
            UpdateOrder::Simultaneous => {
                let point_masses: Vec<_> = self.bodies.iter().map(Particle::point_mass).collect();
                cm.compute(&point_masses)
            }
            UpdateOrder::Sequential => self.sequential_forces(),
        };

        let forces = match forces {
            Ok(forces) => forces,
            Err(err) => {
                warn!("step {} aborted: {}", self.steps + 1, err);
                return Err(err);
            }
        };

        for (body, force) in self.bodies.iter_mut().zip(forces) {
            body.record_distance();
            body.integrate(force, self.timestep);
        }

        self.steps += 1;
        debug!("step {} done, t = {} s", self.steps, self.elapsed());

        Ok(())
    }

    /// Calls [`step`](Simulator::step) `steps` times, stopping at the first error.
    pub fn run(&mut self, steps: usize) -> Result<()> {
        (0..steps).try_for_each(|_| self.step())
    }

    /// Forces of a step where each body sees the advanced positions of the bodies before it.
    ///
    /// The advance is replayed on a scratch copy of the kinematic state so that the bodies are
    /// only written once every force is known.
    fn sequential_forces(&self) -> Result<Vec<DVec2>> {
        let dt = self.timestep;

        let mut scratch: Vec<(PointMass, DVec2)> = self
            .bodies
            .iter()
            .map(|body| (body.point_mass(), body.velocity()))
            .collect();

        let mut forces = Vec::with_capacity(scratch.len());

        for i in 0..scratch.len() {
            let target = scratch[i].0;

            let force = scratch
                .iter()
                .filter(|(point_mass, _)| point_mass.id != target.id)
                .try_fold(DVec2::ZERO, |force, (point_mass, _)| -> Result<DVec2> {
                    Ok(force + gravitational_force(&target, point_mass)?)
                })?;

            let (point_mass, velocity) = &mut scratch[i];
            *velocity += force / point_mass.mass * dt;
            point_mass.position += *velocity * dt;

            forces.push(force);
        }

        Ok(forces)
    }
}

impl Simulator {
    /// The bodies, in the order they were given.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Iterates over the bodies.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// The body with the given identity.
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id() == id)
    }

    /// The body marked as the gravitational center, if any.
    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().find(|body| body.is_anchor())
    }

    /// Simulated seconds advanced per step.
    #[inline]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Current [`UpdateOrder`].
    #[inline]
    pub fn update_order(&self) -> UpdateOrder {
        self.update_order
    }

    /// Number of completed steps.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds elapsed since the start.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.timestep
    }

    /// Sum of the momenta of all bodies.
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
