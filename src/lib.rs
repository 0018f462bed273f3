//! # Orrery
//!
//! Orrery is a small gravitational N-body simulator: a fixed set of point-mass bodies attract each
//! other through Newtonian gravity and are advanced in time with a semi-implicit Euler step.
//!
//! ## Goals
//!
//! Orrery only cares about the physics. Each [`Body`](body::Body) keeps its position, velocity and
//! mass, the [`Trail`](trail::Trail) of positions it went through and the closest and farthest
//! distances from the origin it reached. Drawing, windowing or frame pacing are left to whoever
//! drives the [`Simulator`](simulator::Simulator); the only thing it needs from them is the decision
//! to advance one more step.
//!
//! Forces are computed between every pair of bodies. With the "parallel" feature enabled, the
//! computation can be spread over multiple threads thanks to [rayon](https://github.com/rayon-rs/rayon).
//!
//! # Using Orrery
//!
//! ## Creating bodies
//!
//! Bodies are built from a name, a position in meters and a mass in kilograms. Everything else is
//! optional.
//!
//! ```
//! # use orrery::prelude::*;
//! # use glam::DVec2;
//! let sun = Body::new("Sun", DVec2::ZERO, 1.98892e30)?.anchored();
//! let earth = Body::new("Earth", DVec2::new(-AU, 0.0), 5.9742e24)?
//!     .with_velocity(DVec2::new(0.0, 29_783.0))
//!     .with_color(Color::BLUE);
//! # Ok::<(), orrery::Error>(())
//! ```
//!
//! Bodies with a non-positive mass are rejected.
//!
//! ```
//! # use orrery::prelude::*;
//! # use glam::DVec2;
//! assert!(Body::new("Void", DVec2::ZERO, 0.0).is_err());
//! ```
//!
//! ## Stepping the simulation
//!
//! A [`Simulator`](simulator::Simulator) owns the bodies and advances all of them by a fixed
//! timestep at each [`step`](simulator::Simulator::step).
//!
//! ```
//! # use orrery::prelude::*;
//! # use glam::DVec2;
//! # let sun = Body::new("Sun", DVec2::ZERO, 1.98892e30)?.anchored();
//! # let earth = Body::new("Earth", DVec2::new(-AU, 0.0), 5.9742e24)?
//! #     .with_velocity(DVec2::new(0.0, 29_783.0));
//! let mut simulator = Simulator::new(vec![sun, earth], DEFAULT_TIMESTEP)?;
//!
//! for _ in 0..365 {
//!     simulator.step()?;
//! }
//!
//! let earth = &simulator.bodies()[1];
//! println!(
//!     "{}: [{:.3} AU, {:.3} AU]",
//!     earth.name(),
//!     meters_to_au(earth.min_distance()),
//!     meters_to_au(earth.max_distance()),
//! );
//! # Ok::<(), orrery::Error>(())
//! ```
//!
//! A step either advances every body or, if two bodies end up at the same position, fails with
//! [`Error::DegenerateConfiguration`] and leaves them all untouched.

#![warn(missing_docs)]

/// Bodies and their trajectory bookkeeping.
pub mod body;

/// Simulation-wide physical constants.
pub mod constants;

/// Trait for computing forces and types implementing it for the user to choose from.
pub mod compute_method;

/// Loading systems from TOML descriptions.
pub mod config;

/// Errors of the physics core.
pub mod error;

/// Closest and farthest distance tracking.
pub mod extrema;

/// Trait to implement on types representing particles.
pub mod particle;

/// Built-in initial conditions.
pub mod scenario;

/// Stepping a collection of bodies through time.
pub mod simulator;

/// Position history of a body.
pub mod trail;

pub use error::{Error, Result};

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::body::{Body, BodyId, Color};
    pub use crate::compute_method::*;
    pub use crate::constants::*;
    pub use crate::error::Error;
    pub use crate::extrema::ExtremaPolicy;
    pub use crate::particle::{Particle, PointMass};
    pub use crate::scenario;
    pub use crate::simulator::{Simulator, UpdateOrder};
}
