//! Description of a system loaded from TOML.
//!
//! ```toml
//! timestep = 28800.0            # optional, seconds per step
//! update_order = "simultaneous" # or "sequential"
//! extrema = "independent"       # or "first-match"
//! trail_limit = 10000           # optional, unbounded when absent
//!
//! [[bodies]]
//! name = "Sun"
//! position = [0.0, 0.0]
//! mass = 1.98892e30
//! radius = 30.0
//! color = [255, 255, 0]
//! anchor = true
//!
//! [[bodies]]
//! name = "Earth"
//! position = [-1.496e11, 0.0]
//! velocity = [0.0, 29783.0]
//! mass = 5.9742e24
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{
    body::{Body, Color},
    constants::DEFAULT_TIMESTEP,
    error::Error,
    extrema::ExtremaPolicy,
    simulator::{Simulator, UpdateOrder},
};

/// Errors raised while loading a system description.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The description is not valid TOML or does not match the expected layout.
    #[error("failed to parse system description: {0}")]
    Parse(#[from] toml::de::Error),

    /// The description could not be written as TOML.
    #[error("failed to serialize system description: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The described bodies or timestep are rejected by the simulator.
    #[error(transparent)]
    Invalid(#[from] Error),
}

/// Initial state of one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    /// Display name.
    pub name: String,
    /// Initial position in meters.
    pub position: [f64; 2],
    /// Initial velocity in meters per second.
    #[serde(default)]
    pub velocity: [f64; 2],
    /// Mass in kilograms.
    pub mass: f64,
    /// Display radius.
    #[serde(default)]
    pub radius: f64,
    /// Display color.
    #[serde(default)]
    pub color: Option<Color>,
    /// Whether the body is the gravitational center of the system.
    #[serde(default)]
    pub anchor: bool,
}

impl BodyConfig {
    /// Builds the described body.
    pub fn build(&self, trail_limit: Option<usize>) -> Result<Body, Error> {
        let mut body = Body::new(self.name.clone(), DVec2::from(self.position), self.mass)?
            .with_velocity(DVec2::from(self.velocity))
            .with_radius(self.radius);

        if let Some(color) = self.color {
            body = body.with_color(color);
        }
        if let Some(limit) = trail_limit {
            body = body.with_trail_limit(limit);
        }
        if self.anchor {
            body = body.anchored();
        }

        Ok(body)
    }
}

impl From<&Body> for BodyConfig {
    fn from(body: &Body) -> Self {
        Self {
            name: body.name().to_owned(),
            position: body.position().to_array(),
            velocity: body.velocity().to_array(),
            mass: body.mass(),
            radius: body.radius(),
            color: Some(body.color()),
            anchor: body.is_anchor(),
        }
    }
}

fn default_timestep() -> f64 {
    DEFAULT_TIMESTEP
}

/// A whole system: its bodies and how it is stepped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Simulated seconds per step.
    #[serde(default = "default_timestep")]
    pub timestep: f64,
    /// Which positions forces are computed against.
    #[serde(default)]
    pub update_order: UpdateOrder,
    /// How distance extrema are updated.
    #[serde(default)]
    pub extrema: ExtremaPolicy,
    /// Maximum trail length of every body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail_limit: Option<usize>,
    /// Bodies, in simulation order.
    pub bodies: Vec<BodyConfig>,
}

impl SystemConfig {
    /// Describes the given bodies with default stepping settings.
    pub fn from_bodies<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            update_order: UpdateOrder::default(),
            extrema: ExtremaPolicy::default(),
            trail_limit: None,
            bodies: bodies.into_iter().map(BodyConfig::from).collect(),
        }
    }

    /// Reads a description from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        content.parse()
    }

    /// Writes the description as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the bodies and the simulator stepping them.
    pub fn build(&self) -> Result<Simulator, ConfigError> {
        let bodies = self
            .bodies
            .iter()
            .map(|body| body.build(self.trail_limit))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Simulator::new(bodies, self.timestep)?
            .with_update_order(self.update_order)
            .with_extrema_policy(self.extrema))
    }
}

impl FromStr for SystemConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;

    const TWO_BODIES: &str = r#"
        timestep = 3600.0
        update_order = "sequential"
        extrema = "first-match"
        trail_limit = 4

        [[bodies]]
        name = "Sun"
        position = [0.0, 0.0]
        mass = 1.98892e30
        radius = 30.0
        color = [255, 255, 0]
        anchor = true

        [[bodies]]
        name = "Earth"
        position = [-1.496e11, 0.0]
        velocity = [0.0, 29783.0]
        mass = 5.9742e24
    "#;

    #[test]
    fn parses_full_description() {
        let config: SystemConfig = TWO_BODIES.parse().unwrap();

        assert_eq!(config.timestep, 3600.0);
        assert_eq!(config.update_order, UpdateOrder::Sequential);
        assert_eq!(config.extrema, ExtremaPolicy::FirstMatch);
        assert_eq!(config.trail_limit, Some(4));
        assert_eq!(config.bodies[0].color, Some(Color::YELLOW));
        assert!(config.bodies[0].anchor);
        assert_eq!(config.bodies[1].velocity, [0.0, 29783.0]);
        assert!(!config.bodies[1].anchor);
    }

    #[test]
    fn defaults_apply() {
        let config: SystemConfig = r#"
            [[bodies]]
            name = "Rock"
            position = [1.0, 2.0]
            mass = 1.0
        "#
        .parse()
        .unwrap();

        assert_eq!(config.timestep, DEFAULT_TIMESTEP);
        assert_eq!(config.update_order, UpdateOrder::Simultaneous);
        assert_eq!(config.extrema, ExtremaPolicy::Independent);
        assert_eq!(config.trail_limit, None);
        assert_eq!(config.bodies[0].velocity, [0.0, 0.0]);
        assert_eq!(config.bodies[0].color, None);
    }

    #[test]
    fn builds_configured_simulator() {
        let mut simulator = TWO_BODIES.parse::<SystemConfig>().unwrap().build().unwrap();

        simulator.run(10).unwrap();

        assert_eq!(simulator.timestep(), 3600.0);
        assert_eq!(simulator.update_order(), UpdateOrder::Sequential);
        assert_eq!(simulator.anchor().map(Body::name), Some("Sun"));

        let earth = &simulator.bodies()[1];
        assert_eq!(earth.extrema_policy(), ExtremaPolicy::FirstMatch);
        assert_eq!(earth.trail().len(), 4);
        assert_eq!(earth.trail().limit(), Some(4));
    }

    #[test]
    fn rejects_unknown_fields_and_values() {
        assert!(matches!(
            "mystery = 1\nbodies = []".parse::<SystemConfig>(),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            "update_order = \"backwards\"\nbodies = []".parse::<SystemConfig>(),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_multiple_anchors() {
        let config = TWO_BODIES.replace("mass = 5.9742e24", "mass = 5.9742e24\nanchor = true");

        let err = config.parse::<SystemConfig>().unwrap().build().unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid(Error::MultipleAnchors(names)) if names == ["Sun", "Earth"]
        ));
    }

    #[test]
    fn rejects_invalid_bodies() {
        let config = TWO_BODIES.replace("mass = 5.9742e24", "mass = -1.0");

        let err = config.parse::<SystemConfig>().unwrap().build().unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(Error::InvalidMass { .. })));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SystemConfig::load("does/not/exist.toml").unwrap_err();

        assert!(err.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn describes_built_in_scenario() {
        let bodies = scenario::solar_system().unwrap();
        let config = SystemConfig::from_bodies(&bodies);
        let reparsed: SystemConfig = config.to_toml().unwrap().parse().unwrap();

        assert_eq!(reparsed, config);
        assert_eq!(reparsed.build().unwrap().bodies().len(), bodies.len());
    }
}
