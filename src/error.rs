use crate::body::BodyId;

/// Errors raised by the physics core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Two bodies sit at exactly the same position, so the force between them is undefined.
    #[error("bodies {first} and {second} are at zero separation")]
    DegenerateConfiguration {
        /// Body on which the force was being computed.
        first: BodyId,
        /// Body sharing its position.
        second: BodyId,
    },

    /// A body was given a mass that is not strictly positive and finite.
    #[error("body `{name}` has invalid mass {mass} (must be positive and finite)")]
    InvalidMass {
        /// Name of the rejected body.
        name: String,
        /// The rejected mass.
        mass: f64,
    },

    /// The timestep is not strictly positive and finite.
    #[error("invalid timestep {0} (must be positive and finite)")]
    InvalidTimestep(f64),

    /// More than one body is marked as the gravitational center.
    #[error("more than one anchor: {}", .0.join(", "))]
    MultipleAnchors(Vec<String>),

    /// The same body was handed to a simulator twice.
    #[error("body {0} appears more than once")]
    DuplicateBody(BodyId),
}

/// Result type of the physics core.
pub type Result<T> = std::result::Result<T, Error>;
