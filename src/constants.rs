/// Newtonian gravitational constant in m³/(kg⋅s²).
pub const G: f64 = 6.67428e-11;

/// Default simulated seconds advanced by one step (a third of a day).
pub const DEFAULT_TIMESTEP: f64 = 1200.0 * 24.0;

/// Astronomical unit in meters, as used by the built-in scenario and the driver's display.
pub const AU: f64 = 149.6e6 * 1000.0;

/// Converts meters to astronomical units.
#[inline]
pub fn meters_to_au(meters: f64) -> f64 {
    meters / AU
}
