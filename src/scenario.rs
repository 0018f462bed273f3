use glam::DVec2;

use crate::{
    body::{Body, Color},
    constants::AU,
    error::Result,
};

/// The Sun, the four inner planets and a small asteroid, all starting on the x axis.
///
/// The Sun is the anchor and sits at rest at the origin.
pub fn solar_system() -> Result<Vec<Body>> {
    let sun = Body::new("Sun", DVec2::ZERO, 1.98892e30)?
        .with_radius(30.0)
        .with_color(Color::YELLOW)
        .anchored();

    let earth = Body::new("Earth", DVec2::new(-AU, 0.0), 5.9742e24)?
        .with_velocity(DVec2::new(0.0, 29.783e3))
        .with_radius(6.0)
        .with_color(Color::BLUE);

    let mars = Body::new("Mars", DVec2::new(-1.524 * AU, 0.0), 6.39e23)?
        .with_velocity(DVec2::new(0.0, 24.077e3))
        .with_radius(3.0)
        .with_color(Color::RED);

    let mercury = Body::new("Mercury", DVec2::new(0.387 * AU, 0.0), 3.30e23)?
        .with_velocity(DVec2::new(0.0, -47.4e3))
        .with_radius(2.0)
        .with_color(Color::DARK_GREY);

    let venus = Body::new("Venus", DVec2::new(0.723 * AU, 0.0), 4.8685e24)?
        .with_velocity(DVec2::new(0.0, -35.02e3))
        .with_radius(5.2)
        .with_color(Color::WHITE);

    let asteroid = Body::new("Asteroid", DVec2::new(0.72 * AU, 0.0), 4.8685)?
        .with_velocity(DVec2::new(0.0, -22.0e3))
        .with_radius(3.0)
        .with_color(Color::YELLOW);

    Ok(vec![sun, earth, mars, mercury, venus, asteroid])
}

/// A star at the origin and one planet one astronomical unit away on a near-circular orbit.
pub fn sun_and_earth() -> Result<Vec<Body>> {
    let mut bodies = solar_system()?;
    bodies.truncate(2);

    Ok(bodies)
}
