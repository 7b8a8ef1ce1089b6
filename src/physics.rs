//! Toy physics formulas for gameplay tuning.
//!
//! SI units throughout; launch angles are in degrees because that is
//! what designers type into inspectors.

use std::f64::consts::PI;

use crate::error::{Result, UtilError};

/// Standard gravity at Earth's surface, m/s².
pub const EARTH_GRAVITY: f64 = 9.81;
/// Newtonian constant of gravitation, N·m²/kg².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// ½·m·v²
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity * velocity
}

/// m·g·h
pub fn potential_energy(mass: f64, height: f64, gravity: f64) -> f64 {
    mass * gravity * height
}

/// Linear momentum p = m·v.
pub fn momentum(mass: f64, velocity: f64) -> f64 {
    mass * velocity
}

/// Distance fallen from rest after `time` seconds: ½·g·t².
pub fn free_fall_distance(time: f64, gravity: f64) -> f64 {
    0.5 * gravity * time * time
}

/// Speed after falling from rest for `time` seconds: g·t.
pub fn free_fall_velocity(time: f64, gravity: f64) -> f64 {
    gravity * time
}

/// Horizontal range on flat ground: v²·sin(2θ)/g.
pub fn projectile_range(speed: f64, angle_deg: f64, gravity: f64) -> f64 {
    speed * speed * (2.0 * angle_deg.to_radians()).sin() / gravity
}

/// Apex height: (v·sin θ)²/(2g).
pub fn projectile_max_height(speed: f64, angle_deg: f64, gravity: f64) -> f64 {
    let vy = speed * angle_deg.to_radians().sin();
    vy * vy / (2.0 * gravity)
}

/// Airtime on flat ground: 2·v·sin θ/g.
pub fn projectile_time_of_flight(speed: f64, angle_deg: f64, gravity: f64) -> f64 {
    2.0 * speed * angle_deg.to_radians().sin() / gravity
}

/// Newtonian attraction G·m₁·m₂/r².
///
/// # Errors
/// Returns `InvalidArgument` if `distance` is not positive.
pub fn gravitational_force(mass1: f64, mass2: f64, distance: f64) -> Result<f64> {
    if !(distance > 0.0) {
        return Err(UtilError::invalid(
            "distance",
            format!("must be positive, got {distance}"),
        ));
    }
    Ok(GRAVITATIONAL_CONSTANT * mass1 * mass2 / (distance * distance))
}

/// Escape velocity √(2GM/r).
///
/// # Errors
/// Returns `InvalidArgument` if `radius` is not positive or `mass` is negative.
///
/// # Examples
/// ```
/// use u_toolkit::physics::escape_velocity;
/// // Earth: ~11.2 km/s
/// let v = escape_velocity(5.972e24, 6.371e6).unwrap();
/// assert!((v - 11_186.0).abs() < 10.0);
/// ```
pub fn escape_velocity(mass: f64, radius: f64) -> Result<f64> {
    if !(radius > 0.0) {
        return Err(UtilError::invalid("radius", format!("must be positive, got {radius}")));
    }
    if mass < 0.0 {
        return Err(UtilError::invalid("mass", format!("must be non-negative, got {mass}")));
    }
    Ok((2.0 * GRAVITATIONAL_CONSTANT * mass / radius).sqrt())
}

/// Small-angle period of a simple pendulum, 2π·√(L/g).
///
/// # Errors
/// Returns `InvalidArgument` if `length` is negative or `gravity` is not positive.
pub fn pendulum_period(length: f64, gravity: f64) -> Result<f64> {
    if !(length >= 0.0) {
        return Err(UtilError::invalid("length", format!("must be non-negative, got {length}")));
    }
    if !(gravity > 0.0) {
        return Err(UtilError::invalid("gravity", format!("must be positive, got {gravity}")));
    }
    Ok(2.0 * PI * (length / gravity).sqrt())
}

/// V = I·R
pub fn ohms_law_voltage(current: f64, resistance: f64) -> f64 {
    current * resistance
}

/// Work done by a force at `angle_deg` to the displacement: F·d·cos θ.
pub fn work_done(force: f64, distance: f64, angle_deg: f64) -> f64 {
    force * distance * angle_deg.to_radians().cos()
}
