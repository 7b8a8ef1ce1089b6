//! Plane and solid geometry helpers.

use std::f64::consts::PI;

use crate::error::{Result, UtilError};
use crate::vector::Vec2;

/// Triangle area from its three side lengths (Heron's formula).
///
/// # Errors
/// Returns `InvalidArgument` if a side is not positive or the sides
/// violate the triangle inequality. Degenerate (flat) triangles are
/// accepted and have area 0.
///
/// # Examples
/// ```
/// use u_toolkit::geometry::triangle_area_heron;
/// assert_eq!(triangle_area_heron(3.0, 4.0, 5.0).unwrap(), 6.0);
/// assert!(triangle_area_heron(1.0, 2.0, 10.0).is_err());
/// ```
pub fn triangle_area_heron(a: f64, b: f64, c: f64) -> Result<f64> {
    for (name, side) in [("a", a), ("b", b), ("c", c)] {
        if !(side > 0.0) || !side.is_finite() {
            return Err(UtilError::invalid(name, format!("side must be positive, got {side}")));
        }
    }
    if a + b < c || a + c < b || b + c < a {
        return Err(UtilError::invalid(
            "c",
            format!("sides {a}, {b}, {c} violate the triangle inequality"),
        ));
    }
    let s = (a + b + c) / 2.0;
    // Rounding can push a flat triangle's product slightly negative
    Ok((s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt())
}

/// π·r²
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// 2π·r
pub fn circle_circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// 4/3·π·r³
pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

/// 4π·r²
pub fn sphere_surface_area(radius: f64) -> f64 {
    4.0 * PI * radius * radius
}

/// Width times height.
pub fn rectangle_area(width: f64, height: f64) -> f64 {
    width * height
}

/// Area of a simple polygon by the shoelace formula.
///
/// Vertex order may be clockwise or counter-clockwise. Fewer than three
/// vertices enclose no area.
///
/// # Complexity
/// O(n)
pub fn polygon_area(vertices: &[Vec2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(p, q)| p.cross(*q))
        .sum();
    twice.abs() / 2.0
}

/// Even-odd ray casting test. Points exactly on an edge may land on
/// either side.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (pi, pj) = (vertices[i], vertices[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pi.x + (point.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// `true` when `point` lies inside or on the circle.
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f64) -> bool {
    point.distance_to(center) <= radius
}

/// Shortest distance from `point` to the segment `[start, end]`.
pub fn distance_point_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f64 {
    let seg = end - start;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return point.distance_to(start);
    }
    let t = ((point - start).dot(seg) / len_sq).clamp(0.0, 1.0);
    point.distance_to(start + seg * t)
}

/// Degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Radians to degrees.
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_heron_right_triangle() {
        assert_eq!(triangle_area_heron(3.0, 4.0, 5.0).unwrap(), 6.0);
    }

    #[test]
    fn test_heron_equilateral() {
        let area = triangle_area_heron(2.0, 2.0, 2.0).unwrap();
        assert!((area - 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_heron_degenerate() {
        assert_eq!(triangle_area_heron(1.0, 2.0, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_heron_invalid() {
        assert!(triangle_area_heron(1.0, 1.0, 5.0).is_err());
        assert!(triangle_area_heron(0.0, 1.0, 1.0).is_err());
        assert!(triangle_area_heron(-3.0, 4.0, 5.0).is_err());
        assert!(triangle_area_heron(f64::NAN, 4.0, 5.0).is_err());
    }

    #[test]
    fn test_circles_and_spheres() {
        assert!((circle_area(2.0) - 4.0 * PI).abs() < 1e-12);
        assert!((circle_circumference(1.0) - 2.0 * PI).abs() < 1e-12);
        assert!((sphere_volume(3.0) - 36.0 * PI).abs() < 1e-9);
        assert!((sphere_surface_area(1.0) - 4.0 * PI).abs() < 1e-12);
        assert_eq!(rectangle_area(3.0, 4.0), 12.0);
    }

    #[test]
    fn test_polygon_area() {
        assert_eq!(polygon_area(&unit_square()), 1.0);
        let mut reversed = unit_square();
        reversed.reverse();
        assert_eq!(polygon_area(&reversed), 1.0);
        let tri = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 3.0)];
        assert_eq!(polygon_area(&tri), 6.0);
        assert_eq!(polygon_area(&tri[..2]), 0.0);
    }

    #[test]
    fn test_point_in_polygon() {
        let sq = unit_square();
        assert!(point_in_polygon(Vec2::new(0.5, 0.5), &sq));
        assert!(!point_in_polygon(Vec2::new(1.5, 0.5), &sq));
        assert!(!point_in_polygon(Vec2::new(0.5, -0.1), &sq));
        assert!(!point_in_polygon(Vec2::new(0.5, 0.5), &sq[..2]));
    }

    #[test]
    fn test_point_in_circle() {
        assert!(point_in_circle(Vec2::new(1.0, 0.0), Vec2::ZERO, 1.0));
        assert!(!point_in_circle(Vec2::new(1.0, 1.0), Vec2::ZERO, 1.0));
    }

    #[test]
    fn test_distance_point_to_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(distance_point_to_segment(Vec2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_point_to_segment(Vec2::new(-3.0, 4.0), a, b), 5.0);
        assert_eq!(distance_point_to_segment(Vec2::new(13.0, 4.0), a, b), 5.0);
        assert_eq!(distance_point_to_segment(Vec2::new(3.0, 4.0), a, a), 5.0);
    }

    #[test]
    fn test_angle_conversion() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-15);
        assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 1e-12);
    }
}
