//! Planar geometry and mass-property formulas for spawned shapes.
//!
//! Masses here are proxies (area, length) rather than densities; the
//! moment formulas are the standard ones for each primitive about the
//! body origin.

use glam::Vec2;
use std::f32::consts::TAU;

/// `sides` points evenly spaced on a circle, vertex `i` at angle `i·2π/sides`.
/// Callers must pass `sides >= 3`.
pub fn regular_polygon_vertices(sides: u32, radius: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| Vec2::from_angle(i as f32 * TAU / sides as f32) * radius)
        .collect()
}

/// Absolute area of the closed vertex ring (shoelace), 0 below 3 points.
pub fn signed_area_mass(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut prev = points[points.len() - 1];
    for &p in points {
        sum += p.x * prev.y - p.y * prev.x;
        prev = p;
    }
    0.5 * sum.abs()
}

/// Counter-clockwise convex hull (monotone chain). Duplicate and collinear
/// points are dropped, so a degenerate input yields fewer than 3 points.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    fn half(points: impl Iterator<Item = Vec2>) -> Vec<Vec2> {
        let mut chain: Vec<Vec2> = Vec::new();
        for p in points {
            while chain.len() >= 2 {
                let (a, b) = (chain[chain.len() - 2], chain[chain.len() - 1]);
                if (b - a).perp_dot(p - b) > 0.0 {
                    break;
                }
                chain.pop();
            }
            chain.push(p);
        }
        // The last point starts the other half.
        chain.pop();
        chain
    }

    let mut hull = half(sorted.iter().copied());
    hull.extend(half(sorted.iter().rev().copied()));
    hull
}

/// Arithmetic mean of the points.
pub fn centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let sum: Vec2 = points.iter().copied().sum();
    Some(sum / points.len() as f32)
}

pub fn segment_length(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Moment of a ring (or disc when `r_inner` is 0).
pub fn moment_for_circle(mass: f32, r_inner: f32, r_outer: f32) -> f32 {
    mass * (r_inner * r_inner + r_outer * r_outer) / 2.0
}

/// Moment of a rounded segment of half thickness `radius`, about the origin.
pub fn moment_for_segment(mass: f32, a: Vec2, b: Vec2, radius: f32) -> f32 {
    let length = a.distance(b) + 2.0 * radius;
    let offset = (a + b) / 2.0;
    mass * ((length * length + 4.0 * radius * radius) / 12.0 + offset.length_squared())
}

/// Moment of a polygon about the origin, summed over signed edge triangles
/// so concave outlines and either winding come out right. Returns 0 for
/// rings with no net area.
pub fn moment_for_polygon(mass: f32, vertices: &[Vec2]) -> f32 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &v2) in vertices.iter().enumerate() {
        let v1 = vertices[(i + 1) % vertices.len()];
        let cross = v2.perp_dot(v1);
        numerator += cross * (v1.dot(v1) + v1.dot(v2) + v2.dot(v2));
        denominator += cross;
    }
    if denominator == 0.0 {
        return 0.0;
    }
    mass * (numerator / denominator).abs() / 6.0
}

/// Moment of a solid `width` × `height` box about its center.
pub fn moment_for_box(mass: f32, width: f32, height: f32) -> f32 {
    mass * (width * width + height * height) / 12.0
}
