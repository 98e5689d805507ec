//! Ship shape emitters
//!
//! Each emitter is a pure function producing [`ShapeBatch`] values in the
//! ship's model space. The hull lies in the XY plane, centered on the origin,
//! with its thickness along Z; the ship transform in [`crate::Scene`] pitches
//! it to face the camera.

use std::f32::consts::TAU;

use starship_math::Vec3;

use crate::{Material, Primitive, ShapeBatch};

/// Number of rim panels around the hull
pub const HULL_PANELS: usize = 6;

/// Number of sides of the cockpit dome
pub const COCKPIT_SIDES: usize = 20;

/// Height of the tail plates above the hull plane
const TAIL_HEIGHT: f32 = -0.02 + 0.15;

/// Geometry parameters of the elliptical hull
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullParams {
    pub radius_x: f32,
    pub radius_y: f32,
    /// Total thickness; the disc sits at `depth / 2`
    pub depth: f32,
    /// Ring subdivisions of the disc
    pub sides: usize,
}

impl Default for HullParams {
    fn default() -> Self {
        Self {
            radius_x: 1.2,
            radius_y: 1.2,
            depth: 0.2,
            sides: 50,
        }
    }
}

/// Angle of step `i` out of `n` equal steps around a full turn
#[inline]
fn ring_angle(i: usize, n: usize) -> f32 {
    TAU * i as f32 / n as f32
}

/// Hull disc as a triangle fan
///
/// Emits the center followed by `sides + 1` ring points, so the last ring
/// point closes the loop onto the first.
pub fn hull_fan(radius_x: f32, radius_y: f32, depth: f32, sides: usize) -> ShapeBatch {
    let half = depth / 2.0;
    let mut vertices = Vec::with_capacity(sides + 2);
    vertices.push(Vec3::ZERO);
    vertices.extend(
        (0..=sides).map(|i| Vec3::on_ellipse(radius_x, radius_y, ring_angle(i, sides), half)),
    );
    ShapeBatch::new(Primitive::TriangleFan, Material::HULL, vertices)
}

/// Rim panels joining the top and bottom of the hull edge
pub fn hull_panels(radius_x: f32, radius_y: f32, depth: f32) -> ShapeBatch {
    let half = depth / 2.0;
    let mut vertices = Vec::with_capacity(HULL_PANELS * 4);
    for j in 0..HULL_PANELS {
        let a1 = ring_angle(j, HULL_PANELS);
        let a2 = ring_angle(j + 1, HULL_PANELS);
        vertices.push(Vec3::on_ellipse(radius_x, radius_y, a1, half));
        vertices.push(Vec3::on_ellipse(radius_x, radius_y, a2, half));
        vertices.push(Vec3::on_ellipse(radius_x, radius_y, a2, -half));
        vertices.push(Vec3::on_ellipse(radius_x, radius_y, a1, -half));
    }
    ShapeBatch::new(Primitive::Quads, Material::PANEL, vertices)
}

/// Hull disc followed by its rim panels
pub fn hull(params: &HullParams) -> Vec<ShapeBatch> {
    vec![
        hull_fan(params.radius_x, params.radius_y, params.depth, params.sides),
        hull_panels(params.radius_x, params.radius_y, params.depth),
    ]
}

/// Two swept wings plus their detail lines
pub fn wings() -> Vec<ShapeBatch> {
    let plates = vec![
        // Left
        Vec3::new(-0.6, 0.0, -0.1),
        Vec3::new(-0.2, 0.1, 0.1),
        Vec3::new(-0.2, -0.1, 0.1),
        // Right
        Vec3::new(0.6, 0.0, -0.1),
        Vec3::new(0.2, 0.1, 0.1),
        Vec3::new(0.2, -0.1, 0.1),
    ];

    let lines = (-3..=3)
        .flat_map(|i| {
            let offset = i as f32 * 0.1;
            [
                Vec3::new(-0.6 + offset, 0.0, -0.1),
                Vec3::new(-0.2 + offset, 0.0, 0.1),
            ]
        })
        .collect();

    vec![
        ShapeBatch::new(Primitive::Triangles, Material::WING, plates),
        ShapeBatch::new(Primitive::Lines, Material::DETAIL, lines),
    ]
}

/// Cockpit dome as a shallow cone fan
pub fn cockpit() -> ShapeBatch {
    let mut vertices = Vec::with_capacity(COCKPIT_SIDES + 2);
    vertices.push(Vec3::new(0.0, 0.0, 0.15));
    vertices.extend(
        (0..=COCKPIT_SIDES).map(|i| Vec3::on_ellipse(0.3, 0.3, ring_angle(i, COCKPIT_SIDES), 0.1)),
    );
    ShapeBatch::new(Primitive::TriangleFan, Material::COCKPIT, vertices)
}

/// Cross lines over the hull
pub fn details() -> ShapeBatch {
    let vertices = (-5..=5)
        .flat_map(|i| {
            let x = i as f32 * 0.1;
            [Vec3::new(x, 0.0, 0.15), Vec3::new(x, 0.0, -0.15)]
        })
        .collect();
    ShapeBatch::new(Primitive::Lines, Material::DETAIL, vertices)
}

/// Two stacked tail plates plus their stripes
pub fn tail() -> Vec<ShapeBatch> {
    let y = TAIL_HEIGHT;
    let plates = vec![
        Vec3::new(-0.05, y, -0.05),
        Vec3::new(0.05, y, -0.05),
        Vec3::new(0.05, y, -0.5),
        Vec3::new(-0.05, y, -0.5),
        Vec3::new(-0.03, y, -0.5),
        Vec3::new(0.03, y, -0.5),
        Vec3::new(0.03, y, -1.0),
        Vec3::new(-0.03, y, -1.0),
    ];

    let stripes = (1..5)
        .flat_map(|i| {
            let x = -0.05 + i as f32 * 0.02;
            [Vec3::new(x, y, -0.05), Vec3::new(x, y, -1.0)]
        })
        .collect();

    vec![
        ShapeBatch::new(Primitive::Quads, Material::PANEL, plates),
        ShapeBatch::new(Primitive::Lines, Material::DETAIL, stripes),
    ]
}

/// The whole ship in draw order: hull, wings, cockpit, details, tail
pub fn ship_batches(hull_params: &HullParams) -> Vec<ShapeBatch> {
    let mut batches = hull(hull_params);
    batches.extend(wings());
    batches.push(cockpit());
    batches.push(details());
    batches.extend(tail());
    batches
}
