//! 2D circular arc math utilities.
//!
//! Angles are in radians, measured counter-clockwise from the +X axis.
//! A positive sweep travels counter-clockwise, a negative one clockwise.

use std::f64::consts::{PI, TAU};

/// Resolves the signed sweep of an arc from its start and end angles.
///
/// The counter-clockwise sweep `end - start` is wrapped into `(0, 2π]`. It is
/// `0` only when both angles are identical. For a clockwise arc the sweep is
/// the complementary negative turn (`-2π` for a full circle).
#[must_use]
pub fn resolve_sweep(start_angle: f64, end_angle: f64, clockwise: bool) -> f64 {
    let raw = end_angle - start_angle;
    let same_points = raw.abs() < f64::EPSILON;

    let mut sweep = raw.rem_euclid(TAU);
    if sweep < f64::EPSILON {
        sweep = if same_points { 0.0 } else { TAU };
    }

    if clockwise && !same_points {
        if (sweep - TAU).abs() < f64::EPSILON {
            sweep = -TAU;
        } else {
            sweep -= TAU;
        }
    }

    sweep
}

/// Returns the point at normalized parameter `t ∈ [0, 1]` along an arc.
#[must_use]
pub fn arc_point_at(
    cx: f64,
    cy: f64,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    t: f64,
) -> (f64, f64) {
    let angle = start_angle + sweep * t;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Computes the number of chords needed to approximate an arc so that the
/// sagitta of each chord stays within `tolerance`.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(θ/2))  =>  θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
