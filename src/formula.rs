//! Closed-form circular-arc bend formulas.
//!
//! Every function relates a bend's centerline radius `r` and angle `a`
//! (radians) to a derived length. They are exact and side-effect-free; the
//! per-type calculators compose them, and only the segmented-run search
//! introduces any tolerance concern.

use std::f64::consts::FRAC_PI_2;

/// Vertical rise consumed by the bend arc itself: `r - r*cos(a)`.
#[must_use]
pub fn bend_rise(r: f64, a: f64) -> f64 {
    r - r * a.cos()
}

/// Horizontal run consumed by the bend arc itself: `r*sin(a)`.
#[must_use]
pub fn bend_run(r: f64, a: f64) -> f64 {
    r * a.sin()
}

/// Arc length of the bend: `r*a`.
#[must_use]
pub fn arc_length(r: f64, a: f64) -> f64 {
    r * a
}

/// Straight-segment length needed for a vertical offset `rise` at angle `a`.
#[must_use]
pub fn straight_for_rise(rise: f64, a: f64) -> f64 {
    rise / a.sin()
}

/// Horizontal projection of a straight segment of length `len` at angle `a`.
#[must_use]
pub fn straight_run(len: f64, a: f64) -> f64 {
    len * a.cos()
}

/// Tangent ("setback") length from the arc start to the bend's virtual vertex.
#[must_use]
pub fn setback(r: f64, a: f64) -> f64 {
    r * (a / 2.0).tan()
}

/// Horizontal run of a kick bend, measured on the complementary angle.
#[must_use]
pub fn kick_run(r: f64, a: f64) -> f64 {
    r * (FRAC_PI_2 - a).cos()
}

/// Vertical rise of a kick bend, measured on the complementary angle.
#[must_use]
pub fn kick_rise(r: f64, a: f64) -> f64 {
    r - r * (FRAC_PI_2 - a).sin()
}

/// Chord length across a bend arc: `2*r*sin(a/2)`.
#[must_use]
pub fn chord_length(r: f64, a: f64) -> f64 {
    2.0 * r * (a / 2.0).sin()
}
